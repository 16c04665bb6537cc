pub mod assemble;
pub mod cli;
pub mod extract;
pub mod fetch;
pub mod generator;
pub mod resume;
pub mod utils;

pub use generator::{GenerateConfig, GenerateReport, ResumeWriter};
