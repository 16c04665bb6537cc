// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::generator::{GenerateConfig, ResumeWriter};

#[derive(Parser)]
#[command(name = "resume-writer")]
#[command(version, about = "Generate targeted resumes based on job postings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a targeted resume for a job posting
    Generate {
        /// URL of the job posting
        #[arg(short = 'j', long)]
        job_url: String,

        /// Path to your current resume (text or JSON)
        #[arg(short = 'r', long)]
        resume: Option<PathBuf>,

        /// Your personal websites or portfolio URLs
        #[arg(short = 'w', long, num_args = 1..)]
        websites: Vec<String>,

        /// Your social profile URLs (LinkedIn, GitHub, etc.)
        #[arg(short = 's', long, num_args = 1..)]
        social: Vec<String>,

        /// Output file path for the generated resume
        #[arg(short = 'o', long, default_value = "./output/resume.txt")]
        output: PathBuf,
    },
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            job_url,
            resume,
            websites,
            social,
            output,
        } => {
            info!("Job URL: {}", job_url);
            info!(
                "Current resume: {}",
                resume
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "none provided".to_string())
            );
            info!(
                "Websites: {}",
                if websites.is_empty() {
                    "none provided".to_string()
                } else {
                    websites.join(", ")
                }
            );
            info!(
                "Social profiles: {}",
                if social.is_empty() {
                    "none provided".to_string()
                } else {
                    social.join(", ")
                }
            );
            info!("Output: {}", output.display());

            let mut config = GenerateConfig::new(&job_url)
                .with_websites(websites)
                .with_social_profiles(social)
                .with_output_path(output);
            if let Some(path) = resume {
                config = config.with_resume(path);
            }

            let writer = ResumeWriter::new(config)?;
            let report = writer.generate().await?;

            info!(
                "Scraped {} website(s) and {} social profile(s)",
                report.websites_scraped, report.social_scraped
            );
            println!("Resume generated successfully");
            println!("Output saved to: {}", report.output_path.display());

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_requires_job_url() {
        let result = Cli::try_parse_from(["resume-writer", "generate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_parses_all_options() {
        let cli = Cli::try_parse_from([
            "resume-writer",
            "generate",
            "--job-url",
            "https://jobs.example/1",
            "--resume",
            "me.txt",
            "--websites",
            "https://me.example",
            "https://blog.example",
            "--social",
            "https://github.example/me",
            "--output",
            "out/targeted.txt",
        ])
        .unwrap();

        let Command::Generate {
            job_url,
            resume,
            websites,
            social,
            output,
        } = cli.command;
        assert_eq!(job_url, "https://jobs.example/1");
        assert_eq!(resume, Some(PathBuf::from("me.txt")));
        assert_eq!(websites.len(), 2);
        assert_eq!(social.len(), 1);
        assert_eq!(output, PathBuf::from("out/targeted.txt"));
    }

    #[test]
    fn test_output_defaults() {
        let cli = Cli::try_parse_from([
            "resume-writer",
            "generate",
            "-j",
            "https://jobs.example/1",
        ])
        .unwrap();

        let Command::Generate { output, .. } = cli.command;
        assert_eq!(output, PathBuf::from("./output/resume.txt"));
    }
}
