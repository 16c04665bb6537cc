// src/resume.rs
//! Loading of the user's existing resume, as structured JSON or plain text.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::fs;
use tracing::info;

/// The user's current resume content. Format is auto-detected: content that
/// parses as JSON is kept structured, anything else is treated as plain text.
#[derive(Debug, Clone)]
pub enum ResumeDocument {
    Structured(Value),
    Text(String),
}

impl ResumeDocument {
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read resume file: {}", path.display()))?;

        let document = Self::from_content(&content);
        match &document {
            Self::Structured(_) => info!("Loaded JSON resume from {}", path.display()),
            Self::Text(_) => info!("Loaded text resume from {}", path.display()),
        }

        Ok(document)
    }

    pub fn from_content(content: &str) -> Self {
        match serde_json::from_str::<Value>(content) {
            Ok(value) => Self::Structured(value),
            Err(_) => Self::Text(content.to_string()),
        }
    }

    /// Resume content as it appears in the assembled document.
    pub fn body_text(&self) -> String {
        match self {
            Self::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
        }
    }
}
