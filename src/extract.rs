// src/extract.rs
//! Keyword-based extraction of skills and requirement lines from job posting text.

use serde::{Deserialize, Serialize};

/// Technology and process terms matched against job posting text.
/// Matching is plain substring containment on the lower-cased text, and the
/// output order follows this list, not the order of occurrence on the page.
pub const SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node.js",
    "nodejs",
    "angular",
    "vue",
    "typescript",
    "c++",
    "c#",
    "ruby",
    "php",
    "go",
    "rust",
    "swift",
    "kotlin",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "git",
    "ci/cd",
    "agile",
    "scrum",
    "rest api",
    "graphql",
    "microservices",
    "machine learning",
    "ai",
    "data science",
    "frontend",
    "backend",
    "full-stack",
    "devops",
    "cloud",
    "linux",
    "testing",
    "tdd",
    "security",
];

/// Phrases that flag a line as describing a job requirement.
const REQUIREMENT_TRIGGERS: &[&str] = &["required", "must have", "experience", "knowledge"];

/// Maximum number of requirement lines kept per posting.
const MAX_REQUIREMENTS: usize = 10;

/// A requirement line longer than this is assumed to be prose, not a bullet.
const MAX_REQUIREMENT_LEN: usize = 200;

/// Number of characters of page text kept as the posting description.
const DESCRIPTION_LEN: usize = 1000;

/// Job posting data extracted from a scraped page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub url: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub description: String,
}

impl JobPosting {
    /// Placeholder used when the job page could not be fetched.
    pub fn placeholder(url: &str) -> Self {
        Self {
            title: "Unknown Position".to_string(),
            url: url.to_string(),
            requirements: Vec::new(),
            skills: Vec::new(),
            description: String::new(),
        }
    }
}

/// Extract skills and requirement lines from raw page text.
pub fn extract_job_requirements(title: &str, url: &str, text: &str) -> JobPosting {
    let lower = text.to_lowercase();

    let skills: Vec<String> = SKILL_KEYWORDS
        .iter()
        .filter(|skill| lower.contains(*skill))
        .map(|skill| skill.to_string())
        .collect();

    let requirements: Vec<String> = text
        .lines()
        .filter(|line| {
            let lowered = line.to_lowercase();
            line.chars().count() < MAX_REQUIREMENT_LEN
                && REQUIREMENT_TRIGGERS
                    .iter()
                    .any(|trigger| lowered.contains(trigger))
        })
        .take(MAX_REQUIREMENTS)
        .map(|line| line.trim().to_string())
        .collect();

    JobPosting {
        title: title.to_string(),
        url: url.to_string(),
        requirements,
        skills,
        description: truncate_chars(text, DESCRIPTION_LEN),
    }
}

/// Truncate to at most `limit` characters without splitting a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
