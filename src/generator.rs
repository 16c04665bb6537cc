// src/generator.rs
//! One-shot generation pipeline: gather inputs, extract, assemble, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use url::Url;

use crate::assemble::{assemble, ApplicantData};
use crate::extract::{extract_job_requirements, JobPosting};
use crate::fetch::PageFetcher;
use crate::resume::ResumeDocument;
use crate::utils::write_file_safe;

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub job_url: String,
    pub resume_path: Option<PathBuf>,
    pub websites: Vec<String>,
    pub social_profiles: Vec<String>,
    pub output_path: PathBuf,
}

impl GenerateConfig {
    pub fn new(job_url: &str) -> Self {
        Self {
            job_url: job_url.to_string(),
            resume_path: None,
            websites: Vec::new(),
            social_profiles: Vec::new(),
            output_path: PathBuf::from("output/resume.txt"),
        }
    }

    pub fn with_resume(mut self, path: PathBuf) -> Self {
        self.resume_path = Some(path);
        self
    }

    pub fn with_websites(mut self, urls: Vec<String>) -> Self {
        self.websites = urls;
        self
    }

    pub fn with_social_profiles(mut self, urls: Vec<String>) -> Self {
        self.social_profiles = urls;
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }
}

/// Summary of what a run produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub job: JobPosting,
    pub websites_scraped: usize,
    pub social_scraped: usize,
}

#[derive(Debug)]
pub struct ResumeWriter {
    config: GenerateConfig,
    fetcher: PageFetcher,
}

impl ResumeWriter {
    /// Validates the configuration. Input problems are reported here, before
    /// any network activity.
    pub fn new(config: GenerateConfig) -> Result<Self> {
        Url::parse(&config.job_url)
            .with_context(|| format!("Invalid job URL: {}", config.job_url))?;

        if let Some(path) = &config.resume_path {
            if !path.exists() {
                anyhow::bail!("Resume file not found: {}", path.display());
            }
        }

        let fetcher = PageFetcher::new()?;

        Ok(Self { config, fetcher })
    }

    /// Run the full pipeline and write the assembled resume to the output path.
    pub async fn generate(&self) -> Result<GenerateReport> {
        let resume = match &self.config.resume_path {
            Some(path) => Some(ResumeDocument::load(path).await?),
            None => None,
        };

        let job = self.scrape_job_posting().await;

        info!("Scraping {} website(s)", self.config.websites.len());
        let websites = self.fetcher.scrape_pages(&self.config.websites).await;

        info!(
            "Scraping {} social profile(s)",
            self.config.social_profiles.len()
        );
        let social = self.fetcher.scrape_pages(&self.config.social_profiles).await;

        let applicant = ApplicantData {
            resume,
            websites,
            social,
        };

        info!("Creating targeted resume");
        let document = assemble(&job, &applicant);

        write_file_safe(&self.config.output_path, &document).await?;

        Ok(GenerateReport {
            output_path: self.config.output_path.clone(),
            job,
            websites_scraped: applicant.websites.iter().filter(|p| p.is_ok()).count(),
            social_scraped: applicant.social.iter().filter(|p| p.is_ok()).count(),
        })
    }

    /// Fetch the job page and run extraction. A fetch failure falls back to a
    /// placeholder posting so the run still produces a document.
    async fn scrape_job_posting(&self) -> JobPosting {
        info!("Scraping job posting from: {}", self.config.job_url);

        match self.fetcher.fetch_page(&self.config.job_url).await {
            Ok(page) => {
                let posting = extract_job_requirements(&page.title, &page.url, &page.text);
                info!(
                    "Job title: {}, {} requirement line(s), {} skill(s)",
                    if posting.title.is_empty() {
                        "not found"
                    } else {
                        posting.title.as_str()
                    },
                    posting.requirements.len(),
                    posting.skills.len()
                );
                posting
            }
            Err(e) => {
                warn!("Error scraping job posting: {}", e);
                JobPosting::placeholder(&self.config.job_url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_job_url_rejected() {
        let config = GenerateConfig::new("not a url");
        let err = ResumeWriter::new(config).unwrap_err();
        assert!(err.to_string().contains("Invalid job URL"));
    }

    #[test]
    fn test_missing_resume_rejected() {
        let config = GenerateConfig::new("https://jobs.example/1")
            .with_resume(PathBuf::from("/nonexistent/resume.txt"));
        let err = ResumeWriter::new(config).unwrap_err();
        assert!(err.to_string().contains("Resume file not found"));
    }

    #[test]
    fn test_config_defaults() {
        let config = GenerateConfig::new("https://jobs.example/1");
        assert_eq!(config.output_path, PathBuf::from("output/resume.txt"));
        assert!(config.resume_path.is_none());
        assert!(config.websites.is_empty());
        assert!(config.social_profiles.is_empty());
    }
}
