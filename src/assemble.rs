// src/assemble.rs
//! Assembly of the targeted resume document from its collected parts.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::extract::JobPosting;
use crate::fetch::ScrapedPage;
use crate::resume::ResumeDocument;

const BANNER_WIDTH: usize = 60;

/// Everything known about the applicant before assembly.
#[derive(Debug, Clone, Default)]
pub struct ApplicantData {
    pub resume: Option<ResumeDocument>,
    pub websites: Vec<ScrapedPage>,
    pub social: Vec<ScrapedPage>,
}

/// Assemble the output document, stamped with the current time.
pub fn assemble(job: &JobPosting, applicant: &ApplicantData) -> String {
    assemble_at(job, applicant, Utc::now())
}

/// Assemble with an explicit timestamp. Sections appear in a fixed order and
/// a section is omitted entirely when its input is empty or absent.
pub fn assemble_at(
    job: &JobPosting,
    applicant: &ApplicantData,
    timestamp: DateTime<Utc>,
) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push("=".repeat(BANNER_WIDTH));
    sections.push("TARGETED RESUME".to_string());
    sections.push("=".repeat(BANNER_WIDTH));
    sections.push(String::new());

    sections.push("TARGET POSITION".to_string());
    sections.push("-".repeat(BANNER_WIDTH));
    sections.push(format!("Position: {}", job.title));
    sections.push(format!("URL: {}", job.url));
    sections.push(String::new());

    if !job.skills.is_empty() {
        sections.push("RELEVANT SKILLS FOR THIS POSITION".to_string());
        sections.push("-".repeat(BANNER_WIDTH));
        for skill in &job.skills {
            sections.push(format!("• {}", skill));
        }
        sections.push(String::new());
    }

    if let Some(resume) = &applicant.resume {
        sections.push("PROFESSIONAL BACKGROUND".to_string());
        sections.push("-".repeat(BANNER_WIDTH));
        sections.push(resume.body_text());
        sections.push(String::new());
    }

    if !applicant.websites.is_empty() {
        sections.push("ONLINE PRESENCE".to_string());
        sections.push("-".repeat(BANNER_WIDTH));
        for site in &applicant.websites {
            if site.is_ok() {
                sections.push(format!("Website: {}", site.url));
                sections.push(format!("Title: {}", site.title.as_deref().unwrap_or_default()));
                sections.push(String::new());
            }
        }
    }

    if !applicant.social.is_empty() {
        sections.push("PROFESSIONAL PROFILES".to_string());
        sections.push("-".repeat(BANNER_WIDTH));
        for profile in &applicant.social {
            if profile.is_ok() {
                sections.push(format!("Profile: {}", profile.url));
                sections.push(String::new());
            }
        }
    }

    if !job.requirements.is_empty() {
        sections.push("JOB REQUIREMENTS TO ADDRESS".to_string());
        sections.push("-".repeat(BANNER_WIDTH));
        for (idx, requirement) in job.requirements.iter().enumerate() {
            sections.push(format!("{}. {}", idx + 1, requirement));
        }
        sections.push(String::new());
    }

    sections.push(String::new());
    sections.push("-".repeat(BANNER_WIDTH));
    sections.push(format!(
        "Generated on: {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    sections.push("This resume has been tailored for the specific job posting.".to_string());
    sections.push("Please review and customize further as needed.".to_string());

    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn job() -> JobPosting {
        JobPosting {
            title: "Senior Full Stack Developer".to_string(),
            url: "https://jobs.example/1".to_string(),
            requirements: vec!["Experience with React and Node.js".to_string()],
            skills: vec!["javascript".to_string(), "react".to_string()],
            description: "A role".to_string(),
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let applicant = ApplicantData {
            resume: Some(ResumeDocument::from_content("Ten years of backend work")),
            websites: vec![ScrapedPage::scraped(
                "https://me.example".into(),
                "My Portfolio".into(),
                "projects".into(),
            )],
            social: vec![ScrapedPage::scraped(
                "https://github.example/me".into(),
                "Me".into(),
                "repos".into(),
            )],
        };

        let doc = assemble_at(&job(), &applicant, stamp());
        let order = [
            "TARGETED RESUME",
            "TARGET POSITION",
            "RELEVANT SKILLS FOR THIS POSITION",
            "PROFESSIONAL BACKGROUND",
            "ONLINE PRESENCE",
            "PROFESSIONAL PROFILES",
            "JOB REQUIREMENTS TO ADDRESS",
            "Generated on:",
        ];
        let mut last = 0;
        for marker in order {
            let pos = doc[last..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing section: {marker}"));
            last += pos;
        }
    }

    #[test]
    fn test_empty_sections_omitted() {
        let mut posting = job();
        posting.skills.clear();
        posting.requirements.clear();
        let applicant = ApplicantData::default();

        let doc = assemble_at(&posting, &applicant, stamp());
        assert!(!doc.contains("RELEVANT SKILLS FOR THIS POSITION"));
        assert!(!doc.contains("PROFESSIONAL BACKGROUND"));
        assert!(!doc.contains("ONLINE PRESENCE"));
        assert!(!doc.contains("PROFESSIONAL PROFILES"));
        assert!(!doc.contains("JOB REQUIREMENTS TO ADDRESS"));
        assert!(doc.contains("TARGET POSITION"));
    }

    #[test]
    fn test_failed_scrapes_skipped_inside_section() {
        let applicant = ApplicantData {
            resume: None,
            websites: vec![
                ScrapedPage::scraped(
                    "https://ok.example".into(),
                    "OK".into(),
                    "text".into(),
                ),
                ScrapedPage::failed("https://down.example".into(), "timeout".into()),
            ],
            social: Vec::new(),
        };

        let doc = assemble_at(&job(), &applicant, stamp());
        assert!(doc.contains("Website: https://ok.example"));
        assert!(!doc.contains("down.example"));
    }

    #[test]
    fn test_deterministic_with_fixed_timestamp() {
        let applicant = ApplicantData::default();
        let first = assemble_at(&job(), &applicant, stamp());
        let second = assemble_at(&job(), &applicant, stamp());
        assert_eq!(first, second);
        assert!(first.contains("Generated on: 2024-05-01T12:00:00Z"));
    }

    #[test]
    fn test_requirements_numbered() {
        let mut posting = job();
        posting.requirements = vec!["First experience".into(), "Second experience".into()];
        let doc = assemble_at(&posting, &ApplicantData::default(), stamp());
        assert!(doc.contains("1. First experience"));
        assert!(doc.contains("2. Second experience"));
    }
}
