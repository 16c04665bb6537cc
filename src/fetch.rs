// src/fetch.rs
//! HTTP page fetching and HTML text extraction.

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{ElementRef, Html, Node, Selector};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::extract::truncate_chars;

/// Characters of page text kept per scraped website/social page.
const PAGE_TEXT_LEN: usize = 2000;

/// Elements whose text content is never visible on the rendered page.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that start a new line of visible text.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "dl", "dt", "dd", "table", "tr", "section", "article", "header",
    "footer", "main", "nav", "aside", "blockquote", "pre", "form", "h1", "h2", "h3", "h4", "h5",
    "h6",
];

/// Raw content of a fetched page before any extraction heuristics.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub title: String,
    pub url: String,
    pub text: String,
}

/// Result of scraping one website or social profile URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPage {
    pub url: String,
    pub title: Option<String>,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl ScrapedPage {
    pub fn scraped(url: String, title: String, text: String) -> Self {
        Self {
            url,
            title: Some(title),
            text: Some(text),
            error: None,
        }
    }

    pub fn failed(url: String, error: String) -> Self {
        Self {
            url,
            title: None,
            text: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch a URL and return its title and visible text.
    pub async fn fetch_page(&self, url: &str) -> Result<RawPage> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        // Keep the post-redirect URL, like a browser address bar would.
        let final_url = response.url().to_string();
        let html = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(parse_page(&html, &final_url))
    }

    /// Scrape a list of URLs one at a time, recording per-URL failures
    /// without aborting the run.
    pub async fn scrape_pages(&self, urls: &[String]) -> Vec<ScrapedPage> {
        let mut results = Vec::with_capacity(urls.len());

        for url in urls {
            match self.fetch_page(url).await {
                Ok(page) => {
                    info!("Scraped: {}", url);
                    results.push(ScrapedPage::scraped(
                        url.clone(),
                        page.title,
                        truncate_chars(&page.text, PAGE_TEXT_LEN),
                    ));
                }
                Err(e) => {
                    warn!("Error scraping {}: {}", url, e);
                    results.push(ScrapedPage::failed(url.clone(), e.to_string()));
                }
            }
        }

        results
    }
}

/// Parse an HTML document into its title and visible body text.
///
/// Pure over the HTML string so extraction is testable without a server.
pub fn parse_page(html: &str, url: &str) -> RawPage {
    let document = Html::parse_document(html);

    let title = find_text_by_selectors(&document, &["title", "h1"]).unwrap_or_default();

    let text = match Selector::parse("body") {
        Ok(selector) => document
            .select(&selector)
            .next()
            .map(visible_text)
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    RawPage {
        title,
        url: url.to_string(),
        text,
    }
}

fn find_text_by_selectors(document: &Html, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = clean_text(&element.text().collect::<Vec<_>>().join(" "));
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Approximate the rendered text of an element: one output line per block
/// element, inline content joined with spaces, hidden elements skipped.
pub fn visible_text(root: ElementRef) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();

    collect_lines(*root, &mut current, &mut lines);
    flush_line(&mut current, &mut lines);

    lines.join("\n")
}

fn collect_lines(node: ego_tree::NodeRef<'_, Node>, current: &mut String, lines: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                let fragment = clean_text(&text);
                if !fragment.is_empty() {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(&fragment);
                }
            }
            Node::Element(element) => {
                let name = element.name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    flush_line(current, lines);
                } else if BLOCK_ELEMENTS.contains(&name) {
                    flush_line(current, lines);
                    collect_lines(child, current, lines);
                    flush_line(current, lines);
                } else {
                    collect_lines(child, current, lines);
                }
            }
            _ => {}
        }
    }
}

fn flush_line(current: &mut String, lines: &mut Vec<String>) {
    if !current.is_empty() {
        lines.push(std::mem::take(current));
    }
}
