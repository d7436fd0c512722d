// src/relevance/keywords.rs
//! Fetches a job posting and distills it into a keyword set.
//!
//! Every failure here is soft: the caller gets an empty set and the request
//! proceeds without reordering.

use super::tokenizer::tokens;
use super::KeywordSet;
use anyhow::{Context, Result};
use reqwest::Client;
use scraper::Html;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

pub struct KeywordExtractor {
    client: Client,
    limit: usize,
}

impl KeywordExtractor {
    pub fn new(limit: usize, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, limit })
    }

    /// Fetch the posting and return its top keywords. An empty URL or any
    /// fetch failure yields an empty set.
    pub async fn fetch_keywords(&self, url: &str) -> KeywordSet {
        if url.is_empty() {
            return KeywordSet::new();
        }

        match self.try_fetch(url).await {
            Ok(keywords) => {
                info!(
                    "Extracted {} keywords from job posting: {}",
                    keywords.len(),
                    url
                );
                keywords
            }
            Err(e) => {
                warn!("Job posting fetch failed, skipping reordering: {:#}", e);
                KeywordSet::new()
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<KeywordSet> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch job posting")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(extract_keywords(&html, self.limit))
    }
}

/// Distill raw HTML into the `limit` most frequent tokens.
pub fn extract_keywords(html: &str, limit: usize) -> KeywordSet {
    let document = Html::parse_document(html);
    rank_keywords(&visible_text(&document), limit)
}

/// Concatenated text content of the page, skipping script/style/noscript
/// subtrees.
fn visible_text(document: &Html) -> String {
    let mut out = String::new();
    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "script" | "style" | "noscript"))
        });
        if !hidden {
            out.push_str(text);
            out.push(' ');
        }
    }
    out
}

/// Top `limit` distinct tokens by frequency. Ties break by first-seen
/// position so the result is deterministic for a given page.
fn rank_keywords(text: &str, limit: usize) -> KeywordSet {
    let mut frequency: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in tokens(text).enumerate() {
        let entry = frequency.entry(token).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then_with(|| a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word)
        .collect()
}
