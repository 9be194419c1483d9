// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Paced competitor page extraction
//!
//! Fetches each URL serially with a fixed pause between requests and runs
//! the extraction heuristics on the response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::config::ExtractorConfig;
use super::extractor::extract_article;
use crate::http::{browser_headers, FetchError, HttpFetcher};

/// Article text recovered from a competitor page
///
/// `content` always holds at least the configured minimum number of
/// characters; shorter pages are never turned into documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    pub url: String,
    pub title: String,
    pub content: String,
    pub fetched_at: DateTime<Utc>,
}

/// Fetches pages and extracts their article bodies
pub struct ContentExtractor {
    fetcher: Arc<dyn HttpFetcher>,
    headers: Vec<(String, String)>,
    config: ExtractorConfig,
}

impl ContentExtractor {
    /// Create a new content extractor
    pub fn new(fetcher: Arc<dyn HttpFetcher>, config: ExtractorConfig) -> Self {
        let headers = browser_headers(&config.user_agent);
        Self {
            fetcher,
            headers,
            config,
        }
    }

    /// Extract the article at `url`
    ///
    /// `Ok(None)` means the page was fetched but too little text was
    /// recovered. Fetch failures are returned as [`FetchError`].
    pub async fn extract(&self, url: &str) -> Result<Option<ExtractedDocument>, FetchError> {
        debug!("Scraping content from: {}", url);

        let html = self
            .fetcher
            .get(url, &self.headers, self.config.timeout())
            .await?;

        match extract_article(&html, &self.config) {
            Some(extraction) => {
                info!("Scraped {} characters from {}", extraction.content.chars().count(), url);
                Ok(Some(ExtractedDocument {
                    url: url.to_string(),
                    title: extraction.title,
                    content: extraction.content,
                    fetched_at: Utc::now(),
                }))
            }
            None => {
                warn!("Insufficient content from {}", url);
                Ok(None)
            }
        }
    }

    /// Extract every URL in order, skipping failures and rejections
    ///
    /// Requests are strictly sequential with the configured delay between
    /// consecutive fetches. Never fails.
    pub async fn extract_many(&self, urls: &[String]) -> Vec<ExtractedDocument> {
        info!("Scraping {} articles...", urls.len());
        let delay = self.config.request_delay();
        let mut documents = Vec::new();

        for (i, url) in urls.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match self.extract(url).await {
                Ok(Some(document)) => documents.push(document),
                Ok(None) => {}
                Err(e) => warn!("Error scraping {}: {}", url, e),
            }
        }

        info!(
            "Successfully scraped {} of {} competitor articles",
            documents.len(),
            urls.len()
        );
        documents
    }
}
