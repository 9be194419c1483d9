// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for content extraction
//!
//! Defines settings for page fetching, quality thresholds and pacing.

use std::env;
use std::time::Duration;

use crate::http::DEFAULT_USER_AGENT;

/// Configuration for content extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Timeout per page fetch in seconds (default: 30)
    pub timeout_secs: u64,
    /// Pause between consecutive page fetches in milliseconds (default: 2000)
    pub request_delay_ms: u64,
    /// Redirects followed per fetch (default: 5)
    pub max_redirects: usize,
    /// Pages with less recovered text are rejected (default: 300)
    pub min_content_chars: usize,
    /// A container selector must recover more than this to win (default: 500)
    pub selector_accept_chars: usize,
    /// Hard cap on stored content (default: 5000)
    pub max_content_chars: usize,
    /// User agent presented to competitor sites
    pub user_agent: String,
}

impl ExtractorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: env::var("SCRAPER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            request_delay_ms: env::var("SCRAPER_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_delay_ms),
            max_redirects: env::var("SCRAPER_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_redirects),
            user_agent: env::var("SCRAPER_USER_AGENT").unwrap_or(defaults.user_agent),
            ..defaults
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("scraper timeout must be at least 1 second".to_string());
        }
        if self.min_content_chars == 0 {
            return Err("min_content_chars must be at least 1".to_string());
        }
        if self.max_content_chars < self.min_content_chars {
            return Err("max_content_chars must not be below min_content_chars".to_string());
        }
        Ok(())
    }

    /// Page fetch timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Pause between page fetches
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            request_delay_ms: 2000,
            max_redirects: 5,
            min_content_chars: 300,
            selector_accept_chars: 500,
            max_content_chars: 5000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
