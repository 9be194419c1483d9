// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for competitor search

use std::env;
use std::time::Duration;

/// Configuration for the search fallback chain
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Provider moved to the front of the table (duckduckgo, bing, google)
    pub preferred_provider: String,
    /// Number of competitor results to collect per article
    pub results_to_fetch: usize,
    /// Per-provider request timeout in seconds
    pub timeout_secs: u64,
    /// Appended to every query to bias providers toward articles
    pub query_suffix: String,
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            preferred_provider: env::var("SEARCH_ENGINE")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.preferred_provider),
            results_to_fetch: env::var("SEARCH_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.results_to_fetch),
            timeout_secs: env::var("SEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            query_suffix: env::var("SEARCH_QUERY_SUFFIX").unwrap_or(defaults.query_suffix),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.results_to_fetch == 0 {
            return Err("results_to_fetch must be at least 1".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("search timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            preferred_provider: "duckduckgo".to_string(),
            results_to_fetch: 2,
            timeout_secs: 15,
            query_suffix: " blog article".to_string(),
        }
    }
}
