// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Run-level settings for the orchestrator

use std::env;
use std::time::Duration;

/// Tags added to every enriched article
pub const ENRICHMENT_TAGS: &[&str] = &["optimized", "ai-enhanced"];

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of backlog articles processed per run
    pub batch_size: usize,
    /// Pause between consecutive articles in milliseconds
    pub article_delay_ms: u64,
    /// Skip search and extraction, rewrite from the original only
    pub test_mode: bool,
    /// Use preset competitor URLs when every search provider fails
    pub manual_fallback: bool,
    /// Hard cap on published content length in characters
    pub max_content_chars: usize,
    /// Excerpt budget in characters, before the ellipsis
    pub excerpt_chars: usize,
    pub enrichment_tags: Vec<String>,
    /// Provider name in the marker line, e.g. "Groq AI"
    pub provenance_label: String,
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
}

impl PipelineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            batch_size: env::var("BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.batch_size),
            article_delay_ms: env::var("ARTICLE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.article_delay_ms),
            test_mode: env_flag("TEST_MODE").unwrap_or(defaults.test_mode),
            manual_fallback: env_flag("USE_MANUAL_FALLBACK").unwrap_or(defaults.manual_fallback),
            ..defaults
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".to_string());
        }
        if self.max_content_chars == 0 {
            return Err("max_content_chars must be greater than 0".to_string());
        }
        if self.excerpt_chars == 0 {
            return Err("excerpt_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn article_delay(&self) -> Duration {
        Duration::from_millis(self.article_delay_ms)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: 2,
            article_delay_ms: 3000,
            test_mode: false,
            manual_fallback: false,
            max_content_chars: 10_000,
            excerpt_chars: 497,
            enrichment_tags: ENRICHMENT_TAGS.iter().map(|t| t.to_string()).collect(),
            provenance_label: "Groq AI".to_string(),
        }
    }
}
