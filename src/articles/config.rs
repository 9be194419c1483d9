// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the article API client

use std::env;
use std::time::Duration;

/// Where the article API lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL, e.g. `http://localhost:3000/api`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("API_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("API base URL must be http(s): {}", self.base_url));
        }
        if self.timeout_secs == 0 {
            return Err("API timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_secs: 30,
        }
    }
}
