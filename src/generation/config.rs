// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the text generation provider

use std::env;
use std::time::Duration;

/// Generation provider settings
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Provider name, used for the provenance label (e.g. "groq")
    pub provider: String,
    /// Base URL of the OpenAI-compatible API
    pub api_url: String,
    /// Bearer token, if the provider needs one
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env::var("LLM_PROVIDER")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.provider),
            api_url: env::var("LLM_API_URL").unwrap_or(defaults.api_url),
            api_key: env::var("GROQ_API_KEY")
                .or_else(|_| env::var("LLM_API_KEY"))
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: env::var("LLM_MODEL").unwrap_or(defaults.model),
            max_tokens: env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_tokens),
            temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.temperature),
            timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(format!("LLM API URL must be http(s): {}", self.api_url));
        }
        if self.provider == "groq" && self.api_key.is_none() {
            return Err("GROQ_API_KEY is required for the groq provider".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("LLM model name cannot be empty".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be at least 1".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Name shown in the enrichment marker line, e.g. "Groq AI"
    pub fn provider_label(&self) -> String {
        let mut chars = self.provider.chars();
        match chars.next() {
            Some(first) => format!("{}{} AI", first.to_uppercase(), chars.as_str()),
            None => "AI".to_string(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            api_url: "https://api.groq.com/openai/v1".to_string(),
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
            max_tokens: 4000,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}
