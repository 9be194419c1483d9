// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text generation client for OpenAI-compatible chat completion APIs

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

use super::config::GenerationConfig;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerationError {
    #[error("Generation provider rejected credentials ({0})")]
    Unauthorized(u16),
    #[error("Generation provider rate limit exceeded")]
    RateLimited,
    #[error("Generation provider returned {status}: {message}")]
    HttpStatus { status: u16, message: String },
    #[error("Generation request timed out after {0}s")]
    Timeout(u64),
    #[error("Generation transport error: {0}")]
    Transport(String),
    #[error("Invalid generation response: {0}")]
    InvalidResponse(String),
}

/// One prompt for the generation provider
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

/// Accepts a prompt, returns text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`TextGenerator`] over `POST {api_url}/chat/completions`
pub struct ChatCompletionsClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model_name: String,
    timeout_secs: u64,
}

impl ChatCompletionsClient {
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let endpoint = config.api_url.trim_end_matches('/').to_string();
        info!(
            "Generation client configured: endpoint={}, model={}",
            endpoint, config.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            model_name: config.model.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    fn map_send_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout(self.timeout_secs)
        } else {
            GenerationError::Transport(e.to_string())
        }
    }
}

fn status_error(status: StatusCode, body: String) -> GenerationError {
    match status.as_u16() {
        code @ (401 | 403) => GenerationError::Unauthorized(code),
        429 => GenerationError::RateLimited,
        code => GenerationError::HttpStatus {
            status: code,
            message: body,
        },
    }
}

fn first_choice_text(response: ChatResponse) -> Result<String, GenerationError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.unwrap_or_default())
        .ok_or_else(|| GenerationError::InvalidResponse("response has no choices".to_string()))
}

#[async_trait]
impl TextGenerator for ChatCompletionsClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let start = Instant::now();
        info!("Using model: {}", self.model_name);

        let body = ChatRequest {
            model: &self.model_name,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
        };

        let mut builder = self.client.post(self.completions_url()).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
        let tokens_used = chat_response
            .usage
            .as_ref()
            .map(|u| u.total_tokens)
            .unwrap_or(0);
        let text = first_choice_text(chat_response)?;

        debug!(
            "Generated {} chars in {}ms ({} tokens)",
            text.chars().count(),
            start.elapsed().as_millis(),
            tokens_used
        );
        Ok(text)
    }
}
