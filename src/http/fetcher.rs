// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP GET with timeouts, bounded redirects and a failure taxonomy

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Redirects followed before a fetch is abandoned
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Failure of a single outbound fetch
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The site refused access (401/403), usually anti-scraping defenses
    #[error("Access forbidden ({status}) - {url} is blocking scrapers")]
    Blocked { status: u16, url: String },

    /// No response within the request timeout
    #[error("Request timeout - {url} took longer than {timeout_ms}ms to respond")]
    Timeout { url: String, timeout_ms: u64 },

    /// Any other non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    /// Connection, TLS, redirect or body errors, passed through
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// Whether the failure came from the site denying access
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// Whether the failure was a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Capability to GET a URL and return its body as text
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Fetch `url` with the given headers, failing after `timeout`
    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Duration,
    ) -> Result<String, FetchError>;
}

/// [`HttpFetcher`] backed by a shared reqwest client
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Create a fetcher that follows at most `max_redirects` redirects
    pub fn new(max_redirects: usize) -> Result<Self, FetchError> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(max_redirects))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Duration,
    ) -> Result<String, FetchError> {
        let mut request = self.client.get(url).timeout(timeout);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!("GET {}", url);

        let response = request
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, url, timeout))?;

        check_status(response.status(), url)?;

        response
            .text()
            .await
            .map_err(|e| map_reqwest_error(e, url, timeout))
    }
}

/// Map a non-success status onto the failure taxonomy
pub fn check_status(status: StatusCode, url: &str) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }

    if status == StatusCode::FORBIDDEN || status == StatusCode::UNAUTHORIZED {
        return Err(FetchError::Blocked {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Err(FetchError::HttpStatus {
        status: status.as_u16(),
        url: url.to_string(),
    })
}

fn map_reqwest_error(e: reqwest::Error, url: &str, timeout: Duration) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        FetchError::Transport(e.to_string())
    }
}
