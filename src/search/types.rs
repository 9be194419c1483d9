// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for competitor search

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::FetchError;

/// A single normalized search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Title of the search result
    pub title: String,
    /// Absolute http(s) URL of the result
    pub url: String,
    /// Snippet/description shown by the provider
    pub snippet: String,
    /// Provider that produced the result (e.g., "duckduckgo", "manual")
    pub source: String,
}

impl SearchResult {
    pub fn new(title: &str, url: &str, snippet: &str, source: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
            source: source.to_string(),
        }
    }
}

/// Outcome of running the fallback chain for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The query sent to providers (suffix included)
    pub query: String,
    /// Results from the first provider that returned any
    pub results: Vec<SearchResult>,
    /// Provider that returned the results, if any did
    pub provider: Option<String>,
    /// Time spent across all attempted providers
    pub search_time_ms: u64,
    /// Number of results returned
    pub result_count: usize,
}

/// Errors from a single provider attempt
///
/// These never leave the chain; they decide whether to advance to the
/// next provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Request failed (transport, status, timeout)
    #[error("Search request failed: {0}")]
    Fetch(#[from] FetchError),

    /// A selector in the provider table does not parse
    #[error("Invalid selector for {provider}: {selector}")]
    InvalidSelector {
        provider: String,
        selector: String,
    },

    /// Markup parsed but no usable result was found
    #[error("No results from {provider}")]
    NoResults { provider: String },
}
