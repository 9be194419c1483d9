// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search fallback chain
//!
//! Tries providers in table order and returns the first non-empty result
//! set. Provider failures are logged and absorbed here; callers only ever
//! see fewer (or zero) results.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::provider::{default_providers, SearchProvider};
use super::types::{SearchError, SearchResponse, SearchResult};
use crate::http::{owned_headers, HttpFetcher};

/// Ordered list of providers sharing one HTTP fetcher
pub struct SearchFallbackChain {
    fetcher: Arc<dyn HttpFetcher>,
    providers: Vec<SearchProvider>,
    config: SearchConfig,
}

impl SearchFallbackChain {
    /// Create a chain over the default provider table
    pub fn new(fetcher: Arc<dyn HttpFetcher>, config: SearchConfig) -> Self {
        let providers = default_providers(&config.preferred_provider);
        Self::with_providers(fetcher, providers, config)
    }

    /// Create a chain over an explicit provider table
    pub fn with_providers(
        fetcher: Arc<dyn HttpFetcher>,
        providers: Vec<SearchProvider>,
        config: SearchConfig,
    ) -> Self {
        debug!(
            "Search chain: {}",
            providers
                .iter()
                .map(|p| p.name)
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        Self {
            fetcher,
            providers,
            config,
        }
    }

    /// Search for `query`, returning at most `max_results` results
    ///
    /// Never fails: an empty vector means every provider failed or came
    /// back empty.
    pub async fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        self.search_with_provider(query, max_results).await.results
    }

    /// Like [`search`](Self::search), also reporting which provider answered
    pub async fn search_with_provider(&self, query: &str, max_results: usize) -> SearchResponse {
        let full_query = format!("{}{}", query.trim(), self.config.query_suffix);
        let start = Instant::now();

        if max_results > 0 {
            info!("Searching for: \"{}\"", full_query);

            for provider in &self.providers {
                match self.try_provider(provider, &full_query, max_results).await {
                    Ok(results) => {
                        let elapsed_ms = start.elapsed().as_millis() as u64;
                        info!(
                            "Search complete: {} results from {} in {}ms",
                            results.len(),
                            provider.name,
                            elapsed_ms
                        );
                        return SearchResponse {
                            query: full_query,
                            result_count: results.len(),
                            results,
                            provider: Some(provider.name.to_string()),
                            search_time_ms: elapsed_ms,
                        };
                    }
                    Err(e) => {
                        warn!("Search provider {} failed: {}, trying next", provider.name, e);
                    }
                }
            }

            warn!("All search providers failed for \"{}\"", full_query);
        }

        SearchResponse {
            query: full_query,
            results: Vec::new(),
            provider: None,
            search_time_ms: start.elapsed().as_millis() as u64,
            result_count: 0,
        }
    }

    async fn try_provider(
        &self,
        provider: &SearchProvider,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = provider.request_url(query);
        debug!("Trying search provider {}: {}", provider.name, url);

        let html = self
            .fetcher
            .get(&url, &owned_headers(provider.headers), self.config.timeout())
            .await?;

        let results = provider.parse_results(&html, max_results)?;
        if results.is_empty() {
            return Err(SearchError::NoResults {
                provider: provider.name.to_string(),
            });
        }

        Ok(results)
    }

    /// Provider names in the order they are tried
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name).collect()
    }

    /// Number of results requested per article by configuration
    pub fn results_to_fetch(&self) -> usize {
        self.config.results_to_fetch
    }
}
