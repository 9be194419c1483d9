// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Competitor discovery through web search
//!
//! Key features:
//! - Multiple HTML search providers (DuckDuckGo, Bing, Google)
//! - Providers described as data records and tried in priority order
//! - Redirect unwrapping and self-link filtering on result URLs
//! - Graceful degradation: provider failures are logged, never raised

pub mod bing;
pub mod chain;
pub mod config;
pub mod duckduckgo;
pub mod fallback;
pub mod google;
pub mod provider;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use chain::SearchFallbackChain;
pub use config::SearchConfig;
pub use fallback::manual_results;
pub use provider::{default_providers, SearchProvider};
pub use query::derive_search_query;
pub use types::{SearchError, SearchResponse, SearchResult};
