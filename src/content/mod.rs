// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Competitor content extraction
//!
//! Fetches competitor pages and recovers a readable article body from
//! markup of unknown structure.
//!
//! ## Architecture
//!
//! ```text
//! Search Results (URLs) → ContentExtractor → HTML → extract_article → ExtractedDocument
//!                                                      ↓
//!                                     quality gate (≥ 300 chars or rejected)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = Arc::new(ReqwestFetcher::new(5)?);
//! let extractor = ContentExtractor::new(fetcher, ExtractorConfig::from_env());
//!
//! // Serial, paced extraction; failures are skipped
//! let docs = extractor.extract_many(&urls).await;
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::ExtractorConfig;
pub use extractor::{extract_article, Extraction, NO_TITLE};
pub use fetcher::{ContentExtractor, ExtractedDocument};
