// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod articles;
pub mod citation;
pub mod cli;
pub mod config;
pub mod content;
pub mod generation;
pub mod http;
pub mod pipeline;
pub mod search;
pub mod utils;
pub mod version;

// Re-export main types
pub use articles::{Article, ArticleStore, HttpArticleStore, InMemoryArticleStore, StoreError};
pub use citation::{compose_citations, valid_references};
pub use config::AppConfig;
pub use content::{ContentExtractor, ExtractedDocument, ExtractorConfig};
pub use generation::{ArticleRewriter, ChatCompletionsClient, GenerationError, TextGenerator};
pub use http::{FetchError, HttpFetcher, ReqwestFetcher};
pub use pipeline::{PipelineConfig, PipelineOrchestrator, PipelineRun, Stage};
pub use search::{SearchConfig, SearchFallbackChain, SearchResult};
