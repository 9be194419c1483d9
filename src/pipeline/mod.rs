// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article enrichment pipeline
//!
//! Drives each article of a batch through search, extraction, generation,
//! citation and publication, one article at a time.
//!
//! ## Stages
//!
//! ```text
//! Fetched → Searched → Extracted → Generated → Cited → Published
//!              └──────(no results)──────┘
//! ```
//!
//! Any stage may end in `Failed { stage, reason }`, which stops only the
//! current article.

pub mod config;
pub mod log;
pub mod orchestrator;
pub mod run;
pub mod text;

pub use config::PipelineConfig;
pub use log::{LogLevel, LogLine, MemoryLogger, RunLogger, TracingLogger};
pub use orchestrator::{PipelineError, PipelineOrchestrator};
pub use run::{ArticleOutcome, ArticleReport, PipelineRun, Stage};
pub use text::{derive_excerpt, merge_tags};
