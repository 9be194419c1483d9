// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article store collaborator
//!
//! The pipeline reads a snapshot of each article, rewrites `content`,
//! `excerpt` and `tags`, and writes it back by id. Persistence itself lives
//! behind the REST API; [`HttpArticleStore`] talks to it and
//! [`InMemoryArticleStore`] stands in for it in tests and offline runs.

pub mod config;
pub mod http_store;
pub mod memory;
pub mod model;
pub mod store;

pub use config::StoreConfig;
pub use http_store::HttpArticleStore;
pub use memory::InMemoryArticleStore;
pub use model::{tags_from_value, Article, ArticleId, ArticleUpdate};
pub use store::{ArticleStore, StoreError};
