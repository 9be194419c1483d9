// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use async_trait::async_trait;
use thiserror::Error;

use super::model::{Article, ArticleId};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Article API timed out after {0}s")]
    Timeout(u64),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Article API returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("Article API rejected request: {0}")]
    Rejected(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read/write access to stored articles
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// All articles, in backlog order
    async fn list(&self) -> Result<Vec<Article>, StoreError>;

    /// One article by id
    async fn get(&self, id: ArticleId) -> Result<Article, StoreError>;

    /// Replace the stored article `id`, returning the stored result
    async fn update(&self, id: ArticleId, article: &Article) -> Result<Article, StoreError>;
}
