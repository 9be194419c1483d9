// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! In-process article store for tests and offline runs

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::model::{Article, ArticleId};
use super::store::{ArticleStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleStore {
    articles: Arc<RwLock<Vec<Article>>>,
    updates: Arc<RwLock<Vec<ArticleId>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryArticleStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(RwLock::new(articles)),
            ..Self::default()
        }
    }

    /// Make every call fail as if the API were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Current contents, in insertion order
    pub async fn snapshot(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }

    /// Ids passed to `update`, in call order
    pub async fn updated_ids(&self) -> Vec<ArticleId> {
        self.updates.read().await.clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::NetworkError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        self.check_available()?;
        Ok(self.snapshot().await)
    }

    async fn get(&self, id: ArticleId) -> Result<Article, StoreError> {
        self.check_available()?;
        self.articles
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("article {}", id)))
    }

    async fn update(&self, id: ArticleId, article: &Article) -> Result<Article, StoreError> {
        self.check_available()?;
        let mut articles = self.articles.write().await;
        let slot = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("article {}", id)))?;

        *slot = Article {
            id,
            ..article.clone()
        };
        self.updates.write().await.push(id);
        Ok(slot.clone())
    }
}
