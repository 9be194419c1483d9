// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! REST client for the article API
//!
//! Every response is wrapped as `{ success, data, count?, message? }`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::config::StoreConfig;
use super::model::{Article, ArticleId, ArticleUpdate};
use super::store::{ArticleStore, StoreError};

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    #[serde(default)]
    count: Option<usize>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn into_data(self, context: &str) -> Result<T, StoreError> {
        if !self.success {
            let reason = self
                .message
                .or(self.error)
                .unwrap_or_else(|| format!("{} failed", context));
            return Err(StoreError::Rejected(reason));
        }

        self.data
            .ok_or_else(|| StoreError::SerializationError(format!("{}: response has no data", context)))
    }
}

/// [`ArticleStore`] over the article REST API
pub struct HttpArticleStore {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpArticleStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn article_url(&self, id: ArticleId) -> String {
        format!("{}/articles/{}", self.base_url, id)
    }

    fn map_send_error(&self, e: reqwest::Error) -> StoreError {
        if e.is_timeout() {
            StoreError::Timeout(self.timeout_secs)
        } else {
            StoreError::NetworkError(e.to_string())
        }
    }

    async fn read_envelope<T: DeserializeOwned>(
        &self,
        response: Response,
        context: &str,
    ) -> Result<ApiEnvelope<T>, StoreError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(context.to_string()));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| StoreError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl ArticleStore for HttpArticleStore {
    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        debug!("Fetching all articles from {}", self.base_url);
        let response = self
            .client
            .get(format!("{}/articles", self.base_url))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let envelope: ApiEnvelope<Vec<Article>> =
            self.read_envelope(response, "list articles").await?;
        let count = envelope.count;
        let articles = envelope.into_data("list articles")?;
        info!("Fetched {} articles", count.unwrap_or(articles.len()));
        Ok(articles)
    }

    async fn get(&self, id: ArticleId) -> Result<Article, StoreError> {
        let context = format!("article {}", id);
        let response = self
            .client
            .get(self.article_url(id))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let article = self
            .read_envelope::<Article>(response, &context)
            .await?
            .into_data(&context)?;
        info!("Fetched article: {}", article.title);
        Ok(article)
    }

    async fn update(&self, id: ArticleId, article: &Article) -> Result<Article, StoreError> {
        let context = format!("article {}", id);
        info!("Updating article {}...", id);
        let response = self
            .client
            .put(self.article_url(id))
            .json(&ArticleUpdate::from(article))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let updated = self
            .read_envelope::<Article>(response, &context)
            .await?
            .into_data(&context)?;
        info!("Article {} updated successfully", id);
        Ok(updated)
    }
}
