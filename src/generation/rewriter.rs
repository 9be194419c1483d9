// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::sync::Arc;
use tracing::{error, info};

use super::client::{GenerationError, GenerationRequest, TextGenerator};
use super::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::articles::Article;
use crate::content::ExtractedDocument;

/// Rewrites an article with optional competitor context
pub struct ArticleRewriter {
    generator: Arc<dyn TextGenerator>,
    max_output_tokens: u32,
    temperature: f32,
}

impl ArticleRewriter {
    pub fn new(generator: Arc<dyn TextGenerator>, max_output_tokens: u32, temperature: f32) -> Self {
        Self {
            generator,
            max_output_tokens,
            temperature,
        }
    }

    /// Request for one article, as sent to the provider
    pub fn request_for(&self, article: &Article, competitors: &[ExtractedDocument]) -> GenerationRequest {
        GenerationRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: build_user_prompt(article, competitors),
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        }
    }

    /// Generated text, possibly empty
    pub async fn rewrite(
        &self,
        article: &Article,
        competitors: &[ExtractedDocument],
    ) -> Result<String, GenerationError> {
        info!(
            "Rewriting \"{}\" with {} competitor documents",
            article.title,
            competitors.len()
        );

        let request = self.request_for(article, competitors);
        self.generator.generate(&request).await.map_err(|e| {
            error!("Generation failed for article {}: {}", article.id, e);
            e
        })
    }
}
