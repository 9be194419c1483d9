// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-article enrichment sequence and batch driver

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

use super::config::PipelineConfig;
use super::log::RunLogger;
use super::run::{ArticleOutcome, ArticleReport, PipelineRun, Stage};
use super::text::{derive_excerpt, merge_tags};
use crate::articles::{Article, ArticleId, ArticleStore, StoreError};
use crate::citation::{compose_citations, valid_references};
use crate::content::{ContentExtractor, ExtractedDocument};
use crate::generation::ArticleRewriter;
use crate::search::{derive_search_query, manual_results, SearchFallbackChain, SearchResult};
use crate::utils::truncate_chars;

/// Errors that abort the whole run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Article store unavailable: {0}")]
    Store(#[from] StoreError),
}

const RULE_WIDTH: usize = 60;

struct StageFailure {
    stage: Stage,
    reason: String,
}

impl StageFailure {
    fn new(stage: Stage, reason: impl Into<String>) -> Self {
        Self {
            stage,
            reason: reason.into(),
        }
    }
}

/// Drives articles through search, extraction, generation and publication
pub struct PipelineOrchestrator {
    store: Arc<dyn ArticleStore>,
    search: SearchFallbackChain,
    extractor: ContentExtractor,
    rewriter: ArticleRewriter,
    logger: Arc<dyn RunLogger>,
    config: PipelineConfig,
}

impl PipelineOrchestrator {
    pub fn new(
        store: Arc<dyn ArticleStore>,
        search: SearchFallbackChain,
        extractor: ContentExtractor,
        rewriter: ArticleRewriter,
        logger: Arc<dyn RunLogger>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            search,
            extractor,
            rewriter,
            logger,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process the first `batch_size` articles of the backlog
    ///
    /// Fails only when the backlog cannot be listed. Article failures are
    /// recorded in the returned run.
    pub async fn run(&self) -> Result<PipelineRun, PipelineError> {
        self.log_header();

        self.logger.step(1, "Fetching articles from API...");
        let articles = self.store.list().await.map_err(|e| {
            self.logger
                .error(&format!("Fatal error in article optimizer: {}", e));
            PipelineError::from(e)
        })?;

        let mut run = PipelineRun::start();
        if articles.is_empty() {
            self.logger.warn("No articles found in database");
            run.finish();
            return Ok(run);
        }

        let batch: Vec<&Article> = articles.iter().take(self.config.batch_size).collect();
        self.logger
            .info(&format!("Processing {} articles...", batch.len()));

        let delay = self.config.article_delay();
        for (i, article) in batch.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                self.logger.info("Waiting before processing next article...");
                tokio::time::sleep(delay).await;
            }
            run.record(self.process_article(article).await);
        }

        run.finish();
        self.log_summary(&run);
        Ok(run)
    }

    /// Process one article fetched by id
    pub async fn run_single(&self, id: ArticleId) -> Result<PipelineRun, PipelineError> {
        self.log_header();

        self.logger.step(1, &format!("Fetching article {} from API...", id));
        let article = self.store.get(id).await.map_err(|e| {
            self.logger
                .error(&format!("Could not fetch article {}: {}", id, e));
            PipelineError::from(e)
        })?;

        let mut run = PipelineRun::start();
        run.record(self.process_article(&article).await);
        run.finish();
        self.log_summary(&run);
        Ok(run)
    }

    /// Run one article through every stage
    ///
    /// Never fails; the outcome is in the report.
    pub async fn process_article(&self, article: &Article) -> ArticleReport {
        let mut report = ArticleReport::new(article.id, &article.title, article.content_chars());

        self.logger.info(&"=".repeat(RULE_WIDTH));
        self.logger.info(&format!("Processing: {}", article.title));
        self.logger.info(&"=".repeat(RULE_WIDTH));

        match self.enrich(article, &mut report).await {
            Ok(()) => {
                report.outcome = ArticleOutcome::Published;
                self.logger.info(&format!(
                    "Article \"{}\" optimized and published",
                    article.title
                ));
                self.log_statistics(&report);
            }
            Err(failure) => {
                self.logger.error(&format!(
                    "Error processing article {} (\"{}\") at stage {}: {}",
                    article.id, article.title, failure.stage, failure.reason
                ));
                report.outcome = ArticleOutcome::Failed {
                    stage: failure.stage,
                    reason: failure.reason,
                };
            }
        }

        report
    }

    async fn enrich(&self, article: &Article, report: &mut ArticleReport) -> Result<(), StageFailure> {
        let (results, competitors) = self.gather_competitors(article, report).await;

        self.logger.step(4, "Optimizing article with LLM...");
        let generated = self
            .rewriter
            .rewrite(article, &competitors)
            .await
            .map_err(|e| StageFailure::new(Stage::Generated, e.to_string()))?;
        if generated.trim().is_empty() {
            return Err(StageFailure::new(
                Stage::Generated,
                "LLM returned empty content",
            ));
        }
        report.stage = Stage::Generated;

        self.logger.step(5, "Adding metadata and citations...");
        report.citations_added = valid_references(&results).len();
        let cited = compose_citations(
            &generated,
            &results,
            &self.config.provenance_label,
            Utc::now().date_naive(),
        );
        let content = truncate_chars(&cited, self.config.max_content_chars);
        report.stage = Stage::Cited;
        self.logger.info(&format!(
            "Generated {} characters of optimized content",
            cited.chars().count()
        ));

        self.logger.step(6, "Publishing updated article to API...");
        let updated = Article {
            content: Some(content),
            excerpt: Some(derive_excerpt(&generated, self.config.excerpt_chars)),
            tags: merge_tags(&article.tags, &self.config.enrichment_tags),
            ..article.clone()
        };
        report.final_chars = updated.content_chars();

        self.store
            .update(article.id, &updated)
            .await
            .map_err(|e| StageFailure::new(Stage::Published, e.to_string()))?;
        report.stage = Stage::Published;

        Ok(())
    }

    /// Search results and extracted competitor documents for `article`
    ///
    /// Both are empty in test mode or when nothing was found.
    async fn gather_competitors(
        &self,
        article: &Article,
        report: &mut ArticleReport,
    ) -> (Vec<SearchResult>, Vec<ExtractedDocument>) {
        if self.config.test_mode {
            self.logger.step(2, "TEST MODE: Skipping search");
            self.logger.step(3, "TEST MODE: Skipping web scraping");
            report.stage = Stage::Searched;
            return (Vec::new(), Vec::new());
        }

        self.logger.step(2, "Searching for competitor articles...");
        let mut query = derive_search_query(&article.title);
        if query.is_empty() {
            query = article.title.trim().to_string();
        }
        self.logger.info(&format!("Search query: \"{}\"", query));

        let wanted = self.search.results_to_fetch();
        let mut results = self.search.search(&query, wanted).await;
        if results.is_empty() && self.config.manual_fallback {
            self.logger
                .warn("Search failed, using manual fallback URLs");
            results = manual_results(&article.title, wanted);
        }
        report.stage = Stage::Searched;
        report.competitors_found = results.len();

        if results.is_empty() {
            self.logger
                .warn("No search results found, continuing with LLM-only optimization");
            return (results, Vec::new());
        }

        self.logger
            .info(&format!("Found {} competitor articles", results.len()));
        for (i, result) in results.iter().enumerate() {
            self.logger.info(&format!("  {}. {}", i + 1, result.url));
        }

        self.logger.step(3, "Scraping competitor articles...");
        let urls: Vec<String> = results.iter().map(|r| r.url.clone()).collect();
        let documents = self.extractor.extract_many(&urls).await;
        report.stage = Stage::Extracted;
        report.competitors_extracted = documents.len();

        if documents.is_empty() {
            self.logger.warn("Scraping failed for all competitors");
        } else {
            self.logger.info(&format!(
                "Successfully scraped {} competitor articles",
                documents.len()
            ));
        }

        (results, documents)
    }

    fn log_header(&self) {
        self.logger.info(&"=".repeat(RULE_WIDTH));
        self.logger.info("ARTICLE OPTIMIZER STARTED");
        if self.config.test_mode {
            self.logger
                .warn("RUNNING IN TEST MODE - Skipping search and scraping");
        }
        if self.config.manual_fallback {
            self.logger
                .warn("MANUAL FALLBACK ENABLED - Will use preset URLs if search fails");
        }
        self.logger.info(&"=".repeat(RULE_WIDTH));
    }

    fn log_statistics(&self, report: &ArticleReport) {
        self.logger.info("Statistics:");
        self.logger
            .info(&format!("  - Original length: {} chars", report.original_chars));
        self.logger
            .info(&format!("  - Optimized length: {} chars", report.final_chars));
        self.logger.info(&format!(
            "  - Competitors found: {}",
            report.competitors_found
        ));
        self.logger.info(&format!(
            "  - Competitors analyzed: {}",
            report.competitors_extracted
        ));
        self.logger
            .info(&format!("  - Citations added: {}", report.citations_added));
    }

    fn log_summary(&self, run: &PipelineRun) {
        self.logger.info(&"=".repeat(RULE_WIDTH));
        self.logger.info(&format!(
            "Run complete: {} published, {} failed",
            run.published_count(),
            run.failed_count()
        ));
        self.logger.info(&"=".repeat(RULE_WIDTH));
    }
}
