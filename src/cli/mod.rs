// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;

use crate::articles::ArticleId;
use crate::config::AppConfig;

/// Article enricher CLI
#[derive(Parser, Debug, Default)]
#[command(name = "article-enricher")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Enrich stored articles with competitor research and AI rewriting", long_about = None)]
pub struct Cli {
    /// Number of backlog articles to process
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Skip search and scraping, rewrite from the original only
    #[arg(long)]
    pub test_mode: bool,

    /// Use preset competitor URLs when search fails
    #[arg(long)]
    pub manual_fallback: bool,

    /// Article API base URL
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Process only this article
    #[arg(long, env = "ARTICLE_ID")]
    pub article_id: Option<ArticleId>,
}

impl Cli {
    /// Overlay command-line flags on the environment configuration
    ///
    /// Flags only ever switch modes on; they never turn off a mode enabled
    /// through the environment.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(batch_size) = self.batch_size {
            config.pipeline.batch_size = batch_size;
        }
        if let Some(url) = &self.api_base_url {
            config.store.base_url = url.clone();
        }
        config.pipeline.test_mode |= self.test_mode;
        config.pipeline.manual_fallback |= self.manual_fallback;
    }
}
