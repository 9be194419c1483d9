// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use article_enricher::{
    cli::Cli,
    config::AppConfig,
    pipeline::{PipelineOrchestrator, TracingLogger},
    version, ArticleRewriter, ChatCompletionsClient, ContentExtractor, HttpArticleStore,
    ReqwestFetcher, SearchFallbackChain,
};
use clap::Parser;
use std::{env, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn build_orchestrator(config: &AppConfig) -> Result<PipelineOrchestrator> {
    let store = Arc::new(HttpArticleStore::new(&config.store)?);
    let fetcher = Arc::new(ReqwestFetcher::new(config.extractor.max_redirects)?);
    let search = SearchFallbackChain::new(fetcher.clone(), config.search.clone());
    let extractor = ContentExtractor::new(fetcher, config.extractor.clone());
    let generator = Arc::new(ChatCompletionsClient::new(&config.generation)?);
    let rewriter = ArticleRewriter::new(
        generator,
        config.generation.max_tokens,
        config.generation.temperature,
    );

    Ok(PipelineOrchestrator::new(
        store,
        search,
        extractor,
        rewriter,
        Arc::new(TracingLogger),
        config.pipeline.clone(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    println!("📦 {}", version::banner());
    println!();
    info!("Features: {}", version::FEATURES.join(", "));

    let mut config = AppConfig::from_env();
    cli.apply(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }

    info!(
        "API: {}, search: {}, model: {}",
        config.store.base_url, config.search.preferred_provider, config.generation.model
    );

    let orchestrator = match build_orchestrator(&config) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    };

    let settings = orchestrator.config();
    info!(
        "Batch size: {}, article delay: {} ms, test mode: {}, manual fallback: {}",
        settings.batch_size,
        settings.article_delay_ms,
        settings.test_mode,
        settings.manual_fallback
    );

    let result = match cli.article_id {
        Some(id) => orchestrator.run_single(id).await,
        None => orchestrator.run().await,
    };

    match result {
        Ok(run) => {
            info!(
                "Finished: {} published, {} failed",
                run.published_count(),
                run.failed_count()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
