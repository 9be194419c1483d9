// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// End-to-end orchestrator runs against in-process doubles

use super::support::*;
use article_enricher::generation::GenerationError;
use article_enricher::pipeline::{
    ArticleOutcome, LogLevel, PipelineConfig, PipelineError, Stage,
};
use std::time::Duration;
use tokio::time::Instant;

const COMPETITOR_ONE: &str = "https://competitor-one.test/post";
const COMPETITOR_TWO: &str = "https://competitor-two.test/post";

fn search_and_pages() -> StubFetcher {
    StubFetcher::new()
        .route(DDG, &ddg_page(&[COMPETITOR_ONE, COMPETITOR_TWO]))
        .route(COMPETITOR_ONE, &article_page("Long competitor", 800))
        .route(COMPETITOR_TWO, &article_page("Thin competitor", 200))
}

#[tokio::test]
async fn test_full_enrichment_publishes_article() {
    let h = harness(
        vec![article(1, "10 Ways Chatbots Boost Sales: A Guide!", &["sales"])],
        search_and_pages(),
        ScriptedGenerator::always("# Better Title\n\nA **much** better body.", 1),
        fast_pipeline_config(),
    );

    let run = h.orchestrator.run().await.unwrap();
    assert_eq!(run.published_count(), 1);
    assert_eq!(run.failed_count(), 0);

    let report = run.report_for(1).unwrap();
    assert_eq!(report.stage, Stage::Published);
    assert_eq!(report.competitors_found, 2);
    assert_eq!(report.competitors_extracted, 1);
    assert_eq!(report.citations_added, 2);
    assert_eq!(report.original_chars, "Original body".len());

    // Derived keyword query plus suffix went to the first provider
    let first_request = &h.fetcher.requested()[0];
    assert!(first_request.starts_with(DDG));
    assert!(first_request.contains("q=Ways+Chatbots+Boost+Sales+Guide+blog+article"));

    let stored = stored(&h.store, 1).await;
    let content = stored.content.unwrap();
    assert!(content.starts_with("# Better Title"));
    assert!(content.contains(&format!(
        "## References\n1. [Competitor 1]({})\n2. [Competitor 2]({})",
        COMPETITOR_ONE, COMPETITOR_TWO
    )));
    assert!(content.contains("*Optimized with Groq AI | "));
    assert_eq!(stored.excerpt.as_deref(), Some("Better Title A much better body."));
    assert_eq!(stored.tags, vec!["sales", "optimized", "ai-enhanced"]);
    assert_eq!(report.final_chars, content.chars().count());
}

#[tokio::test]
async fn test_competitor_text_reaches_prompt() {
    let h = harness(
        vec![article(1, "Chatbots for Sales Teams", &[])],
        search_and_pages(),
        ScriptedGenerator::always("Rewritten body", 1),
        fast_pipeline_config(),
    );

    h.orchestrator.run().await.unwrap();

    let requests = h.generator.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].user_prompt.contains(COMPETITOR_ONE));
    assert!(!requests[0].user_prompt.contains(COMPETITOR_TWO));
}

#[tokio::test]
async fn test_empty_generation_fails_article_and_continues() {
    let h = harness(
        vec![
            article(1, "Chatbots for Sales Teams", &[]),
            article(2, "Customer Service Automation", &[]),
        ],
        search_and_pages(),
        ScriptedGenerator::new(vec![Ok("   ".to_string()), Ok("Second body".to_string())]),
        fast_pipeline_config(),
    );

    let run = h.orchestrator.run().await.unwrap();

    let failed = run.report_for(1).unwrap();
    assert_eq!(failed.failed_stage(), Some(Stage::Generated));
    assert!(matches!(
        &failed.outcome,
        ArticleOutcome::Failed { reason, .. } if reason.contains("empty")
    ));
    assert!(run.report_for(2).unwrap().is_published());

    assert_eq!(h.store.updated_ids().await, vec![2]);
    assert_eq!(stored(&h.store, 1).await.content.as_deref(), Some("Original body"));
    assert!(h.logger.contains("at stage generated"));
}

#[tokio::test]
async fn test_generation_error_fails_at_generated() {
    let h = harness(
        vec![article(1, "Chatbots for Sales Teams", &[])],
        StubFetcher::new(),
        ScriptedGenerator::new(vec![Err(GenerationError::RateLimited)]),
        fast_pipeline_config(),
    );

    let run = h.orchestrator.run().await.unwrap();
    assert_eq!(run.failed_count(), 1);
    assert_eq!(run.reports[0].failed_stage(), Some(Stage::Generated));
    assert!(h.store.updated_ids().await.is_empty());
}

#[tokio::test]
async fn test_only_batch_prefix_processed() {
    let h = harness(
        vec![
            article(1, "First Article Title", &[]),
            article(2, "Second Article Title", &[]),
            article(3, "Third Article Title", &[]),
        ],
        StubFetcher::new(),
        ScriptedGenerator::always("Body", 3),
        fast_pipeline_config(),
    );

    let run = h.orchestrator.run().await.unwrap();

    assert_eq!(run.reports.len(), 2);
    assert_eq!(h.generator.requests().len(), 2);
    assert_eq!(h.store.updated_ids().await, vec![1, 2]);
}

#[tokio::test]
async fn test_no_results_without_fallback_generates_alone() {
    let h = harness(
        vec![article(1, "Sales Chatbot Playbook", &[])],
        StubFetcher::new(),
        ScriptedGenerator::always("Standalone body", 1),
        fast_pipeline_config(),
    );

    let run = h.orchestrator.run().await.unwrap();
    let report = &run.reports[0];

    assert!(report.is_published());
    assert_eq!(report.competitors_found, 0);
    assert_eq!(report.citations_added, 0);

    let content = stored(&h.store, 1).await.content.unwrap();
    assert!(!content.contains("## References"));
    assert!(content.starts_with("Standalone body\n\n---\n\n*Optimized with Groq AI | "));
    assert!(h.logger.contains("continuing with LLM-only optimization"));
    // Every provider was tried once
    assert_eq!(h.fetcher.requested().len(), 3);
}

#[tokio::test]
async fn test_manual_fallback_supplies_citations() {
    let config = PipelineConfig {
        manual_fallback: true,
        ..fast_pipeline_config()
    };
    let h = harness(
        vec![article(1, "Sales Chatbot Playbook", &[])],
        StubFetcher::new(),
        ScriptedGenerator::always("Body", 1),
        config,
    );

    let run = h.orchestrator.run().await.unwrap();
    let report = &run.reports[0];

    assert!(report.is_published());
    assert_eq!(report.competitors_found, 2);
    // Preset pages are unreachable through the stub
    assert_eq!(report.competitors_extracted, 0);
    assert_eq!(report.citations_added, 2);

    let content = stored(&h.store, 1).await.content.unwrap();
    assert!(content.contains("1. [How Chatbots Boost Sales Conversions]"));
    assert!(h.logger.contains("using manual fallback URLs"));
}

#[tokio::test]
async fn test_test_mode_skips_search_and_scraping() {
    let config = PipelineConfig {
        test_mode: true,
        ..fast_pipeline_config()
    };
    let h = harness(
        vec![article(1, "Chatbots for Sales Teams", &[])],
        search_and_pages(),
        ScriptedGenerator::always("Body", 1),
        config,
    );

    let run = h.orchestrator.run().await.unwrap();

    assert!(run.reports[0].is_published());
    assert!(h.fetcher.requested().is_empty());
    assert!(h.logger.contains("RUNNING IN TEST MODE"));
}

#[tokio::test]
async fn test_enrichment_tags_idempotent_across_runs() {
    let h = harness(
        vec![article(1, "Chatbots for Sales Teams", &["sales", "optimized"])],
        StubFetcher::new(),
        ScriptedGenerator::always("Body", 2),
        fast_pipeline_config(),
    );

    h.orchestrator.run().await.unwrap();
    let after_first = stored(&h.store, 1).await.tags;
    h.orchestrator.run().await.unwrap();
    let after_second = stored(&h.store, 1).await.tags;

    assert_eq!(after_first, vec!["sales", "optimized", "ai-enhanced"]);
    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn test_content_truncated_to_limit() {
    let config = PipelineConfig {
        max_content_chars: 100,
        ..fast_pipeline_config()
    };
    let h = harness(
        vec![article(1, "Chatbots for Sales Teams", &[])],
        StubFetcher::new(),
        ScriptedGenerator::always(&"b".repeat(500), 1),
        config,
    );

    h.orchestrator.run().await.unwrap();

    let stored = stored(&h.store, 1).await;
    assert_eq!(stored.content.unwrap().chars().count(), 100);
    assert!(stored.excerpt.unwrap().ends_with("..."));
}

#[tokio::test]
async fn test_unreachable_store_is_fatal() {
    let h = harness(
        vec![article(1, "Chatbots for Sales Teams", &[])],
        StubFetcher::new(),
        ScriptedGenerator::always("Body", 1),
        fast_pipeline_config(),
    );
    h.store.set_unavailable(true);

    let result = h.orchestrator.run().await;
    assert!(matches!(result, Err(PipelineError::Store(_))));
    assert!(h.generator.requests().is_empty());
}

#[tokio::test]
async fn test_empty_backlog_is_not_an_error() {
    let h = harness(
        vec![],
        StubFetcher::new(),
        ScriptedGenerator::default(),
        fast_pipeline_config(),
    );

    let run = h.orchestrator.run().await.unwrap();
    assert!(run.reports.is_empty());
    assert!(h.logger.contains("No articles found"));
}

#[tokio::test]
async fn test_run_single_processes_one_article() {
    let h = harness(
        vec![
            article(1, "First Article Title", &[]),
            article(2, "Second Article Title", &[]),
        ],
        StubFetcher::new(),
        ScriptedGenerator::always("Body", 1),
        fast_pipeline_config(),
    );

    let run = h.orchestrator.run_single(2).await.unwrap();
    assert_eq!(run.reports.len(), 1);
    assert_eq!(run.reports[0].article_id, 2);
    assert_eq!(h.store.updated_ids().await, vec![2]);

    assert!(matches!(
        h.orchestrator.run_single(99).await,
        Err(PipelineError::Store(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_article_delay_follows_failed_article() {
    let config = PipelineConfig {
        test_mode: true,
        article_delay_ms: 3000,
        ..PipelineConfig::default()
    };
    let h = harness(
        vec![
            article(1, "Chatbots for Sales Teams", &[]),
            article(2, "Live Chat Etiquette", &[]),
        ],
        StubFetcher::new(),
        ScriptedGenerator::new(vec![Ok(String::new()), Ok("Body".to_string())]),
        config,
    );
    assert_eq!(h.orchestrator.config().article_delay_ms, 3000);

    let started = Instant::now();
    let run = h.orchestrator.run().await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_millis(3000));
    assert!(!run.reports[0].is_published());
    assert!(run.reports[1].is_published());

    let waits = h
        .logger
        .messages(LogLevel::Info)
        .iter()
        .filter(|m| m.contains("Waiting before processing next article"))
        .count();
    assert_eq!(waits, 1);
}

#[tokio::test(start_paused = true)]
async fn test_single_article_batch_never_waits() {
    let config = PipelineConfig {
        test_mode: true,
        article_delay_ms: 3000,
        ..PipelineConfig::default()
    };
    let h = harness(
        vec![article(1, "Chatbots for Sales Teams", &[])],
        StubFetcher::new(),
        ScriptedGenerator::always("Body", 1),
        config,
    );

    let started = Instant::now();
    h.orchestrator.run().await.unwrap();

    assert_eq!(started.elapsed(), Duration::ZERO);
}
