// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Article API store and chat completions client against a local axum server

use super::support::*;
use article_enricher::articles::StoreConfig;
use article_enricher::generation::{GenerationConfig, GenerationRequest};
use article_enricher::pipeline::{MemoryLogger, PipelineConfig, PipelineOrchestrator};
use article_enricher::{
    ArticleRewriter, ArticleStore, ChatCompletionsClient, ContentExtractor, GenerationError,
    HttpArticleStore, SearchFallbackChain, StoreError, TextGenerator,
};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

type Db = Arc<Mutex<Vec<Value>>>;

async fn list_articles(State(db): State<Db>) -> Json<Value> {
    let articles = db.lock().await.clone();
    Json(json!({ "success": true, "count": articles.len(), "data": articles }))
}

async fn get_article(State(db): State<Db>, Path(id): Path<i64>) -> impl IntoResponse {
    let db = db.lock().await;
    match db.iter().find(|a| a["id"] == id) {
        Some(article) => (
            StatusCode::OK,
            Json(json!({ "success": true, "data": article })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Article not found" })),
        ),
    }
}

async fn update_article(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> impl IntoResponse {
    let mut db = db.lock().await;
    match db.iter_mut().find(|a| a["id"] == id) {
        Some(slot) => {
            body["id"] = json!(id);
            *slot = body.clone();
            // The real API echoes the id from the route, as a string
            body["id"] = json!(id.to_string());
            (StatusCode::OK, Json(json!({ "success": true, "data": body })))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Article not found" })),
        ),
    }
}

async fn chat_completions(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer test-key");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" })));
    }

    let title_seen = body["messages"][1]["content"]
        .as_str()
        .unwrap_or_default()
        .contains("Chatbots for Sales Teams");
    let reply = if title_seen { "## Rewritten\n\nFresh body." } else { "" };
    (
        StatusCode::OK,
        Json(json!({
            "choices": [{ "message": { "role": "assistant", "content": reply } }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        })),
    )
}

async fn spawn_api() -> (String, Db) {
    let db: Db = Arc::new(Mutex::new(vec![
        json!({
            "id": 1,
            "title": "Chatbots for Sales Teams",
            "url": "https://blog.test/chatbots",
            "author": "Staff",
            "content": "Old body",
            "tags": "[\"sales\"]"
        }),
        json!({ "id": 2, "title": "Second", "tags": null }),
    ]));

    let app = Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/articles/:id", get(get_article).put(update_article))
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(db.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), db)
}

fn store_for(base: &str) -> HttpArticleStore {
    HttpArticleStore::new(&StoreConfig {
        base_url: format!("{}/api", base),
        timeout_secs: 5,
    })
    .unwrap()
}

fn client_for(base: &str, key: &str) -> ChatCompletionsClient {
    ChatCompletionsClient::new(&GenerationConfig {
        api_url: format!("{}/v1", base),
        api_key: Some(key.to_string()),
        timeout_secs: 5,
        ..GenerationConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_decodes_envelope_and_tags() {
    let (base, _db) = spawn_api().await;
    let articles = store_for(&base).list().await.unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].tags, vec!["sales"]);
    assert!(articles[1].tags.is_empty());
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let (base, _db) = spawn_api().await;
    let store = store_for(&base);

    assert_eq!(store.get(1).await.unwrap().title, "Chatbots for Sales Teams");
    assert!(matches!(store.get(42).await, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_update_round_trips() {
    let (base, db) = spawn_api().await;
    let store = store_for(&base);

    let mut article = store.get(2).await.unwrap();
    article.content = Some("New body".to_string());
    article.tags = vec!["optimized".to_string()];
    let updated = store.update(2, &article).await.unwrap();

    assert_eq!(updated.id, 2);
    assert_eq!(updated.content.as_deref(), Some("New body"));
    assert_eq!(db.lock().await[1]["tags"], json!(["optimized"]));
}

#[tokio::test]
async fn test_chat_client_sends_bearer_key() {
    let (base, _db) = spawn_api().await;
    let request = GenerationRequest {
        system_prompt: "You are an expert SEO content writer.".to_string(),
        user_prompt: "Write about \"Chatbots for Sales Teams\"".to_string(),
        max_output_tokens: 100,
        temperature: 0.7,
    };

    let text = client_for(&base, "test-key").generate(&request).await.unwrap();
    assert_eq!(text, "## Rewritten\n\nFresh body.");

    let err = client_for(&base, "wrong").generate(&request).await.unwrap_err();
    assert_eq!(err, GenerationError::Unauthorized(401));
}

#[tokio::test]
async fn test_pipeline_over_http_in_test_mode() {
    let (base, db) = spawn_api().await;
    let fetcher = Arc::new(StubFetcher::new());
    let logger = Arc::new(MemoryLogger::new());
    let orchestrator = PipelineOrchestrator::new(
        Arc::new(store_for(&base)),
        SearchFallbackChain::new(fetcher.clone(), fast_search_config()),
        ContentExtractor::new(fetcher.clone(), fast_extractor_config()),
        ArticleRewriter::new(Arc::new(client_for(&base, "test-key")), 1000, 0.7),
        logger.clone(),
        PipelineConfig {
            test_mode: true,
            ..fast_pipeline_config()
        },
    );

    let run = orchestrator.run().await.unwrap();

    // Article 2's prompt lacks the matching title, so the stub replies empty
    assert_eq!(run.published_count(), 1);
    assert_eq!(run.failed_count(), 1);
    assert!(fetcher.requested().is_empty());

    let stored = db.lock().await[0].clone();
    assert_eq!(stored["tags"], json!(["sales", "optimized", "ai-enhanced"]));
    assert_eq!(stored["excerpt"], "Rewritten Fresh body.");
    assert!(stored["content"]
        .as_str()
        .unwrap()
        .starts_with("## Rewritten\n\nFresh body.\n\n---\n\n*Optimized with Groq AI | "));
}
