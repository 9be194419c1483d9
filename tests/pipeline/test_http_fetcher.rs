// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Reqwest fetcher status mapping against a local axum server

use super::support::*;
use article_enricher::http::{browser_headers, FetchError, HttpFetcher, DEFAULT_USER_AGENT};
use article_enricher::{ContentExtractor, ReqwestFetcher};
use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;

async fn spawn_site() -> String {
    let app = Router::new()
        .route("/ok", get(|| async { Html(article_page("Served article", 700)) }))
        .route("/forbidden", get(|| async { StatusCode::FORBIDDEN }))
        .route("/unauthorized", get(|| async { StatusCode::UNAUTHORIZED }))
        .route(
            "/error",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/redirect", get(|| async { Redirect::temporary("/ok") }))
        .route("/loop", get(|| async { Redirect::temporary("/loop") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "late"
            }),
        )
        .route(
            "/ua",
            get(|headers: HeaderMap| async move {
                headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(5).unwrap()
}

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_success_returns_body() {
    let base = spawn_site().await;
    let body = fetcher().get(&format!("{}/ok", base), &[], TIMEOUT).await.unwrap();
    assert!(body.contains("Served article"));
}

#[tokio::test]
async fn test_forbidden_and_unauthorized_are_blocked() {
    let base = spawn_site().await;
    let fetcher = fetcher();

    for (path, status) in [("/forbidden", 403), ("/unauthorized", 401)] {
        let err = fetcher
            .get(&format!("{}{}", base, path), &[], TIMEOUT)
            .await
            .unwrap_err();
        assert!(err.is_blocked());
        assert!(matches!(err, FetchError::Blocked { status: s, .. } if s == status));
    }
}

#[tokio::test]
async fn test_server_error_is_http_status() {
    let base = spawn_site().await;
    let err = fetcher()
        .get(&format!("{}/error", base), &[], TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_redirect_followed() {
    let base = spawn_site().await;
    let body = fetcher()
        .get(&format!("{}/redirect", base), &[], TIMEOUT)
        .await
        .unwrap();
    assert!(body.contains("Served article"));
}

#[tokio::test]
async fn test_redirect_loop_is_transport_error() {
    let base = spawn_site().await;
    let err = fetcher()
        .get(&format!("{}/loop", base), &[], TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_slow_page_times_out() {
    let base = spawn_site().await;
    let err = fetcher()
        .get(&format!("{}/slow", base), &[], Duration::from_millis(200))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Timeout { timeout_ms: 200, .. }));
}

#[tokio::test]
async fn test_browser_headers_sent() {
    let base = spawn_site().await;
    let body = fetcher()
        .get(
            &format!("{}/ua", base),
            &browser_headers(DEFAULT_USER_AGENT),
            TIMEOUT,
        )
        .await
        .unwrap();
    assert_eq!(body, DEFAULT_USER_AGENT);
}

#[tokio::test]
async fn test_extractor_over_real_http() {
    let base = spawn_site().await;
    let extractor = ContentExtractor::new(Arc::new(fetcher()), fast_extractor_config());

    let urls = vec![
        format!("{}/ok", base),
        format!("{}/forbidden", base),
        format!("{}/error", base),
    ];
    let docs = extractor.extract_many(&urls).await;

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "Served article");
}
