// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the article enricher

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-search-fallback-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "search-fallback-chain",
    "duckduckgo-html",
    "bing-html",
    "google-html",
    "content-extraction",
    "quality-gate",
    "chat-completions",
    "citations",
    "manual-fallback",
    "test-mode",
];

/// Returns the banner line printed at startup
pub fn banner() -> String {
    format!("Article Enricher {} (built {})", VERSION, BUILD_DATE)
}
