// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Browser-identifying header sets
//!
//! Search engines and many publishers serve stripped or blocked markup to
//! clients that do not look like a desktop browser.

/// Desktop Chrome user agent used when none is configured
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Full navigation header set sent with competitor page fetches
pub fn browser_headers(user_agent: &str) -> Vec<(String, String)> {
    let mut headers = vec![("User-Agent".to_string(), user_agent.to_string())];
    headers.extend(owned_headers(&[
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Connection", "keep-alive"),
        ("Upgrade-Insecure-Requests", "1"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
        ("Cache-Control", "max-age=0"),
    ]));
    headers
}

/// Convert a static header table into owned pairs
pub fn owned_headers(headers: &[(&str, &str)]) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
