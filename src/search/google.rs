// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google search provider
//!
//! Direct scraping of google.com is often blocked, so it sits last in the
//! default table. Google's markup changes frequently; three container
//! selectors are tried in sequence and the first with any hit wins.

use super::provider::SearchProvider;

/// Google results page record
pub const GOOGLE: SearchProvider = SearchProvider {
    name: "google",
    url_template: "https://www.google.com/search?q={query}&num=10",
    headers: &[
        ("User-Agent", crate::http::DEFAULT_USER_AGENT),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Connection", "keep-alive"),
        ("Upgrade-Insecure-Requests", "1"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
        ("Cache-Control", "max-age=0"),
    ],
    self_domain: "google.com",
    redirect_param: None,
    result_selectors: &[".g", "#search .g", ".Gx5Zad"],
    title_selector: "h3",
    link_selector: "a",
    snippet_selector: ".VwiC3b, .s, .st",
};
