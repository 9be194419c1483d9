// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bing search provider
//!
//! Scrapes the public Bing results page. Second in the default table.

use super::provider::SearchProvider;

/// Bing results page record
pub const BING: SearchProvider = SearchProvider {
    name: "bing",
    url_template: "https://www.bing.com/search?q={query}",
    headers: &[
        ("User-Agent", crate::http::DEFAULT_USER_AGENT),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.9"),
    ],
    self_domain: "bing.com",
    redirect_param: None,
    result_selectors: &[".b_algo"],
    title_selector: "h2 a",
    link_selector: "h2 a",
    snippet_selector: ".b_caption p",
};
