// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo search provider
//!
//! Uses DuckDuckGo's HTML interface. No API key required; the most
//! reliable of the keyless providers, so it leads the default table.

use super::provider::SearchProvider;

/// DuckDuckGo HTML endpoint record
pub const DUCKDUCKGO: SearchProvider = SearchProvider {
    name: "duckduckgo",
    url_template: "https://html.duckduckgo.com/html/?q={query}",
    headers: &[
        ("User-Agent", crate::http::DEFAULT_USER_AGENT),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Connection", "keep-alive"),
        ("Upgrade-Insecure-Requests", "1"),
    ],
    self_domain: "duckduckgo.com",
    // Result links look like //duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...
    redirect_param: Some("uddg"),
    result_selectors: &[".result"],
    title_selector: ".result__a",
    link_selector: ".result__a",
    snippet_selector: ".result__snippet",
};
