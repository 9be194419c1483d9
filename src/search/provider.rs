// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search provider records
//!
//! Each provider is plain data: where to send the query, which headers to
//! present, and which selectors recover `(title, url, snippet)` from the
//! returned HTML. The fallback chain treats every record the same way.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::bing::BING;
use super::duckduckgo::DUCKDUCKGO;
use super::google::GOOGLE;
use super::types::{SearchError, SearchResult};

/// Placeholder substituted with the encoded query in `url_template`
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Title used when a result carries a link but no readable title
pub const UNTITLED: &str = "No title";

/// A search backend described as a data record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchProvider {
    /// Provider name for logging and result provenance
    pub name: &'static str,
    /// Request URL with a `{query}` placeholder
    pub url_template: &'static str,
    /// Browser-identifying headers sent with every request
    pub headers: &'static [(&'static str, &'static str)],
    /// Links into this domain are navigation, not results
    pub self_domain: &'static str,
    /// Query parameter carrying the destination of redirect-wrapped links
    pub redirect_param: Option<&'static str>,
    /// Result container selectors, tried in order; first with any hit wins
    pub result_selectors: &'static [&'static str],
    /// Title element, scoped to a result container
    pub title_selector: &'static str,
    /// Link element whose `href` is the result URL
    pub link_selector: &'static str,
    /// Snippet element, scoped to a result container
    pub snippet_selector: &'static str,
}

impl SearchProvider {
    /// Build the request URL for `query`
    pub fn request_url(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        self.url_template.replace(QUERY_PLACEHOLDER, &encoded)
    }

    /// Recover up to `max_results` normalized results from a result page
    ///
    /// Result selectors are applied one at a time across the whole
    /// document. The first selector that yields any accepted result is
    /// returned; results from different selectors are never merged.
    pub fn parse_results(
        &self,
        html: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let document = Html::parse_document(html);
        let title_selector = self.selector(self.title_selector)?;
        let link_selector = self.selector(self.link_selector)?;
        let snippet_selector = self.selector(self.snippet_selector)?;

        for container_str in self.result_selectors {
            let container_selector = self.selector(container_str)?;
            let mut results = Vec::new();

            for container in document.select(&container_selector) {
                if results.len() >= max_results {
                    break;
                }

                let href = match container
                    .select(&link_selector)
                    .next()
                    .and_then(|link| link.value().attr("href"))
                {
                    Some(href) => href,
                    None => continue,
                };

                let url = match self.normalize_url(href) {
                    Some(url) => url,
                    None => continue,
                };

                let title = container
                    .select(&title_selector)
                    .next()
                    .map(element_text)
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNTITLED.to_string());

                let snippet = container
                    .select(&snippet_selector)
                    .next()
                    .map(element_text)
                    .unwrap_or_default();

                results.push(SearchResult {
                    title,
                    url,
                    snippet,
                    source: self.name.to_string(),
                });
            }

            if !results.is_empty() {
                return Ok(results);
            }
        }

        Ok(Vec::new())
    }

    /// Turn a raw `href` into an absolute result URL, or reject it
    ///
    /// Redirect-wrapped links are unwrapped before the self-domain check.
    pub fn normalize_url(&self, href: &str) -> Option<String> {
        let href = href.trim();
        let candidate = self
            .unwrap_redirect(href)
            .unwrap_or_else(|| href.to_string());

        if !candidate.starts_with("http") {
            return None;
        }

        let parsed = Url::parse(&candidate).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }

        let host = parsed.host_str()?.to_lowercase();
        if is_same_domain(&host, self.self_domain) {
            return None;
        }

        Some(candidate)
    }

    fn unwrap_redirect(&self, href: &str) -> Option<String> {
        let param = self.redirect_param?;
        if !href.contains(&format!("{}=", param)) {
            return None;
        }

        // Redirect links are usually protocol- or host-relative
        let base = Url::parse(&format!("https://{}/", self.self_domain)).ok()?;
        let absolute = base.join(href).ok()?;
        let destination = absolute
            .query_pairs()
            .find(|(key, _)| key == param)
            .map(|(_, value)| value.into_owned());
        destination
    }

    fn selector(&self, selector: &str) -> Result<Selector, SearchError> {
        Selector::parse(selector).map_err(|_| SearchError::InvalidSelector {
            provider: self.name.to_string(),
            selector: selector.to_string(),
        })
    }
}

/// Default provider table, with `preferred` moved to the front
///
/// Unknown preferences leave the default order untouched.
pub fn default_providers(preferred: &str) -> Vec<SearchProvider> {
    let mut providers = vec![DUCKDUCKGO, BING, GOOGLE];
    let preferred = preferred.trim().to_lowercase();
    if let Some(pos) = providers.iter().position(|p| p.name == preferred) {
        let provider = providers.remove(pos);
        providers.insert(0, provider);
    }
    providers
}

/// Text content of an element with whitespace collapsed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_same_domain(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{}", domain))
}
