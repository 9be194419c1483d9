// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Reference section and enrichment marker for generated articles

use chrono::NaiveDate;
use std::collections::HashSet;
use url::Url;

use crate::search::SearchResult;

/// Documentation-only domains that never count as a real source
const PLACEHOLDER_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

fn is_placeholder_host(host: &str) -> bool {
    let host = host.trim_start_matches("www.");
    PLACEHOLDER_DOMAINS
        .iter()
        .any(|d| host == *d || host.ends_with(&format!(".{}", d)))
}

fn is_citable(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    parsed.host_str().map_or(false, |h| !is_placeholder_host(h))
}

/// References worth citing, first occurrence of each URL kept
pub fn valid_references(references: &[SearchResult]) -> Vec<&SearchResult> {
    let mut seen = HashSet::new();
    references
        .iter()
        .filter(|r| !r.url.trim().is_empty() && is_citable(&r.url))
        .filter(|r| seen.insert(r.url.as_str()))
        .collect()
}

/// Append the reference list and the `*Optimized with {label} | {date}*` line
///
/// With no valid references only a separator and the marker are appended.
pub fn compose_citations(
    content: &str,
    references: &[SearchResult],
    label: &str,
    date: NaiveDate,
) -> String {
    let marker = format!("*Optimized with {} | {}*", label, date.format("%Y-%m-%d"));
    let valid = valid_references(references);

    if valid.is_empty() {
        return format!("{}\n\n---\n\n{}", content, marker);
    }

    let citations = valid
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. [{}]({})", i + 1, r.title, r.url))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n---\n## References\n{}\n\n{}\n",
        content, citations, marker
    )
}
