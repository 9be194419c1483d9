// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML content extraction
//!
//! Recovers a title and plain-text body from arbitrary article markup
//! using ordered CSS selector heuristics.

use scraper::{ElementRef, Html, Selector};

use super::config::ExtractorConfig;
use crate::utils::{collapse_whitespace, normalize_whitespace, truncate_chars};

/// Title used when the page offers none
pub const NO_TITLE: &str = "No title found";

/// Elements removed before any text is read
const NOISE_SELECTOR: &str = "script, style, noscript, nav, footer, header, aside, iframe, \
     .advertisement, .ads, .cookie-banner, .cookie-consent, #cookie-banner";

/// Article containers in priority order: semantic, CMS classes, generic
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role='main']",
    ".article-content",
    ".post-content",
    ".entry-content",
    ".content",
    "main",
    ".main-content",
    "#content",
    ".blog-content",
    ".post-body",
];

/// Title and body recovered from a page
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub title: String,
    pub content: String,
}

/// Extract the readable article from `html`
///
/// Tries container selectors in order and takes the first whose text is
/// longer than `selector_accept_chars`; otherwise joins every paragraph.
/// Returns `None` when the recovered text is shorter than
/// `min_content_chars`. Content is capped at `max_content_chars`.
pub fn extract_article(html: &str, config: &ExtractorConfig) -> Option<Extraction> {
    let mut document = Html::parse_document(html);
    strip_noise(&mut document);

    let root = document.root_element();
    let content = extract_body(root, config.selector_accept_chars);

    if content.chars().count() < config.min_content_chars {
        return None;
    }

    Some(Extraction {
        title: extract_title(root),
        content: truncate_chars(&content, config.max_content_chars),
    })
}

/// Detach navigation, ads and other non-content subtrees
fn strip_noise(document: &mut Html) {
    let selector = match Selector::parse(NOISE_SELECTOR) {
        Ok(selector) => selector,
        Err(_) => return,
    };

    let noise: Vec<_> = document
        .root_element()
        .select(&selector)
        .map(|element| element.id())
        .collect();

    for id in noise {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

// Queries run from the root element: detached nodes stay in the arena and
// would still be visited by a document-wide select.
fn extract_body(root: ElementRef<'_>, accept_chars: usize) -> String {
    for selector_str in CONTENT_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(selector) => selector,
            Err(_) => continue,
        };

        if let Some(element) = root.select(&selector).next() {
            let text = normalize_whitespace(&element.text().collect::<String>());
            if text.chars().count() > accept_chars {
                return text;
            }
        }
    }

    paragraph_text(root)
}

fn paragraph_text(root: ElementRef<'_>) -> String {
    let selector = match Selector::parse("p") {
        Ok(selector) => selector,
        Err(_) => return String::new(),
    };

    let joined = root
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    normalize_whitespace(&joined)
}

fn extract_title(root: ElementRef<'_>) -> String {
    first_text(root, "h1")
        .or_else(|| first_attr(root, "meta[property='og:title']", "content"))
        .or_else(|| first_text(root, "title"))
        .unwrap_or_else(|| NO_TITLE.to_string())
}

fn first_text(root: ElementRef<'_>, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = root.select(&selector).next()?;
    let text = collapse_whitespace(&element.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

fn first_attr(root: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let value = root.select(&selector).next()?.value().attr(attr)?;
    let value = collapse_whitespace(value);
    (!value.is_empty()).then_some(value)
}
