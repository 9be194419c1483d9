// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query derivation from article titles
//!
//! Full titles carry stop words and punctuation that keyword-oriented
//! providers handle poorly, so titles are reduced to a few keywords.

/// Words of this many characters or fewer are dropped
pub const SHORT_WORD_LEN: usize = 3;

/// Maximum keywords kept in a derived query
pub const MAX_KEYWORDS: usize = 5;

/// Reduce an article title to a keyword query
///
/// Punctuation becomes whitespace, words of `SHORT_WORD_LEN` characters or
/// fewer are dropped, and the first `MAX_KEYWORDS` survivors are joined
/// with single spaces.
///
/// # Example
/// `"10 Ways Chatbots Boost Sales: A Guide!"` becomes
/// `"Ways Chatbots Boost Sales Guide"`.
pub fn derive_search_query(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > SHORT_WORD_LEN)
        .take(MAX_KEYWORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

// Apostrophes stay so contractions remain one token
fn is_separator(c: char) -> bool {
    c != '\'' && c != '\u{2019}' && (c.is_ascii_punctuation() || is_unicode_dash(c))
}

fn is_unicode_dash(c: char) -> bool {
    matches!(c, '\u{2013}' | '\u{2014}')
}
