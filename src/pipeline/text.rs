// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text shaping applied to generated articles before publication

use std::collections::HashSet;

use crate::utils::{collapse_whitespace, truncate_chars};

const ELLIPSIS: &str = "...";

/// Drop the Markdown markers that would show up as noise in plain text
fn strip_markdown(text: &str) -> String {
    text.lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.trim_start_matches('#').trim_start_matches('>');
            let line = line.trim_start();
            let line = line
                .strip_prefix("- ")
                .or_else(|| line.strip_prefix("* "))
                .or_else(|| line.strip_prefix("+ "))
                .unwrap_or(line);
            let line = strip_ordered_marker(line);
            let line = line
                .replace(|c: char| c == '*' || c == '`', "")
                .replace("__", "")
                .replace("---", "");
            strip_underscore_emphasis(&line)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `12. item` becomes `item`; `3.5 million` is left alone
fn strip_ordered_marker(line: &str) -> &str {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }
    line[digits..].strip_prefix(". ").unwrap_or(line)
}

/// Remove `_` that opens or closes a word; `snake_case` keeps its underscore
fn strip_underscore_emphasis(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if c != '_' {
                return true;
            }
            let before = i.checked_sub(1).map_or(false, |p| chars[p].is_alphanumeric());
            let after = chars.get(i + 1).map_or(false, |n| n.is_alphanumeric());
            before && after
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Plain-text excerpt of at most `budget` characters plus an ellipsis
///
/// The ellipsis is appended only when the text was cut.
pub fn derive_excerpt(text: &str, budget: usize) -> String {
    let plain = collapse_whitespace(&strip_markdown(text));
    if plain.chars().count() <= budget {
        return plain;
    }
    format!("{}{}", truncate_chars(&plain, budget).trim_end(), ELLIPSIS)
}

/// Union of `existing` and `markers`, keeping the first occurrence of each tag
pub fn merge_tags(existing: &[String], markers: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    existing
        .iter()
        .chain(markers.iter())
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}
