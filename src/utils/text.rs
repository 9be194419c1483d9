// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Character-safe text helpers shared by extraction and publishing

/// Collapse every whitespace run (newlines included) to a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace within lines and runs of newlines between them
///
/// Each line has its whitespace runs reduced to single spaces; empty lines
/// are dropped so consecutive newlines become one. The result is trimmed.
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep at most `max_chars` characters, never splitting a code point
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
