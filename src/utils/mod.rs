// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod text;

pub use text::{collapse_whitespace, normalize_whitespace, truncate_chars};
