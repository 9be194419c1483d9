// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Outbound HTTP for search providers and competitor pages
//!
//! Everything that leaves the process for the public web goes through
//! [`HttpFetcher`]. The production implementation is [`ReqwestFetcher`];
//! tests substitute a fetcher that serves canned HTML per URL.

pub mod fetcher;
pub mod headers;

pub use fetcher::{FetchError, HttpFetcher, ReqwestFetcher};
pub use headers::{browser_headers, owned_headers, DEFAULT_USER_AGENT};
