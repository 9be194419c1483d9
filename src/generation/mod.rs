// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article rewriting through an OpenAI-compatible text generation API

pub mod client;
pub mod config;
pub mod prompt;
pub mod rewriter;

pub use client::{ChatCompletionsClient, GenerationError, GenerationRequest, TextGenerator};
pub use config::GenerationConfig;
pub use prompt::{build_user_prompt, SYSTEM_PROMPT};
pub use rewriter::ArticleRewriter;
