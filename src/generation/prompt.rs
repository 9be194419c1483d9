// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::articles::Article;
use crate::content::ExtractedDocument;
use crate::utils::truncate_chars;

pub const SYSTEM_PROMPT: &str = "You are an expert SEO content writer.";

/// Characters of the original body included in the prompt
const ORIGINAL_EXCERPT_CHARS: usize = 3000;
/// Characters of each competitor body included in the prompt
const COMPETITOR_EXCERPT_CHARS: usize = 1500;

/// Build the user prompt for one article rewrite
///
/// Competitor documents are listed in the order given; with none, the
/// prompt asks for a rewrite from the original alone.
pub fn build_user_prompt(article: &Article, competitors: &[ExtractedDocument]) -> String {
    let mut prompt = format!(
        "Write a detailed, SEO-optimized article on:\n\"{}\"\n",
        article.title
    );

    if let Some(content) = article.content.as_deref().filter(|c| !c.trim().is_empty()) {
        prompt.push_str("\nOriginal article:\n");
        prompt.push_str(&truncate_chars(content.trim(), ORIGINAL_EXCERPT_CHARS));
        prompt.push('\n');
    }

    if !competitors.is_empty() {
        prompt.push_str("\nTop-ranking competitor articles on the same topic:\n");
        for (i, doc) in competitors.iter().enumerate() {
            prompt.push_str(&format!(
                "\n[{}] {} ({})\n{}\n",
                i + 1,
                doc.title,
                doc.url,
                truncate_chars(&doc.content, COMPETITOR_EXCERPT_CHARS)
            ));
        }
        prompt.push_str(
            "\nUse the competitor articles for coverage and structure only. Do not copy their wording.\n",
        );
    }

    prompt.push_str(
        "\nFormat the result in Markdown with a clear heading structure, short paragraphs and a conclusion. Return only the article.",
    );
    prompt
}
