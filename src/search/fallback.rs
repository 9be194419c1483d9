// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Preset competitor results used when every provider comes back empty

use super::types::SearchResult;

/// Category used when no table key occurs in the title
pub const DEFAULT_CATEGORY: &str = "chatbot";

const SOURCE: &str = "manual";

type Entry = (&'static str, &'static str, &'static str);

/// Category table, matched in order by substring of the lower-cased title
const CATEGORIES: &[(&str, &[Entry])] = &[
    (
        "sales chatbot",
        &[
            (
                "How Chatbots Boost Sales Conversions",
                "https://beyondchats.com/blogs/boost-conversion-rate-using-chatbots/",
                "AI chatbots guide prospects through the sales funnel",
            ),
            (
                "Sales Chatbot Best Practices",
                "https://www.tidio.com/blog/sales-chatbot/",
                "Implementing chatbots in your sales process",
            ),
        ],
    ),
    (
        "customer service",
        &[
            (
                "Customer Service Solutions",
                "https://beyondchats.com/blogs/common-customer-service-issues/",
                "Essential skills for customer service teams",
            ),
            (
                "Customer Support Best Practices",
                "https://www.zendesk.com/blog/customer-service/",
                "How to provide excellent customer support",
            ),
        ],
    ),
    (
        "ecommerce",
        &[
            (
                "E-commerce Chatbot Benefits",
                "https://beyondchats.com/blogs/boost-conversion-rate-using-chatbots/",
                "Boost your online store conversions",
            ),
            (
                "E-commerce Conversion Strategies",
                "https://www.shopify.com/blog/ecommerce-conversion-optimization",
                "Latest trends in e-commerce",
            ),
        ],
    ),
    (
        DEFAULT_CATEGORY,
        &[
            (
                "Chatbot vs Live Chat Comparison",
                "https://www.zoho.com/blog/salesiq/chatbot-vs-live-chat.html",
                "Comparing chatbots and live chat solutions",
            ),
            (
                "AI Chatbot Implementation",
                "https://hiverhq.com/blog/chatbot-vs-live-chat-what-to-choose",
                "How to implement chatbots effectively",
            ),
        ],
    ),
];

/// Preset results for `title`, at most `max_results` of them
pub fn manual_results(title: &str, max_results: usize) -> Vec<SearchResult> {
    let lower = title.to_lowercase();
    let entries = CATEGORIES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .or_else(|| CATEGORIES.iter().find(|(key, _)| *key == DEFAULT_CATEGORY))
        .map(|(_, entries)| *entries)
        .unwrap_or(&[]);

    entries
        .iter()
        .take(max_results)
        .map(|(title, url, snippet)| SearchResult::new(title, url, snippet, SOURCE))
        .collect()
}
