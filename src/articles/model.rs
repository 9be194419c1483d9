// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article entity as served by the article API

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Primary key of an article row
pub type ArticleId = i64;

/// A stored article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "publishDate")]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl Article {
    /// Create an article with only id and title set
    pub fn new(id: ArticleId, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            url: None,
            author: None,
            publish_date: None,
            excerpt: None,
            tags: Vec::new(),
            content: None,
            image_url: None,
        }
    }

    /// Length of the current body in characters
    pub fn content_chars(&self) -> usize {
        self.content.as_deref().map_or(0, |c| c.chars().count())
    }
}

/// Body of `PUT /articles/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct ArticleUpdate<'a> {
    pub title: &'a str,
    pub url: Option<&'a str>,
    pub author: Option<&'a str>,
    pub content: Option<&'a str>,
    pub publish_date: Option<&'a str>,
    pub excerpt: Option<&'a str>,
    pub tags: &'a [String],
    pub image_url: Option<&'a str>,
}

impl<'a> From<&'a Article> for ArticleUpdate<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            title: &article.title,
            url: article.url.as_deref(),
            author: article.author.as_deref(),
            content: article.content.as_deref(),
            publish_date: article.publish_date.as_deref(),
            excerpt: article.excerpt.as_deref(),
            tags: &article.tags,
            image_url: article.image_url.as_deref(),
        }
    }
}

/// Ids come back as numbers from reads and as path strings from updates
fn deserialize_id<'de, D>(deserializer: D) -> Result<ArticleId, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("article id out of range: {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("article id is not numeric: {:?}", s))),
        other => Err(de::Error::custom(format!(
            "article id must be a number or numeric string, got {}",
            other
        ))),
    }
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(tags_from_value).unwrap_or_default())
}

/// Decode tags in whatever shape the API stored them
///
/// Accepts a JSON array, a JSON-encoded array inside a string, a
/// comma-separated string, a single bare string, or null.
pub fn tags_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().filter_map(tag_from_item).collect(),
        Value::String(s) => tags_from_str(&s),
        other => vec![other.to_string()],
    }
}

fn tag_from_item(item: Value) -> Option<String> {
    match item {
        Value::Null => None,
        Value::String(s) => {
            let tag = s.trim();
            (!tag.is_empty()).then(|| tag.to_string())
        }
        other => Some(other.to_string()),
    }
}

fn tags_from_str(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(parsed @ (Value::Array(_) | Value::Null)) => tags_from_value(parsed),
        Ok(Value::String(inner)) => tag_from_item(Value::String(inner)).into_iter().collect(),
        Ok(_) => vec![raw.to_string()],
        Err(_) if raw.contains(',') => raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => vec![raw.to_string()],
    }
}
