// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! In-memory record of one pipeline run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::articles::ArticleId;

/// Position of an article in the enrichment sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Fetched,
    Searched,
    Extracted,
    Generated,
    Cited,
    Published,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetched => "fetched",
            Stage::Searched => "searched",
            Stage::Extracted => "extracted",
            Stage::Generated => "generated",
            Stage::Cited => "cited",
            Stage::Published => "published",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArticleOutcome {
    Published,
    /// `stage` is the stage that could not be completed
    Failed { stage: Stage, reason: String },
}

/// What happened to one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleReport {
    pub article_id: ArticleId,
    pub title: String,
    /// Last stage completed
    pub stage: Stage,
    pub outcome: ArticleOutcome,
    pub competitors_found: usize,
    pub competitors_extracted: usize,
    pub citations_added: usize,
    pub original_chars: usize,
    pub final_chars: usize,
}

impl ArticleReport {
    pub fn new(article_id: ArticleId, title: &str, original_chars: usize) -> Self {
        Self {
            article_id,
            title: title.to_string(),
            stage: Stage::Fetched,
            outcome: ArticleOutcome::Failed {
                stage: Stage::Searched,
                reason: "not processed".to_string(),
            },
            competitors_found: 0,
            competitors_extracted: 0,
            citations_added: 0,
            original_chars,
            final_chars: 0,
        }
    }

    pub fn is_published(&self) -> bool {
        self.outcome == ArticleOutcome::Published
    }

    /// Stage at which the article failed, if it did
    pub fn failed_stage(&self) -> Option<Stage> {
        match &self.outcome {
            ArticleOutcome::Failed { stage, .. } => Some(*stage),
            ArticleOutcome::Published => None,
        }
    }
}

/// Reports for every article attempted in one invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub reports: Vec<ArticleReport>,
}

impl PipelineRun {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            reports: Vec::new(),
        }
    }

    pub fn record(&mut self, report: ArticleReport) {
        self.reports.push(report);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn published_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_published()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.reports.len() - self.published_count()
    }

    pub fn report_for(&self, id: ArticleId) -> Option<&ArticleReport> {
        self.reports.iter().find(|r| r.article_id == id)
    }
}
