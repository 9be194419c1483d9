// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Progress log for a pipeline run

use std::sync::Mutex;
use tracing::{error, info, warn};

/// Sink for the orchestrator's run log
pub trait RunLogger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Numbered pipeline step, e.g. `step(2, "Searching...")`
    fn step(&self, number: u8, message: &str);
}

/// Forwards the run log to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl RunLogger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pipeline", "{}", message);
    }

    fn warn(&self, message: &str) {
        warn!(target: "pipeline", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "pipeline", "{}", message);
    }

    fn step(&self, number: u8, message: &str) {
        info!(target: "pipeline", step = number, "[STEP {}] {}", number, message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Step(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}

/// Captures the run log in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<LogLine>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// True if any captured line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.message.contains(needle))
    }

    /// Messages logged at `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.level == level)
            .map(|l| l.message)
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(LogLine {
                level,
                message: message.to_string(),
            });
        }
    }
}

impl RunLogger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }

    fn step(&self, number: u8, message: &str) {
        self.push(LogLevel::Step(number), message);
    }
}
