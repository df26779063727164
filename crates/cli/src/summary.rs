// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run summary file.
//!
//! Written after matching and before the done marker, so a coordinator
//! that sees `done` can read the summary immediately.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::corpus::Corpus;
use crate::harness::{PatternSummary, RunSummary};

/// Persisted summary of one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryFile {
    /// When the summary was written (ISO 8601).
    pub updated: DateTime<Utc>,

    /// Corpus file, absent for in-memory corpora.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,

    pub corpus_bytes: usize,

    pub mode: Mode,

    /// Matching wall time in microseconds.
    pub elapsed_us: u64,

    /// Start-marker wait in microseconds (handshake mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_wait_us: Option<u64>,

    pub total_matches: usize,

    pub patterns: Vec<PatternSummary>,
}

impl SummaryFile {
    pub fn new(run: &RunSummary, corpus: &Corpus, mode: Mode) -> Self {
        Self {
            updated: Utc::now(),
            corpus: corpus.path().map(Path::to_path_buf),
            corpus_bytes: corpus.len(),
            mode,
            elapsed_us: micros(run.elapsed),
            start_wait_us: run.start_wait.map(micros),
            total_matches: run.total_matches(),
            patterns: run.patterns.clone(),
        }
    }

    /// Save summary to file, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load summary from file, returning None if not found.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }
}

fn micros(d: std::time::Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
