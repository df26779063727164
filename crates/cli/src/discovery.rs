// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `rexbench.toml` for a run.
//!
//! The search covers `start_dir` and its ancestors, stopping at the first
//! directory that contains `.git` (inclusive). Only regular files count.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Nearest `rexbench.toml` at or above `start_dir`, bounded by the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("discovered config {}", candidate.display());
            return Some(candidate);
        }
        if is_git_root(dir) {
            tracing::debug!("no {} below git root {}", CONFIG_FILE, dir.display());
            break;
        }
    }
    None
}

fn is_git_root(dir: &Path) -> bool {
    // `.git` is a file in worktrees and submodules.
    dir.join(".git").exists()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
