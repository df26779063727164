//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing rexbench CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the rexbench binary
pub fn rexbench_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rexbench"));
    cmd.env_remove("REXBENCH_CONFIG").env_remove("REXBENCH_LOG");
    cmd
}

/// Temporary benchmark directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty directory that is its own git root, so config discovery
    /// never escapes into the surrounding checkout.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// A directory with `data/test_corpus.txt` holding `corpus`.
    pub fn with_corpus(corpus: &str) -> Self {
        let project = Self::empty();
        project.file("data/test_corpus.txt", corpus);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Write rexbench.toml.
    pub fn config(&self, content: &str) {
        self.file("rexbench.toml", content);
    }

    /// Path of a file in the default marker directory.
    pub fn marker(&self, name: &str) -> PathBuf {
        self.dir.path().join("regex_engines").join(name)
    }

    /// Read a file relative to the project root.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }
}
