// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The text corpus searched by every pattern.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::file_reader::FileContent;

/// Errors raised while loading a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus {} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
}

/// Immutable corpus text, loaded once and held for the whole run.
pub struct Corpus {
    path: Option<PathBuf>,
    content: FileContent,
}

impl Corpus {
    /// Load the whole file at `path`, rejecting non-UTF-8 content.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = FileContent::read(path)
            .map_err(|source| CorpusError::Read { path: path.to_path_buf(), source })?;

        if content.as_str().is_none() {
            return Err(CorpusError::Encoding { path: path.to_path_buf() });
        }

        tracing::debug!(
            "loaded corpus {} ({} bytes, mapped: {})",
            path.display(),
            content.as_bytes().len(),
            content.is_mapped()
        );

        Ok(Self { path: Some(path.to_path_buf()), content })
    }

    /// Build an in-memory corpus that did not come from a file.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { path: None, content: FileContent::Owned(text.into().into_bytes()) }
    }

    /// Path the corpus was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Corpus text.
    ///
    /// Does not rescan the bytes; UTF-8 is checked once on construction.
    #[allow(unsafe_code)]
    pub fn text(&self) -> &str {
        // SAFETY: `load` rejects non-UTF-8 content and `from_text` starts from
        // a `String`; the content is never mutated afterwards.
        unsafe { std::str::from_utf8_unchecked(self.content.as_bytes()) }
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.content.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
