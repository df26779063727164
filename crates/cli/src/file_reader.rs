// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-based corpus file reading.
//!
//! - Below [`MMAP_THRESHOLD`]: direct read into a buffer
//! - At or above: memory-mapped I/O
//!
//! Benchmark corpora are routinely tens of megabytes, so mapping avoids
//! a second copy of the whole file on the heap.

// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We never mutate the mapped memory
// 3. The corpus file is not expected to change during a run
#![allow(unsafe_code)]

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped (64 KiB).
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Raw bytes of a file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();

        if size < MMAP_THRESHOLD {
            Ok(FileContent::Owned(fs::read(path)?))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened) and we never mutate the mapping.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(mmap))
        }
    }

    /// Whether the content is memory-mapped.
    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Owned(bytes) => bytes,
            FileContent::Mapped(mmap) => mmap,
        }
    }

    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
