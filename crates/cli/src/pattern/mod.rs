// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and global (find-all) matching.
//!
//! Patterns are regex sources compiled with the `regex` crate. Matching
//! follows global-flag semantics: non-overlapping, left to right, and an
//! empty match moves the cursor forward by one character.

pub mod matcher;

pub use matcher::{CompiledPattern, Matches, PatternError, PatternList, PatternMatch};
