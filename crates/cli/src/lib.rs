// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rexbench: a regex matching micro-benchmark harness.
//!
//! Loads a corpus, optionally rendezvous with an external coordinator
//! through marker files, and runs an ordered list of patterns with
//! find-all semantics, printing every match.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod handshake;
pub mod harness;
pub mod pattern;
pub mod report;
pub mod summary;

#[cfg(test)]
pub mod test_utils;
