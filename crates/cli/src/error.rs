// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes and error classification.

use crate::config::ConfigError;
use crate::corpus::CorpusError;
use crate::handshake::HandshakeError;
use crate::harness::HarnessError;
use crate::pattern::PatternError;

/// Exit codes reported by the `rexbench` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Matching finished and all markers were written.
    Success = 0,
    /// Corpus, marker, output, or summary I/O failed.
    IoError = 1,
    /// Invalid configuration or malformed pattern.
    ConfigError = 2,
    /// The start marker never appeared within the timeout.
    Timeout = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl ExitCode {
    /// Classify an error chain into an exit code.
    ///
    /// Walks the chain and picks the first typed error it recognizes.
    /// Anything unrecognized is treated as an I/O failure.
    pub fn for_error(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(e) = cause.downcast_ref::<HarnessError>() {
                return Self::for_harness(e);
            }
            if let Some(e) = cause.downcast_ref::<HandshakeError>() {
                return Self::for_handshake(e);
            }
            if cause.downcast_ref::<PatternError>().is_some()
                || cause.downcast_ref::<ConfigError>().is_some()
            {
                return ExitCode::ConfigError;
            }
            if cause.downcast_ref::<CorpusError>().is_some() {
                return ExitCode::IoError;
            }
        }
        ExitCode::IoError
    }

    fn for_harness(err: &HarnessError) -> Self {
        match err {
            HarnessError::Handshake(e) => Self::for_handshake(e),
            HarnessError::Output(_) | HarnessError::Phase { .. } => ExitCode::IoError,
        }
    }

    fn for_handshake(err: &HandshakeError) -> Self {
        match err {
            HandshakeError::Timeout { .. } => ExitCode::Timeout,
            HandshakeError::Io { .. } => ExitCode::IoError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
