// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match output formatting.
//!
//! Matches are written as soon as they are found; formatters never buffer
//! or collect them.

mod json;
mod text;

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::config::Mode;
use crate::pattern::{CompiledPattern, PatternMatch};

pub use json::JsonFormatter;
pub use text::{HandshakeTextFormatter, InlineTextFormatter};

/// Trait for writing match events in a particular output format.
pub trait MatchFormatter {
    /// Called before the first match of a pattern is searched for.
    fn begin_pattern(&self, out: &mut dyn Write, pattern: &CompiledPattern) -> io::Result<()>;

    /// Called once per match, in discovery order.
    fn write_match(
        &self,
        out: &mut dyn Write,
        pattern: &CompiledPattern,
        m: &PatternMatch<'_>,
    ) -> io::Result<()>;

    /// Called after a pattern's matches are exhausted.
    fn end_pattern(
        &self,
        out: &mut dyn Write,
        pattern: &CompiledPattern,
        count: usize,
    ) -> io::Result<()>;
}

/// Select the formatter for a mode and output format.
pub fn formatter_for(mode: Mode, format: OutputFormat) -> Box<dyn MatchFormatter> {
    match (format, mode) {
        (OutputFormat::Text, Mode::Handshake) => Box::new(HandshakeTextFormatter),
        (OutputFormat::Text, Mode::Inline) => Box::new(InlineTextFormatter),
        (OutputFormat::Json, _) => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
