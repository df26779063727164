// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format match output.

use std::io::{self, Write};

use crate::pattern::{CompiledPattern, PatternMatch};

use super::MatchFormatter;

/// Handshake-mode text: a banner per pattern, bare match lines, and a
/// blank separator.
///
/// ```text
/// Pattern 0: hello
/// Match: hello
///
/// ```
pub struct HandshakeTextFormatter;

impl MatchFormatter for HandshakeTextFormatter {
    fn begin_pattern(&self, out: &mut dyn Write, pattern: &CompiledPattern) -> io::Result<()> {
        writeln!(out, "Pattern {}: {}", pattern.index(), pattern.as_str())
    }

    fn write_match(
        &self,
        out: &mut dyn Write,
        _pattern: &CompiledPattern,
        m: &PatternMatch<'_>,
    ) -> io::Result<()> {
        writeln!(out, "Match: {}", m.text)
    }

    fn end_pattern(
        &self,
        out: &mut dyn Write,
        _pattern: &CompiledPattern,
        _count: usize,
    ) -> io::Result<()> {
        writeln!(out)
    }
}

/// Inline-mode text: one `Match <index>: <text>` line per match.
pub struct InlineTextFormatter;

impl MatchFormatter for InlineTextFormatter {
    fn begin_pattern(&self, _out: &mut dyn Write, _pattern: &CompiledPattern) -> io::Result<()> {
        Ok(())
    }

    fn write_match(
        &self,
        out: &mut dyn Write,
        pattern: &CompiledPattern,
        m: &PatternMatch<'_>,
    ) -> io::Result<()> {
        writeln!(out, "Match {}: {}", pattern.index(), m.text)
    }

    fn end_pattern(
        &self,
        _out: &mut dyn Write,
        _pattern: &CompiledPattern,
        _count: usize,
    ) -> io::Result<()> {
        Ok(())
    }
}
