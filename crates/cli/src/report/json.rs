// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON lines match output.

use std::io::{self, Write};

use serde::Serialize;

use crate::pattern::{CompiledPattern, PatternMatch};

use super::MatchFormatter;

/// One JSON object per match, one match per line.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonMatch<'a> {
    pattern: usize,
    start: usize,
    end: usize,
    text: &'a str,
}

impl MatchFormatter for JsonFormatter {
    fn begin_pattern(&self, _out: &mut dyn Write, _pattern: &CompiledPattern) -> io::Result<()> {
        Ok(())
    }

    fn write_match(
        &self,
        out: &mut dyn Write,
        pattern: &CompiledPattern,
        m: &PatternMatch<'_>,
    ) -> io::Result<()> {
        let record =
            JsonMatch { pattern: pattern.index(), start: m.start, end: m.end, text: m.text };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)
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
