// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled patterns and the match cursor.

use regex::Regex;
use thiserror::Error;

/// A pattern that failed to compile.
#[derive(Debug, Error)]
#[error("invalid pattern {index} `{pattern}`")]
pub struct PatternError {
    /// Position of the pattern in the list.
    pub index: usize,
    /// The pattern source as given.
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// A single compiled pattern and its position in the list.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    index: usize,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile `pattern` as a case-sensitive regex.
    pub fn new(index: usize, pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError {
            index,
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { index, regex })
    }

    /// Position of this pattern in its list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Start a fresh cursor over `haystack`.
    pub fn find_all<'r, 'h>(&'r self, haystack: &'h str) -> Matches<'r, 'h> {
        Matches { regex: &self.regex, haystack, pos: 0 }
    }
}

/// Ordered, immutable list of compiled patterns.
///
/// List order is both the iteration order and the index reported with
/// each match.
#[derive(Debug, Clone, Default)]
pub struct PatternList {
    patterns: Vec<CompiledPattern>,
}

impl PatternList {
    /// Compile every source, failing on the first malformed one.
    pub fn compile<I, S>(sources: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| CompiledPattern::new(index, source.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternList {
    type Item = &'a CompiledPattern;
    type IntoIter = std::slice::Iter<'a, CompiledPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single match found by a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'h> {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The matched text.
    pub text: &'h str,
}

/// Cursor yielding successive non-overlapping matches, left to right.
///
/// Each search resumes at the end of the previous match. After an empty
/// match the cursor steps over one character so the scan always terminates.
pub struct Matches<'r, 'h> {
    regex: &'r Regex,
    haystack: &'h str,
    pos: usize,
}

impl<'h> Iterator for Matches<'_, 'h> {
    type Item = PatternMatch<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.haystack.len() {
            return None;
        }

        let Some(m) = self.regex.find_at(self.haystack, self.pos) else {
            self.pos = self.haystack.len() + 1;
            return None;
        };

        self.pos = if m.is_empty() {
            m.end() + next_char_len(self.haystack, m.end())
        } else {
            m.end()
        };

        Some(PatternMatch { start: m.start(), end: m.end(), text: m.as_str() })
    }
}

/// Byte length of the character at `at`, or 1 at end of input.
fn next_char_len(haystack: &str, at: usize) -> usize {
    haystack[at..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
