// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The matcher harness.
//!
//! Runs an ordered pattern list against a corpus, optionally gated by the
//! marker-file handshake:
//!
//! ```text
//! Start → CorpusLoaded → ReadySignaled → StartObserved → Matching → Matched → DoneSignaled → Terminated
//! ```
//!
//! Without a handshake the run collapses to
//! `Start → CorpusLoaded → Matching → Matched → Terminated`.
//!
//! Matching only begins once the start marker has been observed, and the
//! run can only finish from `Matched`, i.e. after every pattern has been
//! written and flushed.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::Corpus;
use crate::handshake::{Handshake, HandshakeError, Signal};
use crate::pattern::PatternList;
use crate::report::MatchFormatter;

/// Errors raised during a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Handshake(#[from] HandshakeError),

    #[error("failed to write match output")]
    Output(#[source] io::Error),

    #[error("harness is {actual:?}, expected {expected:?}")]
    Phase { expected: Phase, actual: Phase },
}

/// Harness lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    CorpusLoaded,
    ReadySignaled,
    StartObserved,
    Matching,
    Matched,
    DoneSignaled,
    Terminated,
}

/// Match count for one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSummary {
    pub index: usize,
    pub pattern: String,
    pub matches: usize,
}

/// Outcome of the matching phase.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub patterns: Vec<PatternSummary>,
    /// Wall time spent matching and writing output.
    pub elapsed: Duration,
    /// Time spent waiting for the start marker, if there was a handshake.
    pub start_wait: Option<Duration>,
}

impl RunSummary {
    pub fn total_matches(&self) -> usize {
        self.patterns.iter().map(|p| p.matches).sum()
    }
}

/// One harness run over a loaded corpus.
pub struct Harness<'a> {
    corpus: &'a Corpus,
    patterns: &'a PatternList,
    handshake: Option<Handshake>,
    signal: Option<Signal>,
    phase: Phase,
}

impl<'a> Harness<'a> {
    /// Create a harness over an already-loaded corpus.
    pub fn new(corpus: &'a Corpus, patterns: &'a PatternList) -> Self {
        let mut phase = Phase::Start;
        transition(&mut phase, Phase::CorpusLoaded);
        Self { corpus, patterns, handshake: None, signal: None, phase }
    }

    /// Gate matching on the marker-file handshake.
    pub fn with_handshake(mut self, handshake: Handshake) -> Self {
        self.handshake = Some(handshake);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Signal ready and block until the start marker appears.
    ///
    /// Does nothing without a handshake, or if already prepared.
    pub fn prepare(&mut self) -> Result<(), HarnessError> {
        if self.phase != Phase::CorpusLoaded {
            return Ok(());
        }
        let Some(handshake) = &self.handshake else {
            return Ok(());
        };

        handshake.signal_ready()?;
        transition(&mut self.phase, Phase::ReadySignaled);

        let signal = handshake.await_start()?;
        self.signal = Some(signal);
        transition(&mut self.phase, Phase::StartObserved);
        Ok(())
    }

    /// Run every pattern over the corpus, writing each match as it is found.
    ///
    /// Prepares the handshake first if that has not happened yet, so no
    /// output is produced before the start marker is observed.
    pub fn run_matches(
        &mut self,
        out: &mut dyn Write,
        formatter: &dyn MatchFormatter,
    ) -> Result<RunSummary, HarnessError> {
        self.prepare()?;
        match self.phase {
            Phase::CorpusLoaded if self.handshake.is_none() => {}
            Phase::StartObserved | Phase::Matched => {}
            actual => return Err(HarnessError::Phase { expected: Phase::StartObserved, actual }),
        }
        transition(&mut self.phase, Phase::Matching);

        let text = self.corpus.text();
        let started = Instant::now();
        let mut summaries = Vec::with_capacity(self.patterns.len());

        for pattern in self.patterns {
            formatter.begin_pattern(out, pattern).map_err(HarnessError::Output)?;

            let mut count = 0;
            for m in pattern.find_all(text) {
                formatter.write_match(out, pattern, &m).map_err(HarnessError::Output)?;
                count += 1;
            }

            formatter.end_pattern(out, pattern, count).map_err(HarnessError::Output)?;
            tracing::debug!(
                "pattern {} `{}`: {} matches",
                pattern.index(),
                pattern.as_str(),
                count
            );

            summaries.push(PatternSummary {
                index: pattern.index(),
                pattern: pattern.as_str().to_string(),
                matches: count,
            });
        }

        out.flush().map_err(HarnessError::Output)?;
        let elapsed = started.elapsed();
        transition(&mut self.phase, Phase::Matched);

        let summary = RunSummary {
            patterns: summaries,
            elapsed,
            start_wait: self.signal.as_ref().map(|s| s.waited),
        };
        tracing::info!(
            "matched {} patterns, {} matches in {:?}",
            summary.patterns.len(),
            summary.total_matches(),
            elapsed
        );
        Ok(summary)
    }

    /// Signal completion and terminate the run.
    ///
    /// Fails without touching the done marker unless the last
    /// [`run_matches`](Self::run_matches) completed.
    pub fn finish(&mut self) -> Result<(), HarnessError> {
        if self.phase != Phase::Matched {
            return Err(HarnessError::Phase { expected: Phase::Matched, actual: self.phase });
        }
        if let Some(handshake) = &self.handshake {
            handshake.signal_done()?;
            transition(&mut self.phase, Phase::DoneSignaled);
        }
        transition(&mut self.phase, Phase::Terminated);
        Ok(())
    }

    /// Prepare, match, and finish in one go.
    pub fn run(
        mut self,
        out: &mut dyn Write,
        formatter: &dyn MatchFormatter,
    ) -> Result<RunSummary, HarnessError> {
        let summary = self.run_matches(out, formatter)?;
        self.finish()?;
        Ok(summary)
    }
}

fn transition(phase: &mut Phase, next: Phase) {
    tracing::debug!("harness: {:?} -> {:?}", phase, next);
    *phase = next;
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
