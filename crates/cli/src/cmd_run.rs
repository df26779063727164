// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rexbench run` command implementation.
//!
//! Loads the corpus and patterns, then drives the harness through its
//! handshake (if any), matching, optional summary, and done marker.

use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::Context;

use rexbench::cli::{Cli, RunArgs};
use rexbench::config::{self, Config, Mode};
use rexbench::corpus::Corpus;
use rexbench::discovery;
use rexbench::error::ExitCode;
use rexbench::harness::Harness;
use rexbench::pattern::PatternList;
use rexbench::report;
use rexbench::summary::SummaryFile;

/// Run the `rexbench run` command.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Load config
    let config_path = cli.config.clone().or_else(|| discovery::find_config(&cwd));
    let mut config = match &config_path {
        Some(path) => config::load_with_warnings(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, args, &cwd);

    let corpus = Corpus::load(&config.corpus_path())?;
    // Compile before signalling ready so a bad pattern never reaches the coordinator.
    let patterns = PatternList::compile(&config.patterns)?;
    tracing::debug!("{} patterns in {:?} mode", patterns.len(), config.mode);

    let mut harness = Harness::new(&corpus, &patterns);
    if config.mode == Mode::Handshake {
        harness = harness.with_handshake(config.build_handshake());
    }

    let formatter = report::formatter_for(config.mode, args.output);
    let mut out = BufWriter::new(io::stdout().lock());
    let summary = harness.run_matches(&mut out, formatter.as_ref())?;

    if let Some(path) = &args.summary {
        SummaryFile::new(&summary, &corpus, config.mode)
            .save(path)
            .with_context(|| format!("failed to write summary {}", path.display()))?;
    }

    harness.finish()?;
    Ok(ExitCode::Success)
}

/// Apply CLI flags on top of the loaded config.
///
/// CLI paths are relative to the working directory, not the config file.
fn apply_overrides(config: &mut Config, args: &RunArgs, cwd: &Path) {
    if let Some(corpus) = &args.corpus {
        config.corpus = cwd.join(corpus);
    }
    if !args.patterns.is_empty() {
        config.patterns = args.patterns.clone();
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(dir) = &args.marker_dir {
        config.handshake.dir = cwd.join(dir);
    }
    if let Some(ms) = args.poll_interval {
        config.handshake.poll_interval_ms = ms;
    }
    if let Some(secs) = args.timeout {
        config.handshake.timeout_secs = secs;
    }
    if args.no_timeout {
        config.handshake.timeout_secs = 0;
    }
}
