//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Mode;

/// A regex matching micro-benchmark harness
#[derive(Parser)]
#[command(name = "rexbench")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "REXBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pattern list against the corpus
    Run(RunArgs),
    /// Write a default rexbench.toml
    Init(InitArgs),
}

#[derive(clap::Args, Default)]
pub struct RunArgs {
    /// Corpus file to search
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Pattern to match (repeatable; replaces configured patterns)
    #[arg(short, long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,

    /// Harness variant
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Directory holding the ready/start/done markers
    #[arg(long, value_name = "DIR")]
    pub marker_dir: Option<PathBuf>,

    /// Milliseconds between start-marker checks
    #[arg(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Seconds to wait for the start marker (0 waits forever)
    #[arg(long, value_name = "SECS", conflicts_with = "no_timeout")]
    pub timeout: Option<u64>,

    /// Wait for the start marker forever
    #[arg(long)]
    pub no_timeout: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Write a JSON run summary to this path
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
