// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rexbench::cli::{Cli, Command};
use rexbench::error::ExitCode;

mod cmd_init;
mod cmd_run;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "REXBENCH_LOG";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Some(Command::Run(args)) => cmd_run::run(&cli, args),
        Some(Command::Init(args)) => cmd_init::run(args),
        None => cmd_run::run(&cli, &Default::default()),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::for_error(&e).into()
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
