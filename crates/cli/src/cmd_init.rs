// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rexbench init` command implementation.

use rexbench::cli::InitArgs;
use rexbench::config::defaults::{self, CONFIG_FILE};
use rexbench::error::ExitCode;

/// Run the `rexbench init` command.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join(CONFIG_FILE);

    if path.exists() && !args.force {
        eprintln!("{} already exists (use --force to overwrite)", CONFIG_FILE);
        return Ok(ExitCode::ConfigError);
    }

    std::fs::write(&path, defaults::template())?;
    println!("Created {}", CONFIG_FILE);
    Ok(ExitCode::Success)
}
