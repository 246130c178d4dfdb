// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use anyhow::Context;

use sitecheck::cli::{EXIT_CONFIG, EXIT_SUCCESS, InitArgs};
use sitecheck::config::{DEFAULT_TEMPLATE, defaults::CONFIG_FILE};

/// Write a default config into the current directory.
pub fn run(args: &InitArgs) -> anyhow::Result<i32> {
    let path = std::env::current_dir()?.join(CONFIG_FILE);

    if path.exists() && !args.force {
        eprintln!("{} already exists (use --force to overwrite)", CONFIG_FILE);
        return Ok(EXIT_CONFIG);
    }

    std::fs::write(&path, DEFAULT_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", CONFIG_FILE);
    Ok(EXIT_SUCCESS)
}
