// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::check::CheckPlan;
use crate::color::ColorMode;

/// Exit code when every check passed.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when a check failed (unreachable page, broken links).
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for configuration or usage errors.
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for internal errors (I/O, HTTP client setup).
pub const EXIT_INTERNAL: i32 = 3;

/// Website link, JavaScript and performance checker
#[derive(Parser)]
#[command(name = "sitecheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SITECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check the live site and local file: links, JavaScript, comparison
    Check(CheckArgs),
    /// Analyze the structure of a single page
    Analyze(AnalyzeArgs),
    /// Write a default sitecheck.toml
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Live site URL (overrides site.url)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Local HTML file (overrides site.local)
    #[arg(long, value_name = "PATH")]
    pub local: Option<PathBuf>,

    /// Skip the live site
    #[arg(long)]
    pub no_live: bool,

    /// Skip the local file
    #[arg(long)]
    pub no_local: bool,

    /// No network access: skip the live site and link probes
    #[arg(long)]
    pub offline: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Also write JSON, text and Markdown reports into this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// External links to probe per source
    #[arg(long, value_name = "N")]
    pub max_links: Option<usize>,

    /// Per-link timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Delay after each link probe in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Concurrent link probes
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Report broken links without failing
    #[arg(long)]
    pub allow_broken: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', env = "SITECHECK_VERBOSE")]
    pub verbose: bool,
}

impl CheckArgs {
    /// Apply command-line overrides on top of the configured plan.
    pub fn apply(&self, plan: &mut CheckPlan) {
        if let Some(url) = &self.url {
            plan.url = Some(url.clone());
        }
        if let Some(local) = &self.local {
            plan.local = Some(local.clone());
        }
        if self.no_live {
            plan.url = None;
        }
        if self.no_local {
            plan.local = None;
        }
        plan.offline |= self.offline;
        if let Some(n) = self.max_links {
            plan.max_links = n;
        }
        if let Some(secs) = self.timeout {
            plan.link_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = self.delay_ms {
            plan.delay = Duration::from_millis(ms);
        }
        if let Some(n) = self.concurrency {
            plan.concurrency = usize::from(n);
        }
    }
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Page URL (overrides site.url)
    #[arg(long, value_name = "URL", conflicts_with = "local")]
    pub url: Option<String>,

    /// Local HTML file to analyze instead of a URL
    #[arg(long, value_name = "PATH")]
    pub local: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', env = "SITECHECK_VERBOSE")]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
