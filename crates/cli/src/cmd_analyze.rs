// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analyze command implementation.

use std::io::Write;

use sitecheck::Error;
use sitecheck::analyze::{self, Target};
use sitecheck::cli::{AnalyzeArgs, Cli, EXIT_FAILURE, EXIT_SUCCESS, OutputFormat};
use sitecheck::color;
use sitecheck::config::{self, Config};
use sitecheck::discovery;
use sitecheck::probe::{self, HttpProbe};
use sitecheck::report;
use sitecheck::verbose::VerboseLogger;

/// Run the analyze command.
pub fn run(cli: &Cli, args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(args.verbose);

    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => config::load_with_warnings(&path)?,
        None => Config::default(),
    };

    let target = match (&args.local, &args.url, &config.site.url) {
        (Some(path), _, _) => Target::File(cwd.join(path)),
        (None, Some(url), _) | (None, None, Some(url)) => Target::Url(url.clone()),
        (None, None, None) => return Err(Error::NoSources.into()),
    };
    if let Target::Url(url) = &target {
        probe::parse_url(url)?;
    }

    let probe = HttpProbe::new(&config.http.user_agent)?;
    let analysis = analyze::analyze(&target, &probe, &config, &verbose);

    let formatted = report::formatter(args.output).format_analysis(&analysis)?;
    match args.output {
        OutputFormat::Text => {
            color::write_report(&formatted, color::choice_for(args.color, args.no_color))?
        }
        OutputFormat::Json => writeln!(std::io::stdout().lock(), "{}", formatted)?,
        OutputFormat::Markdown => write!(std::io::stdout().lock(), "{}", formatted)?,
    }

    Ok(if analysis.accessible() { EXIT_SUCCESS } else { EXIT_FAILURE })
}
