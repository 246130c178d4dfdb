// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::Write;

use anyhow::Context;

use sitecheck::check::{self, CheckPlan};
use sitecheck::cli::{CheckArgs, Cli, EXIT_FAILURE, EXIT_SUCCESS, OutputFormat};
use sitecheck::color;
use sitecheck::config::{self, Config};
use sitecheck::discovery;
use sitecheck::output::ReportFiles;
use sitecheck::probe::{self, HttpProbe};
use sitecheck::report;
use sitecheck::verbose::VerboseLogger;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(args.verbose);

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = match &config_path {
        Some(path) => config::load_with_warnings(path)?,
        None => Config::default(),
    };
    verbose.section("Configuration");
    match &config_path {
        Some(path) => verbose.log(&format!("Config: {}", path.display())),
        None => verbose.log("Config: (defaults)"),
    }

    let mut plan = CheckPlan::from_config(&config);
    args.apply(&mut plan);
    if let Some(url) = &plan.url {
        probe::parse_url(url)?;
    }
    verbose.log(&format!(
        "Max links: {}, concurrency: {}, delay: {}ms",
        plan.max_links,
        plan.concurrency,
        plan.delay.as_millis()
    ));

    let probe = HttpProbe::new(&config.http.user_agent)?;
    let report = check::run(&plan, &probe, &verbose)?;

    let formatted = report::formatter(args.output).format_check(&report)?;
    let choice = color::choice_for(args.color, args.no_color);
    match args.output {
        OutputFormat::Text => color::write_report(&formatted, choice)?,
        OutputFormat::Json => writeln!(std::io::stdout().lock(), "{}", formatted)?,
        OutputFormat::Markdown => write!(std::io::stdout().lock(), "{}", formatted)?,
    }

    let out_dir = args.out_dir.clone().or_else(|| config.report.out_dir.clone());
    if let Some(dir) = out_dir {
        let files = ReportFiles::new(&cwd.join(dir), &config.report.basename);
        files.save(&report).context("failed to save reports")?;
        eprintln!("Reports saved:");
        for path in files.paths() {
            eprintln!("  {}", path.display());
        }
    }

    let allow_broken = args.allow_broken || config.check.allow_broken;
    let failures = report.failures(allow_broken);
    if failures.is_empty() {
        let message = format!(
            "{}/{} external links working",
            report.summary.working, report.summary.tested
        );
        color::status(choice, true, &message)?;
        Ok(EXIT_SUCCESS)
    } else {
        color::status(choice, false, &failures.join("; "))?;
        Ok(EXIT_FAILURE)
    }
}
