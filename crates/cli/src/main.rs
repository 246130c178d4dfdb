// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sitecheck::Error;
use sitecheck::cli::{Cli, Command, EXIT_INTERNAL};

mod cmd_analyze;
mod cmd_check;
mod cmd_init;

/// Log filter variable; defaults to `warn`.
const LOG_ENV: &str = "SITECHECK_LOG";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Check(args) => cmd_check::run(&cli, args),
        Command::Analyze(args) => cmd_analyze::run(&cli, args),
        Command::Init(args) => cmd_init::run(args),
    };

    match result {
        Ok(code) => exit_code(code),
        Err(err) => {
            eprintln!("sitecheck: {:#}", err);
            let code = err
                .chain()
                .find_map(|e| e.downcast_ref::<Error>())
                .map_or(EXIT_INTERNAL, Error::exit_code);
            exit_code(code)
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

/// Log events go to stderr so stdout stays a clean report.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
