// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color support.
//!
//! Text reports are colored line by line from their status markers.

use std::io::{IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// `--color` flag values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice from explicit overrides.
///
/// `no_color` always wins over `force_color`.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Resolve the color choice for stdout from the CLI flags and environment.
pub fn choice_for(mode: ColorMode, no_color_flag: bool) -> ColorChoice {
    let no_color = no_color_flag
        || mode == ColorMode::Never
        || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    match resolve_color(mode == ColorMode::Always, no_color) {
        ColorChoice::Auto if !std::io::stdout().is_terminal() => ColorChoice::Never,
        choice => choice,
    }
}

/// Color scheme for report output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    pub fn heading() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    pub fn note() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

/// Pick a color for one report line from its marker.
pub fn line_spec(line: &str) -> Option<ColorSpec> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('✅') {
        Some(scheme::pass())
    } else if trimmed.starts_with('❌') {
        Some(scheme::fail())
    } else if trimmed.starts_with('⚠') {
        Some(scheme::warn())
    } else if trimmed.starts_with('💡') {
        Some(scheme::note())
    } else if is_heading(trimmed) {
        Some(scheme::heading())
    } else {
        None
    }
}

/// All-caps section titles such as `EXTERNAL LINK TESTING`.
fn is_heading(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_uppercase())
        && line.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || " ().:/".contains(c))
}

/// Write a text report to stdout, coloring lines by marker.
pub fn write_report(text: &str, choice: ColorChoice) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    for line in text.lines() {
        match line_spec(line) {
            Some(spec) => {
                stdout.set_color(&spec)?;
                write!(stdout, "{}", line)?;
                stdout.reset()?;
                writeln!(stdout)?;
            }
            None => writeln!(stdout, "{}", line)?,
        }
    }
    stdout.flush()
}

/// Write a one-line colored status to stderr.
pub fn status(choice: ColorChoice, ok: bool, message: &str) -> std::io::Result<()> {
    let mut stderr = StandardStream::stderr(choice);
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(if ok { Color::Green } else { Color::Red })).set_bold(true);
    stderr.set_color(&spec)?;
    write!(stderr, "{}", if ok { "PASS" } else { "FAIL" })?;
    stderr.reset()?;
    writeln!(stderr, ": {}", message)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
