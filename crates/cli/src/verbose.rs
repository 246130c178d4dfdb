// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose progress output.
//!
//! `-v` (or `SITECHECK_VERBOSE=1`) narrates a run on stderr: one section
//! per source, a line per probed link, and the JavaScript inventory.

use std::io::Write;
use std::sync::Mutex;

use crate::runner::LinkResult;

type Sink = Mutex<Box<dyn Write + Send>>;

/// Progress narration for `check` and `analyze`.
///
/// Disabled loggers hold no sink, so every call is a no-op.
pub struct VerboseLogger {
    sink: Option<Sink>,
}

impl VerboseLogger {
    /// Logger writing to stderr when `enabled`.
    pub fn new(enabled: bool) -> Self {
        let sink = enabled.then(|| Mutex::new(Box::new(std::io::stderr()) as Box<dyn Write + Send>));
        Self { sink }
    }

    /// Logger writing to an arbitrary sink.
    pub fn to_writer(writer: impl Write + Send + 'static) -> Self {
        Self { sink: Some(Mutex::new(Box::new(writer))) }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Start a section, e.g. `Live website: https://mybird.app`.
    pub fn section(&self, title: &str) {
        self.emit(format_args!("\n{}:", title));
    }

    /// A line under the current section.
    pub fn log(&self, msg: &str) {
        self.emit(format_args!("  {}", msg));
    }

    /// Progress for the `index`-th (0-based) of `total` probed links.
    pub fn link(&self, index: usize, total: usize, link: &LinkResult) {
        if !self.is_enabled() {
            return;
        }
        let status = if link.result.accessible() {
            format!("working (status {})", link.result.status_code.unwrap_or_default())
        } else {
            format!("broken: {}", link.result.error_text())
        };
        let cached = if link.cached { " (cached)" } else { "" };
        self.log(&format!("[{}/{}] {} {}{}", index + 1, total, link.url, status, cached));
    }

    fn emit(&self, line: std::fmt::Arguments<'_>) {
        let Some(sink) = &self.sink else { return };
        // Write failures drop the line.
        if let Ok(mut out) = sink.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
