// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report files.
//!
//! `--out-dir` (or `report.out_dir`) receives one file per format:
//! `<basename>.json`, `<basename>.txt` and `<basename>.md`.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::check::CheckReport;
use crate::report::{JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter};

/// Paths of the written report files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub json: PathBuf,
    pub text: PathBuf,
    pub markdown: PathBuf,
}

impl ReportFiles {
    pub fn new(dir: &Path, basename: &str) -> Self {
        Self {
            json: dir.join(format!("{}.json", basename)),
            text: dir.join(format!("{}.txt", basename)),
            markdown: dir.join(format!("{}.md", basename)),
        }
    }

    pub fn paths(&self) -> [&Path; 3] {
        [&self.json, &self.text, &self.markdown]
    }

    /// Write all three reports, creating the directory if needed.
    pub fn save(&self, report: &CheckReport) -> anyhow::Result<()> {
        if let Some(parent) = self.json.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        write(&self.json, &JsonFormatter.format_check(report)?)?;
        write(&self.text, &TextFormatter.format_check(report)?)?;
        write(&self.markdown, &MarkdownFormatter.format_check(report)?)?;
        tracing::info!(json = %self.json.display(), "reports saved");
        Ok(())
    }
}

fn write(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
