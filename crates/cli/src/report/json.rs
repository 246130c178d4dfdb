// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use crate::analyze::SiteAnalysis;
use crate::check::CheckReport;

use super::ReportFormatter;

/// JSON format report formatter.
///
/// Emits the serialized result as-is, so the JSON schema is the result type.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_check(&self, report: &CheckReport) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_analysis(&self, analysis: &SiteAnalysis) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(analysis)?)
    }
}
