// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown format report output.

use std::fmt::Write;

use crate::analyze::SiteAnalysis;
use crate::check::{CheckReport, LinkCheck, LinkQuality, SourceKind, SourceReport};
use crate::structure::Element;

use super::{ReportFormatter, human_bytes, thousands, timestamp};

/// Markdown format report formatter.
pub struct MarkdownFormatter;

fn mark(ok: bool) -> &'static str {
    if ok { "✅" } else { "❌" }
}

fn heading(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Live => "Live Website",
        SourceKind::Local => "Local File",
    }
}

/// Escape pipes so values don't split table cells.
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn write_source(out: &mut String, source: &SourceReport) -> std::fmt::Result {
    writeln!(out, "## {}\n", heading(source.kind))?;
    writeln!(out, "| Property | Value |")?;
    writeln!(out, "|----------|-------|")?;
    writeln!(out, "| Location | `{}` |", cell(&source.location))?;
    if !source.accessible {
        writeln!(out, "| Status | ❌ Not accessible |")?;
        writeln!(out, "| Error | {} |\n", cell(source.error.as_deref().unwrap_or("Unknown")))?;
        return Ok(());
    }
    writeln!(out, "| Status | ✅ Accessible |")?;
    if let Some(code) = source.status_code {
        writeln!(out, "| Status code | {} |", code)?;
    }
    if let Some(size) = source.size {
        writeln!(out, "| Size | {} ({} bytes) |", human_bytes(size as u64), thousands(size))?;
    }
    if let Some(ms) = source.elapsed_ms {
        let rating = source.load_rating.map(|r| format!(" ({})", r)).unwrap_or_default();
        writeln!(out, "| Response time | {:.2} s{} |", ms as f64 / 1000.0, rating)?;
    }
    writeln!(out, "| Total links | {} |\n", source.total_links)?;

    writeln!(out, "| Category | Count |")?;
    writeln!(out, "|----------|------:|")?;
    for (name, count) in source.links.categories() {
        writeln!(out, "| {} | {} |", name, count)?;
    }
    writeln!(out)
}

fn write_link_check(out: &mut String, check: &LinkCheck) -> std::fmt::Result {
    writeln!(out, "### External links from {}\n", check.source)?;
    if check.results.is_empty() {
        return writeln!(out, "*No external links found.*\n");
    }
    writeln!(out, "Tested {} of {} external links.\n", check.tested, check.total)?;
    writeln!(out, "| | URL | Result |")?;
    writeln!(out, "|---|-----|--------|")?;
    for link in &check.results {
        let result = if link.result.accessible() {
            format!("{}", link.result.status_code.unwrap_or_default())
        } else {
            match link.result.status_code {
                Some(code) => format!("{} {}", code, link.result.error_text()),
                None => link.result.error_text().to_string(),
            }
        };
        let ok = link.result.accessible();
        writeln!(out, "| {} | {} | {} |", mark(ok), cell(&link.url), cell(&result))?;
    }
    writeln!(out)
}

fn write_javascript(out: &mut String, report: &CheckReport) -> std::fmt::Result {
    let sources: Vec<_> =
        report.sources().filter_map(|s| s.javascript.as_ref().map(|js| (s.kind, js))).collect();
    if sources.is_empty() {
        return Ok(());
    }
    writeln!(out, "## JavaScript Functions\n")?;
    writeln!(out, "| Source | Onclick handlers | Called | Defined | Missing |")?;
    writeln!(out, "|--------|-----------------:|-------:|--------:|---------|")?;
    for (kind, js) in sources {
        let missing = if js.all_defined() {
            "✅ none".to_string()
        } else {
            let names: Vec<_> = js.missing.iter().map(|f| format!("`{}`", f)).collect();
            format!("⚠️ {}", names.join(", "))
        };
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            kind,
            js.onclick_handlers,
            js.called.len(),
            js.defined.len(),
            missing
        )?;
    }
    writeln!(out)
}

fn quality_text(quality: Option<LinkQuality>) -> String {
    match quality {
        None => "⚠️ No external links tested".to_string(),
        Some(q @ LinkQuality::Excellent) => format!("✅ {}", q.description()),
        Some(q @ (LinkQuality::Good | LinkQuality::Poor)) => format!("⚠️ {}", q.description()),
        Some(q @ LinkQuality::VeryPoor) => format!("❌ {}", q.description()),
    }
}

fn write_check(out: &mut String, report: &CheckReport) -> std::fmt::Result {
    writeln!(out, "# Website Test Report\n")?;
    writeln!(out, "**Test date:** {}\n", timestamp(&report.started))?;

    let summary = &report.summary;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "| Check | Result |")?;
    writeln!(out, "|-------|--------|")?;
    if let Some(ok) = summary.live_accessible {
        writeln!(out, "| Live website | {} |", mark(ok))?;
    }
    if let Some(ok) = summary.local_accessible {
        writeln!(out, "| Local file | {} |", mark(ok))?;
    }
    writeln!(out, "| External links tested | {} |", summary.tested)?;
    writeln!(out, "| Working links | {} |", summary.working)?;
    writeln!(out, "| Broken links | {} |", summary.broken)?;
    writeln!(out, "| Success rate | {:.1}% |\n", summary.success_rate)?;

    for source in report.sources() {
        write_source(out, source)?;
    }

    if !report.link_checks.is_empty() {
        writeln!(out, "## External Link Testing\n")?;
        for check in &report.link_checks {
            write_link_check(out, check)?;
        }
    }

    write_javascript(out, report)?;

    if let Some(comparison) = &report.comparison {
        writeln!(out, "## Comparison\n")?;
        writeln!(out, "| Live links | Local links | Difference |")?;
        writeln!(out, "|-----------:|------------:|-----------:|")?;
        writeln!(
            out,
            "| {} | {} | {:+} |\n",
            comparison.live_links, comparison.local_links, comparison.difference
        )?;
        writeln!(out, "{}\n", comparison.verdict())?;
    }

    writeln!(out, "## Overall Assessment\n")?;
    match summary.live_accessible {
        Some(true) => writeln!(out, "- ✅ Live website is functional")?,
        Some(false) => writeln!(out, "- ❌ Live website has issues")?,
        None => {}
    }
    match summary.local_accessible {
        Some(true) => writeln!(out, "- ✅ Local file is accessible")?,
        Some(false) => writeln!(out, "- ❌ Local file has issues")?,
        None => {}
    }
    writeln!(out, "- {}\n", quality_text(summary.quality))?;
    writeln!(out, "---\n")?;
    writeln!(out, "*Test completed: {}*", timestamp(&report.finished))
}

fn describe(element: &Element) -> (&'static str, String) {
    match element {
        Element::Link { href, onclick } => {
            let target = href.as_deref().or(onclick.as_deref()).unwrap_or("");
            ("link", target.to_string())
        }
        Element::Button { onclick } => ("button", onclick.clone()),
        Element::Form { action, method } => {
            ("form", format!("{} {}", method, action.as_deref().unwrap_or("")))
        }
    }
}

fn write_analysis(out: &mut String, analysis: &SiteAnalysis) -> std::fmt::Result {
    writeln!(out, "# Website Analysis\n")?;
    writeln!(out, "**Website:** {}  ", analysis.base_url)?;
    writeln!(out, "**Test date:** {}\n", timestamp(&analysis.started))?;

    writeln!(out, "## Connectivity\n")?;
    writeln!(out, "| Property | Value |")?;
    writeln!(out, "|----------|-------|")?;
    writeln!(out, "| Status | {} {} |", mark(analysis.accessible()), analysis.connectivity)?;
    if let Some(code) = analysis.status_code {
        writeln!(out, "| Status code | {} |", code)?;
    }
    if let Some(secs) = analysis.response_time_secs {
        writeln!(out, "| Response time | {} s |", secs)?;
    }
    if let Some(size) = analysis.content_size {
        writeln!(out, "| Content size | {} bytes |", thousands(size))?;
    }
    writeln!(out)?;

    if analysis.accessible() {
        writeln!(out, "## Structure\n")?;
        writeln!(out, "| Element | Count |")?;
        writeln!(out, "|---------|------:|")?;
        writeln!(out, "| Links | {} |", analysis.links_found)?;
        writeln!(out, "| Buttons | {} |", analysis.buttons_found)?;
        writeln!(out, "| Forms | {} |", analysis.forms_found)?;
        writeln!(out, "| JavaScript functions | {} |\n", analysis.javascript_functions.len())?;

        if !analysis.interactive_elements.is_empty() {
            writeln!(out, "| Type | Target |")?;
            writeln!(out, "|------|--------|")?;
            for element in &analysis.interactive_elements {
                let (kind, target) = describe(element);
                writeln!(out, "| {} | `{}` |", kind, cell(&target))?;
            }
            writeln!(out)?;
        }
    }

    if !analysis.potential_issues.is_empty() {
        writeln!(out, "## Potential Issues\n")?;
        for issue in &analysis.potential_issues {
            writeln!(out, "- ⚠️ {}", issue)?;
        }
        writeln!(out)?;
    }
    if !analysis.recommendations.is_empty() {
        writeln!(out, "## Recommendations\n")?;
        for rec in &analysis.recommendations {
            writeln!(out, "- 💡 {}", rec)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "---\n")?;
    writeln!(out, "*Test completed: {}*", timestamp(&analysis.finished))
}

impl ReportFormatter for MarkdownFormatter {
    fn format_check(&self, report: &CheckReport) -> anyhow::Result<String> {
        let mut output = String::with_capacity(4096);
        write_check(&mut output, report)?;
        Ok(output)
    }

    fn format_analysis(&self, analysis: &SiteAnalysis) -> anyhow::Result<String> {
        let mut output = String::with_capacity(2048);
        write_analysis(&mut output, analysis)?;
        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
