// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use crate::analyze::SiteAnalysis;
use crate::check::{CheckReport, LinkQuality, SourceKind, SourceReport};

use super::{ReportFormatter, thousands, timestamp};

/// Text format report formatter.
pub struct TextFormatter;

/// Broken links listed per source.
const BROKEN_SHOWN: usize = 3;

const RULE_WIDTH: usize = 70;
const SECTION_WIDTH: usize = 40;

fn section(out: &mut String, title: &str, width: usize) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(width))
}

fn write_source(out: &mut String, source: &SourceReport) -> std::fmt::Result {
    let title = match source.kind {
        SourceKind::Live => "LIVE WEBSITE",
        SourceKind::Local => "LOCAL FILE",
    };
    section(out, &format!("{} ({})", title, source.location), SECTION_WIDTH)?;

    if !source.accessible {
        writeln!(out, "❌ Status: NOT ACCESSIBLE")?;
        writeln!(out, "   Error: {}", source.error.as_deref().unwrap_or("Unknown"))?;
        return writeln!(out);
    }

    writeln!(out, "✅ Status: ACCESSIBLE")?;
    if let Some(code) = source.status_code {
        writeln!(out, "   Status Code: {}", code)?;
    }
    if let Some(ms) = source.elapsed_ms {
        let rating = source.load_rating.map(|r| format!(" ({})", r)).unwrap_or_default();
        writeln!(out, "   Response Time: {:.2} seconds{}", ms as f64 / 1000.0, rating)?;
    }
    let size = thousands(source.size.unwrap_or_default());
    match source.kind {
        SourceKind::Live => writeln!(out, "   Content Size: {} bytes", size)?,
        SourceKind::Local => writeln!(out, "   File Size: {} bytes", size)?,
    }
    writeln!(out, "   Total Links: {}", source.total_links)?;
    if let Some(js) = source.javascript.as_ref().filter(|js| !js.all_defined()) {
        let missing: Vec<&str> = js.missing.iter().map(String::as_str).collect();
        writeln!(out, "⚠️  Functions called but not defined: {}", missing.join(", "))?;
    }
    writeln!(out)
}

fn quality_line(quality: Option<LinkQuality>) -> String {
    match quality {
        None => "⚠️  No external links tested".to_string(),
        Some(q @ LinkQuality::Excellent) => format!("✅ {}", q.description()),
        Some(q @ (LinkQuality::Good | LinkQuality::Poor)) => format!("⚠️  {}", q.description()),
        Some(q @ LinkQuality::VeryPoor) => format!("❌ {}", q.description()),
    }
}

fn write_check(out: &mut String, report: &CheckReport) -> std::fmt::Result {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "COMPREHENSIVE LINK TEST REPORT")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Test Date: {}", timestamp(&report.started))?;
    writeln!(out)?;

    for source in report.sources() {
        write_source(out, source)?;
    }

    let summary = &report.summary;
    section(out, "EXTERNAL LINK TESTING", SECTION_WIDTH)?;
    writeln!(out, "Total external links tested: {}", summary.tested)?;
    writeln!(out, "Working links: {}", summary.working)?;
    writeln!(out, "Broken links: {}", summary.broken)?;
    writeln!(out, "Success rate: {:.1}%", summary.success_rate)?;
    writeln!(out)?;

    if summary.broken > 0 {
        section(out, "BROKEN LINKS DETAILS", SECTION_WIDTH)?;
        for check in &report.link_checks {
            let broken: Vec<_> = check.broken().take(BROKEN_SHOWN).collect();
            if broken.is_empty() {
                continue;
            }
            writeln!(out, "From {}:", check.source)?;
            for link in broken {
                writeln!(out, "  ❌ {}", link.url)?;
                writeln!(out, "     Error: {}", link.result.error_text())?;
            }
        }
        writeln!(out)?;
    }

    if let Some(comparison) = &report.comparison {
        section(out, "COMPARISON", SECTION_WIDTH)?;
        writeln!(out, "Live website links: {}", comparison.live_links)?;
        writeln!(out, "Local file links: {}", comparison.local_links)?;
        writeln!(out, "{}", comparison.verdict())?;
        writeln!(out)?;
    }

    section(out, "OVERALL ASSESSMENT", SECTION_WIDTH)?;
    match summary.live_accessible {
        Some(true) => writeln!(out, "✅ Live website is functional")?,
        Some(false) => writeln!(out, "❌ Live website has issues")?,
        None => {}
    }
    match summary.local_accessible {
        Some(true) => writeln!(out, "✅ Local file is accessible")?,
        Some(false) => writeln!(out, "❌ Local file has issues")?,
        None => {}
    }
    writeln!(out, "{}", quality_line(summary.quality))?;
    writeln!(out)?;
    writeln!(out, "Test completed: {}", timestamp(&report.finished))
}

fn write_analysis(out: &mut String, analysis: &SiteAnalysis) -> std::fmt::Result {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "WEBSITE TEST REPORT")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Test Date: {}", timestamp(&analysis.started))?;
    writeln!(out, "Website: {}", analysis.base_url)?;
    writeln!(out)?;

    section(out, "CONNECTIVITY TEST", SECTION_WIDTH)?;
    if analysis.accessible() {
        writeln!(out, "✅ Website is accessible")?;
        if let Some(code) = analysis.status_code {
            writeln!(out, "   Status Code: {}", code)?;
        }
        if let Some(secs) = analysis.response_time_secs {
            writeln!(out, "   Response Time: {} seconds", secs)?;
        }
        let size = thousands(analysis.content_size.unwrap_or_default());
        writeln!(out, "   Content Size: {} bytes", size)?;
    } else {
        writeln!(out, "❌ Website connectivity issues detected")?;
    }
    writeln!(out)?;

    section(out, "STRUCTURE ANALYSIS", SECTION_WIDTH)?;
    writeln!(out, "Links found: {}", analysis.links_found)?;
    writeln!(out, "Interactive buttons: {}", analysis.buttons_found)?;
    writeln!(out, "Forms: {}", analysis.forms_found)?;
    writeln!(out, "JavaScript functions: {}", analysis.javascript_functions.len())?;
    if let Some(resources) = &analysis.resources {
        writeln!(out, "External links: {}", resources.external_links)?;
        writeln!(out, "External scripts: {}", resources.external_scripts)?;
    }
    if let Some(perf) = &analysis.performance {
        writeln!(out, "HTML size: {:.1} KB", perf.html_size_kb)?;
        writeln!(out, "Inline styles: {}", perf.inline_styles)?;
        writeln!(out, "Inline scripts: {}", perf.inline_scripts)?;
    }
    writeln!(out)?;

    if !analysis.potential_issues.is_empty() {
        section(out, "POTENTIAL ISSUES", SECTION_WIDTH)?;
        for issue in &analysis.potential_issues {
            writeln!(out, "⚠️  {}", issue)?;
        }
        writeln!(out)?;
    }

    if !analysis.recommendations.is_empty() {
        section(out, "RECOMMENDATIONS", SECTION_WIDTH)?;
        for rec in &analysis.recommendations {
            writeln!(out, "💡 {}", rec)?;
        }
        writeln!(out)?;
    }

    section(out, "SUMMARY", SECTION_WIDTH)?;
    if analysis.accessible() {
        writeln!(out, "✅ Website is functional and accessible")?;
        writeln!(out, "✅ Interactive elements detected: {}", analysis.interactive_count())?;
        match analysis.potential_issues.len() {
            0 => writeln!(out, "✅ No major issues detected")?,
            n => writeln!(out, "⚠️  {} potential issues found", n)?,
        }
    } else {
        writeln!(out, "❌ Website has connectivity issues")?;
    }
    writeln!(out)?;
    writeln!(out, "Test completed at: {}", timestamp(&analysis.finished))
}

impl ReportFormatter for TextFormatter {
    fn format_check(&self, report: &CheckReport) -> anyhow::Result<String> {
        let mut output = String::with_capacity(2048);
        write_check(&mut output, report)?;
        Ok(output)
    }

    fn format_analysis(&self, analysis: &SiteAnalysis) -> anyhow::Result<String> {
        let mut output = String::with_capacity(1024);
        write_analysis(&mut output, analysis)?;
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
