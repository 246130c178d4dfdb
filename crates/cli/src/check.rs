// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comprehensive website check.
//!
//! Runs, in order:
//! - live site fetch and link extraction
//! - local file read and link extraction
//! - external link probes and JavaScript inventory per accessible source
//! - live vs. local comparison
//! - summary (success rate and link quality)

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Config, ThresholdsConfig};
use crate::error::{Error, Result};
use crate::extract::LinkInventory;
use crate::javascript::JsAnalysis;
use crate::performance::LoadRating;
use crate::probe::{Probe, ProbeCache};
use crate::runner::{LinkResult, LinkRunner, RunnerConfig};
use crate::verbose::VerboseLogger;

/// Which page a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Live,
    Local,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceKind::Live => "live website",
            SourceKind::Local => "local file",
        })
    }
}

/// What one run checks, after config and CLI overrides are merged.
#[derive(Debug, Clone)]
pub struct CheckPlan {
    pub url: Option<String>,
    pub local: Option<PathBuf>,
    /// Skip all network access.
    pub offline: bool,
    pub max_links: usize,
    pub page_timeout: Duration,
    pub link_timeout: Duration,
    pub delay: Duration,
    pub concurrency: usize,
    pub thresholds: ThresholdsConfig,
}

impl CheckPlan {
    pub fn from_config(config: &Config) -> Self {
        Self {
            url: config.site.url.clone(),
            local: config.site.local.clone(),
            offline: false,
            max_links: config.check.max_links,
            page_timeout: config.http.page_timeout(),
            link_timeout: config.http.link_timeout(),
            delay: config.http.delay(),
            concurrency: config.http.concurrency,
            thresholds: config.thresholds.clone(),
        }
    }

    /// Live URL to fetch, unless offline.
    fn live_url(&self) -> Option<&str> {
        if self.offline { None } else { self.url.as_deref() }
    }
}

/// Result for one source page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub kind: SourceKind,
    /// URL or file path.
    pub location: String,
    pub accessible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Content size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_rating: Option<LoadRating>,
    #[serde(default)]
    pub links: LinkInventory,
    pub total_links: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<JsAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceReport {
    fn inaccessible(kind: SourceKind, location: String, error: String) -> Self {
        Self {
            kind,
            location,
            accessible: false,
            status_code: None,
            size: None,
            elapsed_ms: None,
            load_rating: None,
            links: LinkInventory::default(),
            total_links: 0,
            javascript: None,
            error: Some(error),
        }
    }

    fn accessible(kind: SourceKind, location: String, content: &str) -> Self {
        let links = LinkInventory::extract(content);
        Self {
            kind,
            location,
            accessible: true,
            status_code: None,
            size: Some(content.len()),
            elapsed_ms: None,
            load_rating: None,
            total_links: links.total(),
            links,
            javascript: Some(JsAnalysis::analyze(content)),
            error: None,
        }
    }
}

/// External link results for one source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheck {
    pub source: SourceKind,
    /// Links probed.
    pub tested: usize,
    /// External links found.
    pub total: usize,
    pub results: Vec<LinkResult>,
}

impl LinkCheck {
    pub fn working(&self) -> usize {
        self.results.iter().filter(|r| r.result.accessible()).count()
    }

    pub fn broken(&self) -> impl Iterator<Item = &LinkResult> {
        self.results.iter().filter(|r| !r.result.accessible())
    }
}

/// Live vs. local link counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub live_links: usize,
    pub local_links: usize,
    /// `live_links - local_links`.
    pub difference: i64,
}

impl Comparison {
    pub fn new(live_links: usize, local_links: usize) -> Self {
        let difference = live_links as i64 - local_links as i64;
        Self { live_links, local_links, difference }
    }

    pub fn verdict(&self) -> String {
        match self.difference {
            0 => "Same number of links".to_string(),
            d if d > 0 => format!("Live website has {} more links", d),
            d => format!("Local file has {} more links", -d),
        }
    }
}

/// Link quality grade from the success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkQuality {
    Excellent,
    Good,
    Poor,
    VeryPoor,
}

impl LinkQuality {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 90.0 {
            LinkQuality::Excellent
        } else if rate >= 75.0 {
            LinkQuality::Good
        } else if rate >= 50.0 {
            LinkQuality::Poor
        } else {
            LinkQuality::VeryPoor
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LinkQuality::Excellent => "Excellent link quality (90%+ working)",
            LinkQuality::Good => "Good link quality (75-90% working)",
            LinkQuality::Poor => "Poor link quality (50-75% working)",
            LinkQuality::VeryPoor => "Very poor link quality (<50% working)",
        }
    }
}

/// Aggregate numbers for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// None when the live site was not checked.
    pub live_accessible: Option<bool>,
    /// None when no local file was checked.
    pub local_accessible: Option<bool>,
    pub tested: usize,
    pub working: usize,
    pub broken: usize,
    /// Percent of tested links that work (0 when nothing was tested).
    pub success_rate: f64,
    /// None when nothing was tested.
    pub quality: Option<LinkQuality>,
}

impl Summary {
    pub fn compute(
        live: Option<&SourceReport>,
        local: Option<&SourceReport>,
        link_checks: &[LinkCheck],
    ) -> Self {
        let tested: usize = link_checks.iter().map(|c| c.tested).sum();
        let working: usize = link_checks.iter().map(LinkCheck::working).sum();
        let success_rate =
            if tested > 0 { working as f64 / tested as f64 * 100.0 } else { 0.0 };

        Self {
            live_accessible: live.map(|s| s.accessible),
            local_accessible: local.map(|s| s.accessible),
            tested,
            working,
            broken: tested - working,
            success_rate,
            quality: (tested > 0).then(|| LinkQuality::from_rate(success_rate)),
        }
    }
}

/// Full result of a check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<SourceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<SourceReport>,
    pub link_checks: Vec<LinkCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    pub summary: Summary,
}

impl CheckReport {
    /// Checked sources, live first.
    pub fn sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.live.iter().chain(self.local.iter())
    }

    /// Reasons the run failed; empty when it passed.
    pub fn failures(&self, allow_broken: bool) -> Vec<String> {
        let mut failures: Vec<String> = self
            .sources()
            .filter(|s| !s.accessible)
            .map(|s| {
                format!("{} not accessible: {}", s.kind, s.error.as_deref().unwrap_or("Unknown"))
            })
            .collect();
        if !allow_broken && self.summary.broken > 0 {
            failures.push(format!("{} broken external link(s)", self.summary.broken));
        }
        failures
    }

    pub fn passed(&self, allow_broken: bool) -> bool {
        self.failures(allow_broken).is_empty()
    }
}

/// Run a check.
///
/// Fails only when nothing can be checked; unreachable pages and broken
/// links are recorded in the report.
pub fn run(plan: &CheckPlan, probe: &dyn Probe, verbose: &VerboseLogger) -> Result<CheckReport> {
    if plan.live_url().is_none() && plan.local.is_none() {
        return Err(Error::NoSources);
    }
    if plan.offline && plan.url.is_some() {
        tracing::info!("offline: skipping live website and link probes");
    }

    let started = Utc::now();
    let cache = ProbeCache::new(probe);

    let live = plan.live_url().map(|url| check_live(url, plan, &cache, verbose));
    let local = plan.local.as_ref().map(|path| check_local(path, verbose));

    let mut link_checks = Vec::new();
    if !plan.offline {
        let runner = LinkRunner::new(RunnerConfig {
            concurrency: plan.concurrency,
            timeout: plan.link_timeout,
            delay: plan.delay,
        });
        for source in live.iter().chain(local.iter()).filter(|s| s.accessible) {
            link_checks.push(check_links(source, plan.max_links, &runner, &cache, verbose));
        }
    }
    for source in live.iter().chain(local.iter()) {
        log_javascript(source, verbose);
    }

    let comparison = match (&live, &local) {
        (Some(l), Some(f)) if l.accessible && f.accessible => {
            let comparison = Comparison::new(l.total_links, f.total_links);
            verbose.section("Comparison");
            verbose.log(&comparison.verdict());
            Some(comparison)
        }
        _ => None,
    };

    let summary = Summary::compute(live.as_ref(), local.as_ref(), &link_checks);
    tracing::info!(
        tested = summary.tested,
        working = summary.working,
        broken = summary.broken,
        "check complete"
    );

    Ok(CheckReport {
        started,
        finished: Utc::now(),
        live,
        local,
        link_checks,
        comparison,
        summary,
    })
}

fn check_live(
    url: &str,
    plan: &CheckPlan,
    cache: &ProbeCache<'_>,
    verbose: &VerboseLogger,
) -> SourceReport {
    verbose.section(&format!("Live website: {}", url));
    match cache.fetch(url, plan.page_timeout) {
        Ok(page) => {
            let mut report =
                SourceReport::accessible(SourceKind::Live, url.to_string(), &page.content);
            report.status_code = Some(page.status_code);
            report.elapsed_ms = Some(page.to_result().elapsed_ms);
            report.load_rating = Some(LoadRating::from_elapsed(page.elapsed, &plan.thresholds));
            tracing::info!(
                url,
                status = page.status_code,
                bytes = page.content.len(),
                "live website fetched"
            );
            verbose.log(&format!("Accessible (status {})", page.status_code));
            verbose.log(&format!("Content size: {} bytes", page.content.len()));
            verbose.log(&format!("Total links found: {}", report.total_links));
            report
        }
        Err(failure) => {
            tracing::warn!(url, error = failure.error_text(), "live website not accessible");
            verbose.log(&format!("Not accessible: {}", failure.error_text()));
            let mut report = SourceReport::inaccessible(
                SourceKind::Live,
                url.to_string(),
                failure.error_text().to_string(),
            );
            report.status_code = failure.status_code;
            report
        }
    }
}

fn check_local(path: &std::path::Path, verbose: &VerboseLogger) -> SourceReport {
    let location = path.display().to_string();
    verbose.section(&format!("Local file: {}", location));

    if !path.exists() {
        verbose.log("File not found");
        let error = "File not found".to_string();
        return SourceReport::inaccessible(SourceKind::Local, location, error);
    }

    match std::fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            let report = SourceReport::accessible(SourceKind::Local, location, &content);
            tracing::info!(path = %path.display(), bytes = bytes.len(), "local file read");
            verbose.log(&format!("File size: {} bytes", bytes.len()));
            verbose.log(&format!("Total links found: {}", report.total_links));
            report
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "local file not readable");
            SourceReport::inaccessible(SourceKind::Local, location, e.to_string())
        }
    }
}

fn check_links(
    source: &SourceReport,
    max_links: usize,
    runner: &LinkRunner,
    cache: &ProbeCache<'_>,
    verbose: &VerboseLogger,
) -> LinkCheck {
    let external = &source.links.external_links;
    let selected: Vec<String> = external.iter().take(max_links).cloned().collect();

    verbose.section(&format!("External links from {}", source.kind));
    if external.is_empty() {
        verbose.log("No external links found");
    }

    let results = runner.run(&selected, cache);
    for (i, link) in results.iter().enumerate() {
        verbose.link(i, results.len(), link);
    }

    LinkCheck { source: source.kind, tested: results.len(), total: external.len(), results }
}

fn log_javascript(source: &SourceReport, verbose: &VerboseLogger) {
    let Some(js) = &source.javascript else { return };
    verbose.section(&format!("JavaScript in {}", source.kind));
    verbose.log(&format!("Onclick handlers: {}", js.onclick_handlers));
    verbose.log(&format!("Unique functions called: {}", js.called.len()));
    verbose.log(&format!("Function definitions found: {}", js.defined.len()));
    if !js.all_defined() {
        verbose.log(&format!("Functions called but not defined: {}", js.missing.len()));
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
