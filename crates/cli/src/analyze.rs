// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-page structure analysis.
//!
//! Fetches one page (or reads one file) and inventories its interactive
//! elements, JavaScript functions, external resources and performance
//! indicators, then derives potential issues and recommendations.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::javascript::JsAnalysis;
use crate::performance::{self, PageFacts, PerformanceIndicators};
use crate::probe::{Probe, ProbeResult, ProbeStatus};
use crate::resources::ResourceScan;
use crate::structure::{Element, StructureReport};
use crate::verbose::VerboseLogger;

/// Page to analyze.
#[derive(Debug, Clone)]
pub enum Target {
    Url(String),
    File(PathBuf),
}

impl Target {
    pub fn describe(&self) -> String {
        match self {
            Target::Url(url) => url.clone(),
            Target::File(path) => path.display().to_string(),
        }
    }
}

/// Result of analyzing one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteAnalysis {
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub base_url: String,
    pub connectivity: ProbeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Seconds, rounded to two decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_size: Option<usize>,
    pub links_found: usize,
    pub buttons_found: usize,
    pub forms_found: usize,
    pub interactive_elements: Vec<Element>,
    pub javascript_functions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceScan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceIndicators>,
    pub potential_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl SiteAnalysis {
    fn new(base_url: String, started: DateTime<Utc>) -> Self {
        Self {
            started,
            finished: started,
            base_url,
            connectivity: ProbeStatus::Success,
            status_code: None,
            response_time_secs: None,
            content_size: None,
            links_found: 0,
            buttons_found: 0,
            forms_found: 0,
            interactive_elements: Vec::new(),
            javascript_functions: Vec::new(),
            resources: None,
            performance: None,
            potential_issues: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn accessible(&self) -> bool {
        self.connectivity == ProbeStatus::Success
    }

    /// Links plus buttons.
    pub fn interactive_count(&self) -> usize {
        self.links_found + self.buttons_found
    }
}

/// Analyze one page.
pub fn analyze(
    target: &Target,
    probe: &dyn Probe,
    config: &Config,
    verbose: &VerboseLogger,
) -> SiteAnalysis {
    let started = Utc::now();
    let base_url = match target {
        Target::Url(url) => url.clone(),
        Target::File(path) => config.site.url.clone().unwrap_or_else(|| path.display().to_string()),
    };
    let mut analysis = SiteAnalysis::new(base_url, started);

    verbose.section(&format!("Connectivity: {}", target.describe()));
    let Loaded { content, status_code, response_time } = match load(target, probe, config) {
        Ok(loaded) => loaded,
        Err(failure) => {
            analysis.connectivity = failure.status;
            analysis.status_code = failure.status_code;
            analysis.potential_issues.push(connectivity_issue(&failure));
            verbose.log(&format!("Not accessible: {}", failure.error_text()));
            analysis.finished = Utc::now();
            return analysis;
        }
    };

    analysis.status_code = status_code;
    analysis.content_size = Some(content.len());
    analysis.response_time_secs =
        response_time.map(|t| (t.as_secs_f64() * 100.0).round() / 100.0);
    if let Some(secs) = analysis.response_time_secs {
        verbose.log(&format!("Response time: {} seconds", secs));
    }
    verbose.log(&format!("Content size: {} bytes", content.len()));

    // Structure
    let structure = StructureReport::scan(&content);
    analysis.links_found = structure.links.len();
    analysis.buttons_found = structure.buttons.len();
    analysis.forms_found = structure.forms.len();
    analysis.interactive_elements = structure.elements().cloned().collect();
    verbose.section("Structure");
    verbose.log(&format!(
        "{} links, {} buttons, {} forms",
        analysis.links_found, analysis.buttons_found, analysis.forms_found
    ));

    // JavaScript
    let js = JsAnalysis::analyze(&content);
    let missing = js.missing_expected(&config.javascript.expected_functions);
    if !missing.is_empty() {
        analysis
            .potential_issues
            .push(format!("Missing expected functions: {}", missing.join(", ")));
    }
    analysis.javascript_functions = js.called.into_iter().collect();
    verbose.section("JavaScript");
    verbose.log(&format!("{} unique functions", analysis.javascript_functions.len()));

    // External resources
    let resources = ResourceScan::scan(&content, Some(&analysis.base_url));
    analysis.potential_issues.extend(resources.issues.iter().cloned());
    analysis.resources = Some(resources);

    // Performance
    let indicators = PerformanceIndicators::measure(&content);
    analysis.potential_issues.extend(indicators.issues(&config.thresholds));
    analysis.recommendations.extend(indicators.recommendations(&config.thresholds));
    analysis.performance = Some(indicators);

    let facts = PageFacts {
        response_time,
        content_size: analysis.content_size,
        links_found: analysis.links_found,
        buttons_found: analysis.buttons_found,
    };
    analysis.recommendations.extend(performance::recommendations(&facts, &config.thresholds));

    tracing::info!(
        target = %target.describe(),
        issues = analysis.potential_issues.len(),
        recommendations = analysis.recommendations.len(),
        "analysis complete"
    );
    analysis.finished = Utc::now();
    analysis
}

/// Page content plus, for URLs, the response status and time.
struct Loaded {
    content: String,
    status_code: Option<u16>,
    response_time: Option<Duration>,
}

fn load(
    target: &Target,
    probe: &dyn Probe,
    config: &Config,
) -> std::result::Result<Loaded, ProbeResult> {
    match target {
        Target::Url(url) => probe.fetch(url, config.http.page_timeout()).map(|page| Loaded {
            content: page.content,
            status_code: Some(page.status_code),
            response_time: Some(page.elapsed),
        }),
        Target::File(path) => std::fs::read(path)
            .map(|bytes| Loaded {
                content: String::from_utf8_lossy(&bytes).into_owned(),
                status_code: None,
                response_time: None,
            })
            .map_err(|e| ProbeResult::error(format!("{}: {}", path.display(), e), Duration::ZERO)),
    }
}

fn connectivity_issue(failure: &ProbeResult) -> String {
    match failure.status {
        ProbeStatus::HttpError => format!(
            "HTTP Error: {} - {}",
            failure.status_code.unwrap_or_default(),
            failure.error_text()
        ),
        ProbeStatus::UrlError => format!("URL Error: {}", failure.error_text()),
        _ => format!("Connection failed: {}", failure.error_text()),
    }
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
