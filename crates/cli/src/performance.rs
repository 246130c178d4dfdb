// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Performance indicators and recommendations.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ThresholdsConfig;

#[allow(clippy::expect_used)]
static INLINE_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<style[^>]*>.*?</style>").expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static INLINE_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script[^>]*>.*?</script>").expect("valid regex pattern")
});

/// Size and inline-asset indicators of one page.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceIndicators {
    pub html_size_kb: f64,
    pub inline_styles: usize,
    pub inline_scripts: usize,
}

impl PerformanceIndicators {
    pub fn measure(html: &str) -> Self {
        Self {
            html_size_kb: html.len() as f64 / 1024.0,
            inline_styles: INLINE_STYLE.find_iter(html).count(),
            inline_scripts: INLINE_SCRIPT.find_iter(html).count(),
        }
    }

    /// Issues raised by the indicators themselves.
    pub fn issues(&self, thresholds: &ThresholdsConfig) -> Vec<String> {
        let mut issues = Vec::new();
        if self.html_size_kb > thresholds.max_html_kb {
            issues.push(format!(
                "Large HTML file ({:.1} KB) may affect loading time",
                self.html_size_kb
            ));
        }
        issues
    }

    pub fn recommendations(&self, thresholds: &ThresholdsConfig) -> Vec<String> {
        let mut recs = Vec::new();
        if self.inline_styles > thresholds.max_inline_styles {
            recs.push("Consider moving inline styles to external CSS files".to_string());
        }
        if self.inline_scripts > thresholds.max_inline_scripts {
            recs.push("Consider moving inline scripts to external JS files".to_string());
        }
        recs
    }
}

/// Page-level facts that drive general recommendations.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageFacts {
    pub response_time: Option<Duration>,
    pub content_size: Option<usize>,
    pub links_found: usize,
    pub buttons_found: usize,
}

/// Recommendations from response time, page size and element counts.
pub fn recommendations(facts: &PageFacts, thresholds: &ThresholdsConfig) -> Vec<String> {
    let mut recs = Vec::new();
    if facts.response_time.is_some_and(|t| t.as_secs_f64() > thresholds.slow_response_secs) {
        recs.push(format!(
            "Response time is slow (>{}s). Consider optimizing server or using CDN",
            thresholds.slow_response_secs
        ));
    }
    if facts.content_size.is_some_and(|s| s > thresholds.large_page_bytes) {
        recs.push("Large page size. Consider code splitting or lazy loading".to_string());
    }
    if facts.links_found > thresholds.many_links {
        recs.push("Many links found. Consider implementing automated link checking".to_string());
    }
    if facts.buttons_found > thresholds.many_buttons {
        recs.push("Many interactive elements. Consider comprehensive UI testing".to_string());
    }
    recs
}

/// Page load rating from response time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadRating {
    Good,
    Acceptable,
    Poor,
}

impl LoadRating {
    pub fn from_elapsed(elapsed: Duration, thresholds: &ThresholdsConfig) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs < thresholds.slow_response_secs {
            LoadRating::Good
        } else if secs < thresholds.acceptable_load_secs {
            LoadRating::Acceptable
        } else {
            LoadRating::Poor
        }
    }
}

impl fmt::Display for LoadRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadRating::Good => "good",
            LoadRating::Acceptable => "acceptable",
            LoadRating::Poor => "poor",
        })
    }
}

#[cfg(test)]
#[path = "performance_tests.rs"]
mod tests;
