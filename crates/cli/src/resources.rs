// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External resource scan and content issues.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[allow(clippy::expect_used)]
static EXTERNAL_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href=["']https?://[^"']+["']"#).expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static EXTERNAL_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"src=["']https?://[^"']+["']"#).expect("valid regex pattern")
});

pub const LOCALHOST_ISSUE: &str = "Localhost references found - may not work in production";
pub const MIXED_CONTENT_ISSUE: &str = "Mixed content warning - HTTP resources on HTTPS site";

/// External references and content-level issues of one page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceScan {
    pub external_links: usize,
    pub external_scripts: usize,
    pub issues: Vec<String>,
}

impl ResourceScan {
    /// Scan `html` served from `base_url` (if known).
    pub fn scan(html: &str, base_url: Option<&str>) -> Self {
        let mut issues = Vec::new();
        if html.contains("localhost") {
            issues.push(LOCALHOST_ISSUE.to_string());
        }
        let https_site = base_url.is_some_and(|u| u.starts_with("https://"));
        if https_site && html.contains("http://") {
            issues.push(MIXED_CONTENT_ISSUE.to_string());
        }

        Self {
            external_links: EXTERNAL_HREF.find_iter(html).count(),
            external_scripts: EXTERNAL_SRC.find_iter(html).count(),
            issues,
        }
    }
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;
