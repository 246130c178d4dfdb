// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for `sitecheck.toml`.
//!
//! Every field is optional. Unknown keys are reported as warnings so
//! that typos surface without breaking a run.

pub mod defaults;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config format version (must be 1).
    pub version: u32,
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub check: CheckConfig,
    pub javascript: JavascriptConfig,
    pub thresholds: ThresholdsConfig,
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            site: SiteConfig::default(),
            http: HttpConfig::default(),
            check: CheckConfig::default(),
            javascript: JavascriptConfig::default(),
            thresholds: ThresholdsConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// What to test.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Live site URL.
    pub url: Option<String>,

    /// Local HTML file (the deploy candidate), relative to the config file.
    pub local: Option<PathBuf>,
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Page fetch timeout in seconds.
    pub timeout_secs: u64,

    /// Per-link probe timeout in seconds.
    pub link_timeout_secs: u64,

    /// Delay after each link probe in milliseconds.
    pub delay_ms: u64,

    /// Concurrent link probes (1 = sequential).
    pub concurrency: usize,

    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::http::PAGE_TIMEOUT_SECS,
            link_timeout_secs: defaults::http::LINK_TIMEOUT_SECS,
            delay_ms: defaults::http::DELAY_MS,
            concurrency: defaults::http::CONCURRENCY,
            user_agent: defaults::http::USER_AGENT.to_string(),
        }
    }
}

impl HttpConfig {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn link_timeout(&self) -> Duration {
        Duration::from_secs(self.link_timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Link check settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// External links probed per source.
    pub max_links: usize,

    /// Report broken links without failing the run.
    pub allow_broken: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { max_links: defaults::check::MAX_LINKS, allow_broken: false }
    }
}

/// JavaScript inventory settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JavascriptConfig {
    /// Functions the page is expected to call from `onclick` handlers.
    pub expected_functions: Vec<String>,
}

impl Default for JavascriptConfig {
    fn default() -> Self {
        Self { expected_functions: defaults::expected_functions() }
    }
}

/// Thresholds for performance indicators and recommendations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub max_html_kb: f64,
    pub max_inline_styles: usize,
    pub max_inline_scripts: usize,
    pub slow_response_secs: f64,
    pub acceptable_load_secs: f64,
    pub large_page_bytes: usize,
    pub many_links: usize,
    pub many_buttons: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        use defaults::thresholds as t;
        Self {
            max_html_kb: t::MAX_HTML_KB,
            max_inline_styles: t::MAX_INLINE_STYLES,
            max_inline_scripts: t::MAX_INLINE_SCRIPTS,
            slow_response_secs: t::SLOW_RESPONSE_SECS,
            acceptable_load_secs: t::ACCEPTABLE_LOAD_SECS,
            large_page_bytes: t::LARGE_PAGE_BYTES,
            many_links: t::MANY_LINKS,
            many_buttons: t::MANY_BUTTONS,
        }
    }
}

/// Report file settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory to write report files into (none = stdout only).
    pub out_dir: Option<PathBuf>,

    /// Base name for report files (`<basename>.json`, `.txt`, `.md`).
    pub basename: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { out_dir: None, basename: defaults::report::BASENAME.to_string() }
    }
}

/// Known keys per section, used for unknown-key warnings.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("site", &["url", "local"]),
    ("http", &["timeout_secs", "link_timeout_secs", "delay_ms", "concurrency", "user_agent"]),
    ("check", &["max_links", "allow_broken"]),
    ("javascript", &["expected_functions"]),
    (
        "thresholds",
        &[
            "max_html_kb",
            "max_inline_styles",
            "max_inline_scripts",
            "slow_response_secs",
            "acceptable_load_secs",
            "large_page_bytes",
            "many_links",
            "many_buttons",
        ],
    ),
    ("report", &["out_dir", "basename"]),
];

/// Load config from a file, logging warnings for unknown keys.
///
/// Relative `site.local` and `report.out_dir` paths are resolved against
/// the config file's directory.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let (mut config, warnings) = parse_with_warnings(&content, path)?;
    for warning in &warnings {
        tracing::warn!(path = %path.display(), "{}", warning);
    }
    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    Ok(config)
}

/// Parse config content, returning the config and any unknown-key warnings.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let config_error =
        |message: String| Error::Config { path: path.to_path_buf(), message };

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    let warnings = unknown_keys(&table);

    let config: Config = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    config.validate().map_err(config_error)?;
    Ok((config, warnings))
}

/// Parse config content, ignoring warnings.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    parse_with_warnings(content, path).map(|(config, _)| config)
}

fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut warnings = Vec::new();
    for (key, value) in table {
        if key == "version" {
            continue;
        }
        let Some((_, known)) = KNOWN_KEYS.iter().find(|(section, _)| section == key) else {
            warnings.push(format!("unknown config key: {}", key));
            continue;
        };
        if let toml::Value::Table(section) = value {
            for sub in section.keys() {
                if !known.contains(&sub.as_str()) {
                    warnings.push(format!("unknown config key: {}.{}", key, sub));
                }
            }
        }
    }
    warnings
}

impl Config {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.version != defaults::CONFIG_VERSION {
            return Err(format!(
                "unsupported version {} (expected {})",
                self.version,
                defaults::CONFIG_VERSION
            ));
        }
        if self.http.concurrency == 0 {
            return Err("http.concurrency must be at least 1".to_string());
        }
        if self.http.timeout_secs == 0 {
            return Err("http.timeout_secs must be at least 1".to_string());
        }
        if self.http.link_timeout_secs == 0 {
            return Err("http.link_timeout_secs must be at least 1".to_string());
        }
        if let Some(url) = &self.site.url {
            url::Url::parse(url).map_err(|e| format!("site.url {}: {}", url, e))?;
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        if let Some(local) = self.site.local.as_ref().filter(|p| p.is_relative()) {
            self.site.local = Some(base.join(local));
        }
        if let Some(dir) = self.report.out_dir.as_ref().filter(|p| p.is_relative()) {
            self.report.out_dir = Some(base.join(dir));
        }
    }
}

/// Default config written by `sitecheck init`.
pub const DEFAULT_TEMPLATE: &str = r#"version = 1

[site]
# url = "https://example.com"
local = "index.html"

[http]
timeout_secs = 10
link_timeout_secs = 5
delay_ms = 500
concurrency = 1

[check]
max_links = 10
allow_broken = false

[report]
# out_dir = "reports"
basename = "sitecheck_report"
"#;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
