// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use yare::parameterized;

use super::*;
use crate::test_utils::temp_project_with_config;

fn cfg_path() -> &'static Path {
    Path::new("sitecheck.toml")
}

#[test]
fn empty_config_uses_defaults() {
    let config = parse("", cfg_path()).unwrap();
    assert_eq!(config.version, 1);
    assert!(config.site.url.is_none());
    assert_eq!(config.http.timeout_secs, 10);
    assert_eq!(config.http.link_timeout_secs, 5);
    assert_eq!(config.http.delay_ms, 500);
    assert_eq!(config.http.concurrency, 1);
    assert_eq!(config.check.max_links, 10);
    assert_eq!(config.report.basename, "sitecheck_report");
    assert_eq!(config.javascript.expected_functions.len(), 14);
}

#[test]
fn parses_site_and_http_sections() {
    let config = parse(
        r#"
version = 1

[site]
url = "https://mybird.app"
local = "public/index.html"

[http]
delay_ms = 0
concurrency = 4
"#,
        cfg_path(),
    )
    .unwrap();

    assert_eq!(config.site.url.as_deref(), Some("https://mybird.app"));
    assert_eq!(config.site.local.as_deref(), Some(Path::new("public/index.html")));
    assert_eq!(config.http.delay(), Duration::ZERO);
    assert_eq!(config.http.concurrency, 4);
    // Untouched fields keep their defaults
    assert_eq!(config.http.timeout_secs, 10);
}

#[test]
fn unsupported_version_is_error() {
    let err = parse("version = 2\n", cfg_path()).unwrap_err();
    assert!(err.to_string().contains("unsupported version 2"));
}

#[test]
fn zero_concurrency_is_error() {
    let err = parse("[http]\nconcurrency = 0\n", cfg_path()).unwrap_err();
    assert!(err.to_string().contains("concurrency"));
}

#[parameterized(
    page = { "[http]\ntimeout_secs = 0\n", "http.timeout_secs" },
    link = { "[http]\nlink_timeout_secs = 0\n", "http.link_timeout_secs" },
)]
fn zero_timeouts_are_errors(content: &str, key: &str) {
    let err = parse(content, cfg_path()).unwrap_err();
    assert!(err.to_string().contains(key), "{}", err);
}

#[test]
fn invalid_site_url_is_error() {
    let err = parse("[site]\nurl = \"not a url\"\n", cfg_path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn malformed_toml_is_error() {
    assert!(parse("[site\n", cfg_path()).is_err());
}

#[parameterized(
    top_level = { "colour = true\n", "unknown config key: colour" },
    nested = { "[http]\nretries = 3\n", "unknown config key: http.retries" },
)]
fn unknown_keys_warn(content: &str, expected: &str) {
    let (_, warnings) = parse_with_warnings(content, cfg_path()).unwrap();
    assert_eq!(warnings, vec![expected.to_string()]);
}

#[test]
fn known_keys_do_not_warn() {
    let (_, warnings) = parse_with_warnings(DEFAULT_TEMPLATE, cfg_path()).unwrap();
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
}

#[test]
fn load_resolves_relative_paths_against_config_dir() {
    let dir = temp_project_with_config(
        "version = 1\n[site]\nlocal = \"index.html\"\n[report]\nout_dir = \"reports\"\n",
    );
    let config = load_with_warnings(&dir.path().join("sitecheck.toml")).unwrap();
    assert_eq!(config.site.local, Some(dir.path().join("index.html")));
    assert_eq!(config.report.out_dir, Some(dir.path().join("reports")));
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load_with_warnings(Path::new("/nonexistent/sitecheck.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
