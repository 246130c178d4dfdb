// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP probing.
//!
//! A probe issues a GET request and classifies the outcome:
//! - `success`: 2xx/3xx final response
//! - `http_error`: the server answered with status >= 400
//! - `url_error`: unparseable URL, DNS/connect failure, timeout, redirect loop
//! - `error`: anything else (e.g. the body could not be read)

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Outcome class of a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    Success,
    HttpError,
    UrlError,
    Error,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProbeStatus::Success => "success",
            ProbeStatus::HttpError => "http_error",
            ProbeStatus::UrlError => "url_error",
            ProbeStatus::Error => "error",
        })
    }
}

/// Result of probing one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub status: ProbeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl ProbeResult {
    pub fn success(status_code: u16, content_type: Option<String>, elapsed: Duration) -> Self {
        Self {
            status: ProbeStatus::Success,
            status_code: Some(status_code),
            content_type,
            error: None,
            elapsed_ms: millis(elapsed),
        }
    }

    pub fn http_error(status_code: u16, reason: &str, elapsed: Duration) -> Self {
        Self {
            status: ProbeStatus::HttpError,
            status_code: Some(status_code),
            content_type: None,
            error: Some(reason.to_string()),
            elapsed_ms: millis(elapsed),
        }
    }

    pub fn url_error(reason: impl Into<String>, elapsed: Duration) -> Self {
        Self::failure(ProbeStatus::UrlError, reason.into(), elapsed)
    }

    pub fn error(message: impl Into<String>, elapsed: Duration) -> Self {
        Self::failure(ProbeStatus::Error, message.into(), elapsed)
    }

    fn failure(status: ProbeStatus, error: String, elapsed: Duration) -> Self {
        Self {
            status,
            status_code: None,
            content_type: None,
            error: Some(error),
            elapsed_ms: millis(elapsed),
        }
    }

    /// True when the URL answered successfully.
    pub fn accessible(&self) -> bool {
        self.status == ProbeStatus::Success
    }

    /// Error text for display, `Unknown error` when absent.
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// A fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    pub status_code: u16,
    pub content_type: Option<String>,
    /// Body decoded as UTF-8 with invalid sequences replaced.
    pub content: String,
    /// Time until the full body was read.
    pub elapsed: Duration,
}

impl Page {
    pub fn to_result(&self) -> ProbeResult {
        ProbeResult::success(self.status_code, self.content_type.clone(), self.elapsed)
    }
}

/// Something that can fetch URLs.
pub trait Probe: Send + Sync {
    /// Fetch a page, or return the failed probe result.
    fn fetch(&self, url: &str, timeout: Duration) -> std::result::Result<Page, ProbeResult>;

    /// Probe a URL, discarding the body.
    fn probe(&self, url: &str, timeout: Duration) -> ProbeResult {
        match self.fetch(url, timeout) {
            Ok(page) => page.to_result(),
            Err(result) => result,
        }
    }
}

/// Parse a page URL given on the command line or in config.
pub fn parse_url(url: &str) -> Result<url::Url> {
    url::Url::parse(url).map_err(|source| Error::InvalidUrl { url: url.to_string(), source })
}

/// Blocking HTTP probe backed by reqwest.
pub struct HttpProbe {
    client: reqwest::blocking::Client,
}

impl HttpProbe {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Probe for HttpProbe {
    fn fetch(&self, url: &str, timeout: Duration) -> std::result::Result<Page, ProbeResult> {
        let start = Instant::now();
        if let Err(e) = url::Url::parse(url) {
            return Err(ProbeResult::url_error(format!("{}: {}", e, url), start.elapsed()));
        }

        tracing::debug!(url, timeout_secs = timeout.as_secs_f64(), "probing");
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| classify(&e, start.elapsed()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            tracing::debug!(url, status = status.as_u16(), "http error");
            return Err(ProbeResult::http_error(status.as_u16(), reason, start.elapsed()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.bytes().map_err(|e| classify(&e, start.elapsed()))?;

        Ok(Page {
            status_code: status.as_u16(),
            content_type,
            content: String::from_utf8_lossy(&body).into_owned(),
            elapsed: start.elapsed(),
        })
    }
}

/// Map a transport error onto a probe result.
fn classify(e: &reqwest::Error, elapsed: Duration) -> ProbeResult {
    let message = error_chain(e);
    if e.is_connect() || e.is_timeout() || e.is_builder() || e.is_redirect() {
        ProbeResult::url_error(message, elapsed)
    } else {
        ProbeResult::error(message, elapsed)
    }
}

/// Join an error and its sources, e.g. `error sending request: connection refused`.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Per-run memo of probe results.
///
/// A URL linked from both the live site and the local file is requested once,
/// even when concurrent probes ask for it at the same time.
pub struct ProbeCache<'a> {
    probe: &'a dyn Probe,
    results: DashMap<String, Arc<OnceLock<ProbeResult>>>,
}

impl<'a> ProbeCache<'a> {
    pub fn new(probe: &'a dyn Probe) -> Self {
        Self { probe, results: DashMap::new() }
    }

    /// Probe a URL, reusing an earlier result. Returns `(result, cached)`.
    pub fn probe(&self, url: &str, timeout: Duration) -> (ProbeResult, bool) {
        // Clone the cell out so the shard lock is released before probing.
        let cell = self.results.entry(url.to_string()).or_default().clone();
        let mut requested = false;
        let result = cell.get_or_init(|| {
            requested = true;
            self.probe.probe(url, timeout)
        });
        (result.clone(), !requested)
    }

    /// Fetch a page through the underlying probe (not cached).
    pub fn fetch(&self, url: &str, timeout: Duration) -> std::result::Result<Page, ProbeResult> {
        self.probe.fetch(url, timeout)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
