// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Link probe runner with error recovery.
//!
//! Probes links on a bounded rayon pool, isolating panics so one bad
//! probe doesn't stop the others. Results keep the input order.

use std::time::Duration;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::probe::{ProbeCache, ProbeResult};

/// Configuration for the link runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Concurrent probes (1 = sequential).
    pub concurrency: usize,
    /// Per-probe timeout.
    pub timeout: Duration,
    /// Pause after each network probe.
    pub delay: Duration,
}

/// Outcome for a single link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkResult {
    pub url: String,
    pub result: ProbeResult,
    /// Result reused from an earlier probe in the same run.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cached: bool,
}

/// Probes a list of links.
pub struct LinkRunner {
    config: RunnerConfig,
}

impl LinkRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Probe every URL and return results in input order.
    pub fn run(&self, urls: &[String], cache: &ProbeCache<'_>) -> Vec<LinkResult> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.concurrency.max(1))
            .thread_name(|i| format!("sitecheck-probe-{}", i))
            .build();

        match pool {
            Ok(pool) => {
                pool.install(|| urls.par_iter().map(|url| self.probe_one(url, cache)).collect())
            }
            Err(e) => {
                tracing::warn!(error = %e, "probe pool unavailable, probing sequentially");
                urls.iter().map(|url| self.probe_one(url, cache)).collect()
            }
        }
    }

    fn probe_one(&self, url: &str, cache: &ProbeCache<'_>) -> LinkResult {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            cache.probe(url, self.config.timeout)
        }));

        let (result, cached) = match outcome {
            Ok(pair) => pair,
            Err(_) => (
                ProbeResult::error("Internal error: probe panicked", Duration::ZERO),
                false,
            ),
        };

        if result.accessible() {
            tracing::debug!(url, status = ?result.status_code, cached, "link ok");
        } else {
            tracing::info!(url, error = result.error_text(), cached, "link broken");
        }

        if !cached && !self.config.delay.is_zero() {
            std::thread::sleep(self.config.delay);
        }

        LinkResult { url: url.to_string(), result, cached }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
