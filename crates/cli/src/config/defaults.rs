// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `Default` impls.

/// Supported config file version.
pub const CONFIG_VERSION: u32 = 1;

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "sitecheck.toml";

/// HTTP client defaults.
pub mod http {
    /// Timeout for fetching the page under test (seconds).
    pub const PAGE_TIMEOUT_SECS: u64 = 10;

    /// Timeout for each external link probe (seconds).
    pub const LINK_TIMEOUT_SECS: u64 = 5;

    /// Politeness delay after each link probe (milliseconds).
    pub const DELAY_MS: u64 = 500;

    /// Concurrent link probes.
    pub const CONCURRENCY: usize = 1;

    /// User-Agent sent with every request.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Link Checker Bot)";
}

/// Link check defaults.
pub mod check {
    /// External links probed per source, to stay clear of rate limits.
    pub const MAX_LINKS: usize = 10;
}

/// Analysis thresholds.
pub mod thresholds {
    /// HTML size above which the page is flagged (KB).
    pub const MAX_HTML_KB: f64 = 500.0;

    /// Inline `<style>` blocks before recommending external CSS.
    pub const MAX_INLINE_STYLES: usize = 5;

    /// Inline `<script>` blocks before recommending external JS.
    pub const MAX_INLINE_SCRIPTS: usize = 3;

    /// Response time considered slow (seconds). Also the "good" load bound.
    pub const SLOW_RESPONSE_SECS: f64 = 3.0;

    /// Upper bound for an "acceptable" load (seconds).
    pub const ACCEPTABLE_LOAD_SECS: f64 = 5.0;

    /// Page size before recommending code splitting (bytes).
    pub const LARGE_PAGE_BYTES: usize = 100_000;

    /// Link count before recommending automated link checking.
    pub const MANY_LINKS: usize = 20;

    /// Button count before recommending UI testing.
    pub const MANY_BUTTONS: usize = 15;
}

/// Report output defaults.
pub mod report {
    /// Base file name for written reports.
    pub const BASENAME: &str = "sitecheck_report";
}

/// Function names an interactive page is expected to call from `onclick`.
pub fn expected_functions() -> Vec<String> {
    [
        "switchSection",
        "toggleAdminAccess",
        "toggleWalletOptions",
        "connectWallet",
        "createTrade",
        "addNewCard",
        "saveSettings",
        "toggleCart",
        "checkout",
        "switchAdminTab",
        "addToCart",
        "placeBid",
        "acceptTrade",
        "declineTrade",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
