// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JavaScript function inventory.
//!
//! Matches function names called from `onclick` handlers against
//! `function name(` definitions in the same document. Functions defined
//! in external scripts are not visible here and show up as missing.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::onclick_handlers;

#[allow(clippy::expect_used)]
static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\(").expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfunction\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*\(").expect("valid regex pattern")
});

/// Function inventory for one page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsAnalysis {
    /// Number of `onclick` handlers (including ones without a call).
    pub onclick_handlers: usize,
    /// Function names called from handlers.
    pub called: BTreeSet<String>,
    /// Function names defined with `function name(`.
    pub defined: BTreeSet<String>,
    /// Called but not defined in this document.
    pub missing: BTreeSet<String>,
}

impl JsAnalysis {
    pub fn analyze(html: &str) -> Self {
        let handlers = onclick_handlers(html);
        let called: BTreeSet<String> =
            handlers.iter().filter_map(|h| called_function(h)).map(String::from).collect();
        let defined: BTreeSet<String> =
            DEFINITION.captures_iter(html).map(|cap| cap[1].to_string()).collect();
        let missing = called.difference(&defined).cloned().collect();

        Self { onclick_handlers: handlers.len(), called, defined, missing }
    }

    /// Expected functions that no handler calls, in the given order.
    pub fn missing_expected<'a>(&self, expected: &'a [String]) -> Vec<&'a str> {
        expected
            .iter()
            .filter(|name| !self.called.contains(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// True when every called function has a definition.
    pub fn all_defined(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Name of the function a handler starts by calling, if any.
pub fn called_function(handler: &str) -> Option<&str> {
    CALL.captures(handler).and_then(|cap| cap.get(1)).map(|m| m.as_str())
}

#[cfg(test)]
#[path = "javascript_tests.rs"]
mod tests;
