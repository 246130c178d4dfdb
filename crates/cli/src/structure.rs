// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive element inventory.
//!
//! Scans start tags for anchors, buttons and forms. Tag and attribute
//! names are matched case-insensitively.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::TAG_ATTRS;

#[allow(clippy::expect_used)]
static START_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)<(a|button|form)\b({TAG_ATTRS})>")).expect("valid regex pattern")
});

#[allow(clippy::expect_used)]
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("valid regex pattern")
});

/// An interactive element found in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// `<a>` with an `href` or an `onclick`.
    Link { href: Option<String>, onclick: Option<String> },
    /// `<button>` with an `onclick`.
    Button { onclick: String },
    /// `<form>`; method defaults to `GET`.
    Form { action: Option<String>, method: String },
}

/// Elements grouped by kind.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureReport {
    pub links: Vec<Element>,
    pub buttons: Vec<Element>,
    pub forms: Vec<Element>,
}

impl StructureReport {
    /// Scan HTML for interactive elements.
    pub fn scan(html: &str) -> Self {
        let mut report = Self::default();
        for cap in START_TAG.captures_iter(html) {
            let tag = cap[1].to_ascii_lowercase();
            let attrs = parse_attributes(cap.get(2).map_or("", |m| m.as_str()));
            // Empty values count as absent.
            let get = |name: &str| attrs.get(name).filter(|v| !v.is_empty()).cloned();

            match tag.as_str() {
                "a" => {
                    let (href, onclick) = (get("href"), get("onclick"));
                    if href.is_some() || onclick.is_some() {
                        report.links.push(Element::Link { href, onclick });
                    }
                }
                "button" => {
                    if let Some(onclick) = get("onclick") {
                        report.buttons.push(Element::Button { onclick });
                    }
                }
                _ => {
                    let method = attrs.get("method").cloned().unwrap_or_else(|| "GET".to_string());
                    report.forms.push(Element::Form { action: get("action"), method });
                }
            }
        }
        report
    }

    /// All elements: links, then buttons, then forms.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.links.iter().chain(&self.buttons).chain(&self.forms)
    }
}

/// Parse a start tag's attribute text. Later duplicates win.
fn parse_attributes(text: &str) -> HashMap<String, String> {
    ATTRIBUTE
        .captures_iter(text)
        .map(|cap| {
            let name = cap[1].to_ascii_lowercase();
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map_or(String::new(), |m| m.as_str().to_string());
            (name, value)
        })
        .collect()
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
