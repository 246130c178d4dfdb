// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Link extraction from HTML.
//!
//! Works on raw markup with attribute patterns rather than a DOM, so it
//! also sees links inside templates and inline script strings.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Build a pattern for `attr="value"` or `attr='value'` preceded by whitespace.
/// `value` is the character class body for the value (without quotes).
fn attr_pattern(prefix: &str, attr: &str, value_suffix: &str) -> String {
    format!(
        r#"(?i){prefix}\s{attr}\s*=\s*(?:"([^"]+{value_suffix})"|'([^']+{value_suffix})')"#
    )
}

/// Attribute text inside a start tag. A `>` inside a quoted value does not end the tag.
pub(crate) const TAG_ATTRS: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;

fn compile(pattern: &str) -> Regex {
    #[allow(clippy::expect_used)]
    Regex::new(pattern).expect("valid regex pattern")
}

static HREF: LazyLock<Regex> = LazyLock::new(|| compile(&attr_pattern("", "href", "")));
static ONCLICK: LazyLock<Regex> = LazyLock::new(|| compile(&attr_pattern("", "onclick", "")));
static FORM_ACTION: LazyLock<Regex> =
    LazyLock::new(|| compile(&attr_pattern(&format!(r"<form\b{TAG_ATTRS}"), "action", "")));
static IMAGE_SRC: LazyLock<Regex> = LazyLock::new(|| {
    compile(&attr_pattern("", "src", r"\.(?:jpg|jpeg|png|gif|svg|webp)"))
});
static SCRIPT_SRC: LazyLock<Regex> =
    LazyLock::new(|| compile(&attr_pattern(&format!(r"<script\b{TAG_ATTRS}"), "src", "")));
static CSS_HREF: LazyLock<Regex> = LazyLock::new(|| {
    compile(&attr_pattern(&format!(r"<link\b{TAG_ATTRS}"), "href", r"\.css"))
});

/// The quoted value of an attribute match, whichever quote style was used.
fn value<'h>(cap: &Captures<'h>) -> Option<&'h str> {
    cap.get(1).or_else(|| cap.get(2)).map(|m| m.as_str())
}

/// All attribute values matched by `re`, in document order.
fn values(re: &Regex, html: &str) -> Vec<String> {
    re.captures_iter(html).filter_map(|cap| value(&cap).map(String::from)).collect()
}

/// True for `http://` and `https://` targets (scheme case-insensitive).
pub fn is_external(target: &str) -> bool {
    let lower = target.get(..8).unwrap_or(target).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Every `onclick` handler body in the document.
pub fn onclick_handlers(html: &str) -> Vec<String> {
    values(&ONCLICK, html)
}

/// Links found in a page, by category.
///
/// Lists keep duplicates and document order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInventory {
    pub external_links: Vec<String>,
    pub internal_links: Vec<String>,
    pub onclick_handlers: Vec<String>,
    pub form_actions: Vec<String>,
    pub image_sources: Vec<String>,
    pub script_sources: Vec<String>,
    pub css_links: Vec<String>,
}

impl LinkInventory {
    /// Extract every link category from HTML content.
    pub fn extract(html: &str) -> Self {
        let (external_links, internal_links): (Vec<_>, Vec<_>) =
            values(&HREF, html).into_iter().partition(|href| is_external(href));
        let internal_links = internal_links
            .into_iter()
            .filter(|href| !href.starts_with("mailto:") && !href.starts_with("tel:"))
            .collect();

        Self {
            external_links,
            internal_links,
            onclick_handlers: onclick_handlers(html),
            form_actions: values(&FORM_ACTION, html),
            image_sources: values(&IMAGE_SRC, html),
            script_sources: values(&SCRIPT_SRC, html),
            css_links: values(&CSS_HREF, html),
        }
    }

    /// Sum of all category sizes.
    pub fn total(&self) -> usize {
        self.categories().iter().map(|(_, n)| n).sum()
    }

    /// Category names with their counts, in report order.
    pub fn categories(&self) -> [(&'static str, usize); 7] {
        [
            ("external_links", self.external_links.len()),
            ("internal_links", self.internal_links.len()),
            ("onclick_handlers", self.onclick_handlers.len()),
            ("form_actions", self.form_actions.len()),
            ("image_sources", self.image_sources.len()),
            ("script_sources", self.script_sources.len()),
            ("css_links", self.css_links.len()),
        ]
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
