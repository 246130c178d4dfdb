// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;

#[parameterized(
    zero = { 0, "0" },
    small = { 999, "999" },
    thousand = { 1000, "1,000" },
    page = { 84231, "84,231" },
    million = { 1234567, "1,234,567" },
)]
fn thousands_separator(n: usize, expected: &str) {
    assert_eq!(thousands(n), expected);
}

#[parameterized(
    bytes = { 512, "512 B" },
    kilobytes = { 2048, "2.0 KB" },
    megabytes = { 3 * 1024 * 1024, "3.0 MB" },
)]
fn human_readable_bytes(bytes: u64, expected: &str) {
    assert_eq!(human_bytes(bytes), expected);
}
