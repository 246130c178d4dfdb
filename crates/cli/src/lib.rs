// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Website link, JavaScript and performance checker.
//!
//! The library half of `sitecheck`. The binary wires these modules
//! together behind the `check`, `analyze` and `init` commands.

pub mod analyze;
pub mod check;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod javascript;
pub mod output;
pub mod performance;
pub mod probe;
pub mod report;
pub mod resources;
pub mod runner;
pub mod structure;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
