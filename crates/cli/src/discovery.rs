// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for sitecheck.toml.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;
use crate::error::{Error, Result};

/// Pick the config file to load.
///
/// An explicit path (from `-C` or `SITECHECK_CONFIG`) must exist; otherwise
/// discovery starts at `cwd`. `None` means built-in defaults.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(Error::Config { path, message: "config file not found".to_string() })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// Find sitecheck.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
