// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sitecheck.

use std::path::PathBuf;

/// Library error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file could not be parsed or failed validation.
    #[error("config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// No source (live URL or local file) is enabled for a run.
    #[error("nothing to check: enable a live URL or a local file")]
    NoSources,

    /// A configured URL is not a valid absolute URL.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Report serialization failed.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem error with the path involved.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Exit code for this error when it terminates the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config { .. } | Error::NoSources | Error::InvalidUrl { .. } => {
                crate::cli::EXIT_CONFIG
            }
            _ => crate::cli::EXIT_INTERNAL,
        }
    }
}

/// Result alias for sitecheck operations.
pub type Result<T> = std::result::Result<T, Error>;
