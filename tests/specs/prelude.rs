//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing sitecheck CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the sitecheck binary
pub fn sitecheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitecheck"));
    cmd.env_remove("SITECHECK_CONFIG")
        .env_remove("SITECHECK_VERBOSE")
        .env_remove("SITECHECK_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Scratch project directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Empty project; a `.git` marker stops config discovery here.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with a sitecheck.toml.
    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("sitecheck.toml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
}

/// Starts a loopback HTTP server and returns its base URL.
///
/// `routes` maps request paths to `(status, body)`; unknown paths get 404.
pub fn serve(routes: &[(&str, u16, &str)]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: Vec<(String, u16, String)> = routes
        .iter()
        .map(|(path, status, body)| (path.to_string(), *status, body.to_string()))
        .collect();

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 2).unwrap_or(false) {
                line.clear();
            }
            let path = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
            let (status, body) = routes
                .iter()
                .find(|(p, _, _)| *p == path)
                .map(|(_, s, b)| (*s, b.clone()))
                .unwrap_or((404, "not found".to_string()));
            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

/// A live site whose page links to one working and one broken URL.
///
/// Returns the page URL.
pub fn site_with_broken_link() -> String {
    let links = serve(&[("/ok", 200, "fine")]);
    let page = format!(
        r#"<html><body>
<a href="{links}/ok">Working</a>
<a href="{links}/gone">Gone</a>
<button onclick="toggleCart()">Cart</button>
</body></html>"#
    );
    let site = serve(&[("/", 200, page.as_str())]);
    format!("{}/", site)
}
