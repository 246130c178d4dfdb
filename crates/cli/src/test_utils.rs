// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use crate::probe::{Page, Probe, ProbeResult};

/// Creates a temp directory with a minimal sitecheck.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sitecheck.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// In-memory probe for tests.
///
/// URLs in `pages` are served with status 200 and the given body; URLs in
/// `broken` return 404; every other URL fails to connect.
#[derive(Default)]
pub struct FakeProbe {
    pub pages: Vec<(String, String)>,
    pub broken: Vec<String>,
    pub requests: std::sync::Mutex<Vec<String>>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.push((url.to_string(), body.to_string()));
        self
    }

    pub fn ok(self, url: &str) -> Self {
        self.page(url, "")
    }

    pub fn broken(mut self, url: &str) -> Self {
        self.broken.push(url.to_string());
        self
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

impl Probe for FakeProbe {
    fn fetch(&self, url: &str, _timeout: Duration) -> Result<Page, ProbeResult> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some((_, body)) = self.pages.iter().find(|(u, _)| u == url) {
            return Ok(Page {
                status_code: 200,
                content_type: Some("text/html".to_string()),
                content: body.clone(),
                elapsed: Duration::from_millis(12),
            });
        }
        if self.broken.iter().any(|u| u == url) {
            return Err(ProbeResult::http_error(404, "Not Found", Duration::from_millis(3)));
        }
        Err(ProbeResult::url_error("connection refused", Duration::from_millis(1)))
    }
}

/// Starts a minimal HTTP server on a loopback port and returns its base URL.
///
/// `routes` maps request paths to `(status, body)`; unknown paths get 404.
/// The server thread runs until the test process exits.
pub fn serve(routes: &[(&str, u16, &str)]) -> String {
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;

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
            // Drain headers
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
