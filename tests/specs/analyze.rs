//! Behavioral specs for `sitecheck analyze`.

use crate::prelude::*;

/// > analyze --local inventories the page structure
#[test]
fn analyze_local_file() {
    sitecheck_cmd()
        .args(["analyze", "--local", "index.html"])
        .current_dir(fixture("site"))
        .assert()
        .success()
        .stdout(predicates::str::contains("CONNECTIVITY TEST"))
        .stdout(predicates::str::contains("STRUCTURE ANALYSIS"))
        .stdout(predicates::str::contains("Interactive buttons: 2"))
        .stdout(predicates::str::contains("Forms: 1"));
}

/// > Missing expected functions are potential issues
#[test]
fn analyze_reports_missing_expected_functions() {
    let temp = Project::with_config(
        "version = 1\n[javascript]\nexpected_functions = [\"toggleCart\", \"placeBid\"]\n",
    );
    temp.file("index.html", r#"<button onclick="toggleCart()">Cart</button>"#);

    sitecheck_cmd()
        .args(["analyze", "--local", "index.html"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Missing expected functions: placeBid"));
}

/// > analyze of a live page reports response time
#[test]
fn analyze_live_page() {
    let site = serve(&[("/", 200, r#"<a href="https://twitter.com/mybird">t</a>"#)]);
    let temp = Project::empty();

    let output = sitecheck_cmd()
        .args(["analyze", "--url", &format!("{}/", site), "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["connectivity"], "success");
    assert_eq!(json["status_code"], 200);
    assert_eq!(json["links_found"], 1);
    assert!(json["response_time_secs"].is_number());
}

/// > An HTTP error stops the analysis and fails
#[test]
fn analyze_http_error_fails() {
    let site = serve(&[]);
    let temp = Project::empty();

    sitecheck_cmd()
        .args(["analyze", "--url", &format!("{}/", site)])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("HTTP Error: 404 - Not Found"))
        .stdout(predicates::str::contains("❌ Website has connectivity issues"));
}

/// > An invalid URL is a usage error
#[test]
fn analyze_invalid_url_is_config_error() {
    let temp = Project::empty();

    sitecheck_cmd()
        .args(["analyze", "--url", "not a url"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid URL"));
}

/// > A closed stdout ends the run with an error instead of a panic
#[test]
fn closed_stdout_is_not_a_panic() {
    let mut child = sitecheck_cmd()
        .args(["analyze", "--local", "index.html", "-o", "json"])
        .current_dir(fixture("site"))
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert_ne!(output.status.code(), Some(101), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
}
