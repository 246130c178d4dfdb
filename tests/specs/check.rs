//! Behavioral specs for `sitecheck check`.

use crate::prelude::*;

// =============================================================================
// Local File
// =============================================================================

/// > check --offline reads the local file without network access
#[test]
fn offline_check_of_local_file_passes() {
    sitecheck_cmd()
        .args(["check", "--offline"])
        .current_dir(fixture("site"))
        .assert()
        .success()
        .stdout(predicates::str::contains("COMPREHENSIVE LINK TEST REPORT"))
        .stdout(predicates::str::contains("LOCAL FILE"))
        .stdout(predicates::str::contains("✅ Status: ACCESSIBLE"))
        .stdout(predicates::str::contains("⚠️  No external links tested"))
        .stdout(predicates::str::contains("LIVE WEBSITE").not())
        .stderr(predicates::str::contains("PASS"));
}

/// > Functions called from onclick but never defined are listed
#[test]
fn undefined_functions_are_reported() {
    sitecheck_cmd()
        .args(["check", "--offline"])
        .current_dir(fixture("site"))
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Functions called but not defined: openLoginModal",
        ));
}

/// > A missing local file fails the check
#[test]
fn missing_local_file_fails() {
    let temp = Project::with_config("version = 1\n[site]\nlocal = \"index.html\"\n");

    sitecheck_cmd()
        .args(["check", "--offline"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Error: File not found"))
        .stderr(predicates::str::contains("FAIL"));
}

/// > Nothing to check is a configuration error
#[test]
fn no_sources_is_config_error() {
    let temp = Project::empty();

    sitecheck_cmd()
        .args(["check"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nothing to check"));
}

// =============================================================================
// Output Formats
// =============================================================================

/// > -o json prints the serialized report
#[test]
fn json_output_is_parseable() {
    let output = sitecheck_cmd()
        .args(["check", "--offline", "-o", "json"])
        .current_dir(fixture("site"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["local"]["accessible"], true);
    assert_eq!(json["local"]["links"]["external_links"][0], "https://twitter.com/mybird");
    assert_eq!(json["summary"]["tested"], 0);
    assert!(json.get("live").is_none());
}

/// > -o markdown prints the report document
#[test]
fn markdown_output_has_tables() {
    sitecheck_cmd()
        .args(["check", "--offline", "-o", "markdown"])
        .current_dir(fixture("site"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with("# Website Test Report"))
        .stdout(predicates::str::contains("| Local file | ✅ |"))
        .stdout(predicates::str::contains("## JavaScript Functions"));
}

/// > --out-dir writes JSON, text and Markdown reports
#[test]
fn out_dir_writes_all_reports() {
    let temp = Project::empty();
    temp.file("index.html", r#"<a href="/about">About</a>"#);
    let out = temp.path().join("reports");

    sitecheck_cmd()
        .args(["check", "--offline", "--local", "index.html", "--out-dir"])
        .arg(&out)
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("Reports saved"));

    for ext in ["json", "txt", "md"] {
        assert!(out.join(format!("sitecheck_report.{}", ext)).exists());
    }
}

// =============================================================================
// Live Website
// =============================================================================

/// > Broken external links fail the check
#[test]
fn broken_link_fails_check() {
    let site = site_with_broken_link();
    let temp = Project::empty();

    sitecheck_cmd()
        .args(["check", "--url", &site, "--delay-ms", "0"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("LIVE WEBSITE"))
        .stdout(predicates::str::contains("Working links: 1"))
        .stdout(predicates::str::contains("Broken links: 1"))
        .stdout(predicates::str::contains("BROKEN LINKS DETAILS"))
        .stdout(predicates::str::contains("/gone"))
        .stderr(predicates::str::contains("1 broken external link(s)"));
}

/// > --allow-broken reports broken links without failing
#[test]
fn allow_broken_passes() {
    let site = site_with_broken_link();
    let temp = Project::empty();

    sitecheck_cmd()
        .args(["check", "--url", &site, "--delay-ms", "0", "--allow-broken"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Success rate: 50.0%"));
}

/// > An unreachable live site fails the check
#[test]
fn unreachable_site_fails() {
    let site = serve(&[]);
    let temp = Project::empty();

    sitecheck_cmd()
        .args(["check", "--url", &format!("{}/missing", site)])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("❌ Status: NOT ACCESSIBLE"))
        .stdout(predicates::str::contains("Error: Not Found"));
}

/// > --no-live skips the configured URL
#[test]
fn no_live_skips_configured_url() {
    let temp = Project::with_config(
        "version = 1\n[site]\nurl = \"http://127.0.0.1:9/\"\nlocal = \"index.html\"\n",
    );
    temp.file("index.html", "<p>hello</p>");

    sitecheck_cmd()
        .args(["check", "--no-live"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("LIVE WEBSITE").not());
}

/// > -v prints progress sections to stderr
#[test]
fn verbose_prints_progress() {
    sitecheck_cmd()
        .args(["check", "--offline", "-v"])
        .current_dir(fixture("site"))
        .assert()
        .success()
        .stderr(predicates::str::contains("Configuration:"))
        .stderr(predicates::str::contains("Local file:"));
}
