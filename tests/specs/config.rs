//! Behavioral specs for config discovery and validation.

use crate::prelude::*;

/// > An unsupported config version is a configuration error
#[test]
fn unsupported_version_is_config_error() {
    sitecheck_cmd()
        .args(["check"])
        .current_dir(fixture("bad-config"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version"));
}

/// > Unknown keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let temp = Project::with_config("version = 1\n[site]\nlocal = \"index.html\"\nbogus = 1\n");
    temp.file("index.html", "<p>hi</p>");

    sitecheck_cmd()
        .args(["check", "--offline"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("site.bogus"));
}

/// > -C selects a config file explicitly
#[test]
fn explicit_config_path() {
    let temp = Project::empty();
    temp.file("conf/site.toml", "version = 1\n[site]\nlocal = \"page.html\"\n");
    temp.file("conf/page.html", "<p>hi</p>");

    sitecheck_cmd()
        .args(["-C", "conf/site.toml", "check", "--offline"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("page.html"));
}

/// > SITECHECK_CONFIG names a config that must exist
#[test]
fn missing_config_from_env_is_config_error() {
    let temp = Project::empty();

    sitecheck_cmd()
        .args(["check"])
        .env("SITECHECK_CONFIG", "missing.toml")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}
