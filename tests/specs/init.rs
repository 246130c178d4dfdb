//! Behavioral specs for `sitecheck init`.

use crate::prelude::*;

/// > sitecheck init creates sitecheck.toml in current directory
#[test]
fn init_creates_config() {
    let temp = Project::empty();

    sitecheck_cmd().args(["init"]).current_dir(temp.path()).assert().success();

    let config = std::fs::read_to_string(temp.path().join("sitecheck.toml")).unwrap();
    assert!(config.starts_with("version = 1"));
}

/// > Refuses to overwrite existing sitecheck.toml without --force
#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = Project::with_config("version = 1\n# existing\n");

    sitecheck_cmd()
        .args(["init"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));
}

/// > --force overwrites existing sitecheck.toml
#[test]
fn init_force_overwrites_existing_config() {
    let temp = Project::with_config("version = 1\n# existing\n");

    sitecheck_cmd().args(["init", "--force"]).current_dir(temp.path()).assert().success();

    let config = std::fs::read_to_string(temp.path().join("sitecheck.toml")).unwrap();
    assert!(!config.contains("# existing"));
}

/// > The generated config is accepted by check
#[test]
fn init_config_is_valid() {
    let temp = Project::empty();
    temp.file("index.html", "<p>hi</p>");

    sitecheck_cmd().args(["init"]).current_dir(temp.path()).assert().success();
    sitecheck_cmd().args(["check", "--offline"]).current_dir(temp.path()).assert().success();
}
