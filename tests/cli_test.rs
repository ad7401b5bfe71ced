// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Integration tests for the headlint binary.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command running in an empty directory so no user config is picked up.
fn headlint(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("headlint").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("HEADLINT_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"));
    cmd
}

#[test]
fn valid_header_passes() {
    let dir = TempDir::new().unwrap();
    headlint(&dir)
        .args(["check", "feat(auth): add login flow (#42)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("feat(auth): add login flow (#42)"));
}

#[test]
fn pattern_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    headlint(&dir)
        .args(["check", "added some stuff"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[header-pattern]"));
}

#[test]
fn subject_full_stop_fails() {
    let dir = TempDir::new().unwrap();
    headlint(&dir)
        .args(["check", "chore: bump deps. (#7)"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("subject-full-stop"));
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let output = headlint(&dir)
        .args(["--format", "json", "check", "fix: handle empty input (#3)"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn json_output_reports_pattern_mismatch() {
    let dir = TempDir::new().unwrap();
    let output = headlint(&dir)
        .args(["--format", "json", "check", "wip"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["kind"], "pattern-mismatch");
}

#[test]
fn reads_message_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("COMMIT_EDITMSG");
    fs::write(
        &file,
        "docs: explain hooks (#9)\n\n# Please enter the commit message\n",
    )
    .unwrap();

    headlint(&dir)
        .arg("check")
        .arg("--edit")
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn reads_stdin() {
    let dir = TempDir::new().unwrap();
    headlint(&dir)
        .arg("check")
        .write_stdin("test: cover parser (#5)\n")
        .assert()
        .success();

    headlint(&dir)
        .arg("check")
        .write_stdin("Test: cover parser (#5)\n")
        .assert()
        .failure();
}

#[test]
fn strict_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    let message = "feat: add x (#1)\nbody without blank line";

    headlint(&dir).args(["check", message]).assert().success();
    headlint(&dir)
        .args(["--strict", "check", message])
        .assert()
        .failure()
        .stdout(predicate::str::contains("body-leading-blank"));
}

#[test]
fn merge_commits_are_ignored() {
    let dir = TempDir::new().unwrap();
    headlint(&dir)
        .args(["check", "Merge branch 'main' into feature"])
        .assert()
        .success();
}

#[test]
fn custom_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        r#"
[parser]
header_pattern = '^(\w+): (.+)$'
header_correspondence = ["type", "subject"]

[rules]
type-enum = [2, "always", ["task"]]
"#,
    )
    .unwrap();

    headlint(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", "task: do the thing"])
        .assert()
        .success();

    headlint(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", "feat: do the thing"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("type-enum"));
}

#[test]
fn invalid_correspondence_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(
        &config,
        r#"
[parser]
header_pattern = '^(\w+): (.+)$'
header_correspondence = ["type", "scope", "subject"]
"#,
    )
    .unwrap();

    headlint(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", "feat: x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    headlint(&dir).arg("init").assert().success();

    let content = fs::read_to_string(dir.path().join("headlint.toml")).unwrap();
    assert!(content.contains("header_pattern"));

    headlint(&dir).arg("init").assert().failure();
    headlint(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn config_prints_resolved_rules() {
    let dir = TempDir::new().unwrap();
    headlint(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("header-max-length"))
        .stdout(predicate::str::contains("refac"));
}

#[test]
fn config_prints_json() {
    let dir = TempDir::new().unwrap();
    let output = headlint(&dir)
        .args(["--format", "json", "config"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["rules"]["header-max-length"][2], 72);
    assert_eq!(json["rules"]["subject-max-length"][2], 50);
}

#[test]
fn shows_version() {
    let dir = TempDir::new().unwrap();
    headlint(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
