//! Focused CLI argument parsing tests.
//!
//! Tests that verify command-line argument parsing works correctly without
//! touching any project configuration.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn portal(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("portal").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["--no-color", "--project"])
        .arg(project.path());
    cmd
}

#[test]
fn version_command_succeeds() {
    let project = TempDir::new().unwrap();
    portal(&project)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portal-cli"));
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("portal")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portal"));
}

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("portal")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("role-based access control"));
}

#[test]
fn check_requires_permission() {
    let project = TempDir::new().unwrap();
    portal(&project)
        .args(["check", "--role", "admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn unknown_role_rejected() {
    let project = TempDir::new().unwrap();
    portal(&project)
        .args(["check", "--role", "auditor", "projects.view"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown role"));
}

#[test]
fn role_names_are_case_sensitive() {
    let project = TempDir::new().unwrap();
    portal(&project)
        .args(["route", "--role", "Admin", "/team"])
        .assert()
        .failure();
}

#[test]
fn check_mode_rejects_unknown_value() {
    let project = TempDir::new().unwrap();
    portal(&project)
        .args(["check", "--role", "user", "--mode", "most", "logs.view"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn permissions_requires_role() {
    let project = TempDir::new().unwrap();
    portal(&project)
        .arg("permissions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--role"));
}

#[test]
fn features_help_shows_options() {
    Command::cargo_bin("portal")
        .unwrap()
        .args(["features", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--role"))
        .stdout(predicate::str::contains("--format"));
}
