//! Smoke tests to verify CLI wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_config_flags() {
    let mut cmd = Command::cargo_bin("rosterctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Path to config file"))
        .stdout(predicate::str::contains("Postgres connection URL"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("rosterctl").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rosterctl"));
}

#[test]
fn test_unparseable_database_url_exits_with_code_1() {
    let mut cmd = Command::cargo_bin("rosterctl").unwrap();
    cmd.arg("--database-url").arg("not-a-connection-url");
    cmd.write_stdin("");

    cmd.assert().failure().code(1);
}

#[test]
fn test_missing_explicit_config_exits_with_code_1() {
    let mut cmd = Command::cargo_bin("rosterctl").unwrap();
    cmd.arg("--config").arg("/nonexistent/rosterctl.toml");
    cmd.write_stdin("");

    cmd.assert().failure().code(1);
}
