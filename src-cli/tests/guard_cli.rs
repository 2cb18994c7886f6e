//! End-to-end tests for the easycheck binary.
//!
//! These exercise the process-level contract the invoking package manager
//! relies on: exit codes and the error-stream diagnostics.

use assert_cmd::Command;
use predicates::prelude::*;

fn easycheck() -> Command {
    Command::cargo_bin("easycheck").unwrap()
}

#[test]
fn darwin_passes_silently() {
    easycheck()
        .args(["check", "--platform", "darwin"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn linux_passes_silently() {
    easycheck()
        .args(["check", "--platform", "linux"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_token_passes() {
    easycheck()
        .args(["check", "--platform", ""])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn win32_fails_with_two_diagnostic_lines() {
    let assert = easycheck()
        .args(["check", "--platform", "win32"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 2, "expected exactly two lines, got: {stderr:?}");
    assert!(lines[0].contains("easycheck"));
    assert!(lines[0].contains("POSIX compatible systems"));
    assert!(lines[1].contains("easycheck"));
    assert!(lines[1].contains("alternatives such as"));
}

#[test]
fn check_is_deterministic() {
    let first = easycheck()
        .args(["check", "--platform", "win32"])
        .assert()
        .failure();
    let second = easycheck()
        .args(["check", "--platform", "win32"])
        .assert()
        .failure();
    assert_eq!(first.get_output().stderr, second.get_output().stderr);
    assert_eq!(
        first.get_output().status.code(),
        second.get_output().status.code()
    );
}

#[test]
fn quiet_suppresses_diagnostics_but_keeps_exit_code() {
    easycheck()
        .args(["check", "--platform", "win32", "--quiet"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn json_reports_unsupported_platform() {
    easycheck()
        .args(["check", "--platform", "win32", "--json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(r#""platform": "win32""#))
        .stdout(predicate::str::contains(r#""supported": false"#));
}

#[test]
fn json_reports_supported_platform() {
    easycheck()
        .args(["check", "--platform", "linux", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""supported": true"#))
        .stderr(predicate::str::is_empty());
}

#[test]
fn product_name_appears_in_diagnostics() {
    easycheck()
        .args(["check", "--platform", "win32", "--product", "Easy Checks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Easy Checks only supports POSIX compatible systems.",
        ));
}

/// The install-hook invocation: no arguments at all. Test hosts are POSIX,
/// so this must exit zero and stay silent.
#[cfg(unix)]
#[test]
fn bare_invocation_passes_on_posix_hosts() {
    easycheck()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    easycheck().arg("frobnicate").assert().failure().code(2);
}

#[test]
fn version_prints_tool_name() {
    easycheck()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("easycheck"));
}
