// End-to-end tests for the decltree binary
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn cli_prints_listing_for_valid_input() {
    let file = "tests/cli_valid_input.decl";
    fs::write(file, "package a.b; import x.y; import z;").unwrap();

    let mut cmd = Command::cargo_bin("decltree").unwrap();
    cmd.arg(file);
    cmd.assert()
        .success()
        .stdout("Program\n    Package: a.b\n    Import: x.y\n    Import: z\n");

    let _ = fs::remove_file(file);
}

#[test]
fn cli_reports_syntax_errors_with_nonzero_exit() {
    let file = "tests/cli_bad_input.decl";
    fs::write(file, "import ;").unwrap();

    let mut cmd = Command::cargo_bin("decltree").unwrap();
    cmd.arg(file);
    cmd.assert()
        .failure()
        .stderr(contains("Syntax error").and(contains("line 1")));

    let _ = fs::remove_file(file);
}

#[test]
fn cli_rejects_missing_file() {
    let mut cmd = Command::cargo_bin("decltree").unwrap();
    cmd.arg("tests/no_such_file.decl");
    cmd.assert().failure().stderr(contains("not found"));
}

#[test]
fn cli_requires_exactly_one_argument() {
    let mut cmd = Command::cargo_bin("decltree").unwrap();
    cmd.assert().failure().stderr(contains("Usage:"));
}
