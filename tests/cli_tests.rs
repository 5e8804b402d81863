//! Command-line surface tests.
//!
//! Only flags that exit before the terminal is taken over are exercised here.

use assert_cmd::Command;
use predicates::prelude::*;

fn pomotick() -> Command {
    Command::cargo_bin("pomotick").unwrap()
}

#[test]
fn test_help_lists_dev_flag() {
    pomotick()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dev"))
        .stdout(predicate::str::contains("1 minute = 1 second"));
}

#[test]
fn test_version() {
    pomotick()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    pomotick()
        .arg("--verbose")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_subcommands_are_rejected() {
    pomotick().arg("start").assert().failure().code(2);
}
