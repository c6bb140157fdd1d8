//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
    assert_stdout_contains(&output, "list");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostbook"));
}

#[test]
fn test_verbose_flag_logs_to_stderr() {
    let t = Test::with_inventory();

    let output = t.run(&["--verbose", "list", "--json"]);
    assert_success(&output);
    assert_stderr_contains(&output, "definition file loaded");
    // stdout stays parseable
    let _: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "hostbook");
}

#[test]
fn test_completions_need_no_definition() {
    let t = Test::new();

    t.cmd().args(["completions", "zsh"]).assert().success();
}

#[test]
fn test_missing_definition_file() {
    let t = Test::new();

    t.hostbook()
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot open definition file"));
}

#[test]
fn test_format_error_exits_1() {
    let t = Test::new();
    t.write(
        DEFINITION_FILE,
        "servers:\n  s1: {description: d}\nserver_groups:\n  s1: {description: d, members: [s1]}\n",
    );

    t.hostbook()
        .arg("groups")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("s1"));
}

#[test]
fn test_cycle_reported_with_chain() {
    let t = Test::new();
    t.write(
        DEFINITION_FILE,
        "servers:\n  s1: {description: d}\nserver_groups:\n  a: {description: d, members: [b]}\n  b: {description: d, members: [a]}\n",
    );

    t.hostbook()
        .args(["list", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a -> b -> a"));
}
