//! Tests for `hostbook show`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_show_server() {
    let t = Test::with_inventory();

    let output = t.run(&["show", "myserver1"]);
    assert_success(&output);
    assert_stdout_contains(&output, "server myserver1");
    assert_stdout_contains(&output, "first test server");
    assert_stdout_contains(&output, "Jane Doe");
    assert_stdout_excludes(&output, "mypass1");
}

#[test]
fn test_show_group_lists_resolved_servers() {
    let t = Test::new();
    t.write(DEFINITION_FILE, OVERLAPPING);

    let output = t.run(&["show", "g3"]);
    assert_success(&output);
    assert_stdout_contains(&output, "server group g3");
    assert_stdout_contains(&output, "g1, g2");
    assert_stdout_contains(&output, "• s3");
}

#[test]
fn test_show_json() {
    let t = Test::new();
    t.write(DEFINITION_FILE, OVERLAPPING);

    let output = t.run(&["show", "g4", "--json"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "server_group");
    assert_eq!(value["server_group"]["members"][1], "g3");
    assert_eq!(value["servers"], serde_json::json!(["s4", "s1", "s2", "s3"]));
}

#[test]
fn test_show_does_not_open_vault() {
    let t = Test::with_encrypted_inventory();

    // No password is available, yet show succeeds.
    t.hostbook()
        .args(["show", "myserver2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second test server"));
}

#[test]
fn test_show_unknown() {
    let t = Test::with_inventory();

    let output = t.run(&["show", "ghost"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "'ghost' not found");
}
