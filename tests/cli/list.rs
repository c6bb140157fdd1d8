//! Tests for `hostbook list`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_list_default_group() {
    let t = Test::with_inventory();

    let output = t.list(None);
    assert_success(&output);
    assert_stdout_contains(&output, "myserver1");
    assert_stdout_contains(&output, "myserver2");
    assert_stdout_contains(&output, "Jane Doe");
}

#[test]
fn test_list_masks_secrets() {
    let t = Test::with_inventory();

    let output = t.list(Some("myserver1"));
    assert_success(&output);
    assert_stdout_contains(&output, "********");
    assert_stdout_excludes(&output, "mypass1");
    assert_stdout_excludes(&output, "myserver2");
}

#[test]
fn test_list_show_secrets() {
    let t = Test::with_inventory();

    let output = t.run(&["list", "myserver2", "--show-secrets"]);
    assert_success(&output);
    assert_stdout_contains(&output, "mypass2");
    assert_stdout_contains(&output, "10.11.12.14");
}

#[test]
fn test_list_json_default_equals_named_group() {
    let t = Test::with_inventory();

    let default = t.list_json(&["--show-secrets"]);
    let named = t.list_json(&["mygroup1", "--show-secrets"]);
    assert_eq!(default, named);

    let servers = default.as_array().unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0]["nickname"], "myserver1");
    assert_eq!(servers[0]["contact_name"], "Jane Doe");
    assert_eq!(servers[0]["secrets"]["password"], "mypass1");
    assert_eq!(servers[1]["nickname"], "myserver2");
    assert_eq!(servers[1]["secrets"]["host"], "10.11.12.14");
}

#[test]
fn test_list_json_masks_secrets() {
    let t = Test::with_inventory();

    let servers = t.list_json(&["myserver1"]);
    assert_eq!(servers[0]["secrets"]["password"], "********");
    assert_eq!(servers[0]["secrets"]["username"], "********");
}

#[test]
fn test_list_keeps_order_and_deduplicates() {
    let t = Test::new();
    t.write(DEFINITION_FILE, OVERLAPPING);

    let servers = t.list_json(&["g4"]);
    let nicknames: Vec<&str> = servers
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["nickname"].as_str().unwrap())
        .collect();
    assert_eq!(nicknames, ["s4", "s1", "s2", "s3"]);
}

#[test]
fn test_list_without_vault_prints_metadata_only() {
    let t = Test::new();
    t.write(DEFINITION_FILE, OVERLAPPING);

    let output = t.list(Some("g3"));
    assert_success(&output);
    assert_stdout_contains(&output, "s1");
    assert_stdout_excludes(&output, "Secrets");

    let servers = t.list_json(&["g3"]);
    assert!(servers[0].get("secrets").is_none());
}

#[test]
fn test_list_all() {
    let t = Test::new();
    t.write(DEFINITION_FILE, OVERLAPPING);

    let servers = t.list_json(&["--all"]);
    assert_eq!(servers.as_array().unwrap().len(), 4);
}

#[test]
fn test_list_unknown_nickname() {
    let t = Test::with_inventory();

    t.hostbook()
        .args(["list", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'nope' not found"))
        .stderr(predicate::str::contains("hostbook list --all"));
}

#[test]
fn test_list_without_default() {
    let t = Test::new();
    t.write(DEFINITION_FILE, "servers:\n  s1: {description: only}\n");

    t.hostbook()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no default"));
}

#[test]
fn test_list_missing_secret_entry() {
    let t = Test::with_inventory();
    t.write(VAULT_FILE, "secrets:\n  myserver1: {password: x}\n");

    t.hostbook()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("server 'myserver2' not found in vault file"));
}

#[test]
fn test_list_encrypted_vault_with_env_password() {
    let t = Test::with_encrypted_inventory();

    let output = t.run_with_password(PASSWORD, &["list", "--show-secrets"]);
    assert_success(&output);
    assert_stdout_contains(&output, "mypass1");
}

#[test]
fn test_list_encrypted_vault_without_password() {
    let t = Test::with_encrypted_inventory();

    let output = t.list(None);
    assert_failure(&output);
    assert_stderr_contains(&output, "no password available");
    assert_stderr_contains(&output, "HOSTBOOK_VAULT_PASSWORD");
}

#[test]
fn test_list_encrypted_vault_wrong_password() {
    let t = Test::with_encrypted_inventory();

    let output = t.run_with_password("wrong", &["list"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot decrypt vault file");
}
