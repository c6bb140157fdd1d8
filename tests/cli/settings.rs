//! Tests for `.hostbook.toml` settings and the definition file lookup.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_no_definition_file_given() {
    let t = Test::new();

    t.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no definition file given"))
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn test_definition_from_env() {
    let t = Test::with_inventory();

    t.cmd()
        .env("HOSTBOOK_FILE", DEFINITION_FILE)
        .args(["list", "myserver1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("myserver1"));
}

#[test]
fn test_definition_from_settings_file() {
    let t = Test::new();
    t.write("conf/servers.yaml", DEFINITION);
    t.write("conf/vault.yml", VAULT);
    t.write(".hostbook.toml", "definition = \"conf/servers.yaml\"\n");

    t.cmd()
        .args(["list", "myserver2", "--show-secrets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mypass2"));
}

#[test]
fn test_file_flag_overrides_settings() {
    let t = Test::with_inventory();
    t.write("other.yaml", OVERLAPPING);
    t.write(".hostbook.toml", "definition = \"other.yaml\"\n");

    t.hostbook()
        .args(["list", "myserver1"])
        .assert()
        .success();
}

#[test]
fn test_settings_schema_rejects_user_defined() {
    let t = Test::with_inventory();
    t.write(
        "schema/server.yaml",
        "type: object\nrequired: [port]\nproperties:\n  port: {type: integer}\n",
    );
    t.write(
        ".hostbook.toml",
        "[schemas]\nserver_user_defined = \"schema/server.yaml\"\n",
    );

    t.hostbook()
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("user_defined"))
        .stderr(predicate::str::contains("myserver1"));
}

#[test]
fn test_settings_vault_schema() {
    let t = Test::with_inventory();
    t.write("vault.schema.json", r#"{"type": "object", "required": ["token"]}"#);
    t.write(
        ".hostbook.toml",
        "[schemas]\nvault_server = \"vault.schema.json\"\n",
    );

    let output = t.run(&["list"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "myserver1");
    assert_stderr_excludes(&output, "mypass1");
}

#[test]
fn test_invalid_settings_file() {
    let t = Test::with_inventory();
    t.write(".hostbook.toml", "defintion = \"servers.yaml\"\n");

    let output = t.run(&["list"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid settings file");
}
