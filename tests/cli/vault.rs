//! Tests for `hostbook vault`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_status_plaintext() {
    let t = Test::with_inventory();

    let output = t.run(&["vault", "status"]);
    assert_success(&output);
    assert_stdout_contains(&output, "vault.yml");
    assert_stdout_contains(&output, "plaintext");
}

#[test]
fn test_status_encrypted() {
    let t = Test::with_encrypted_inventory();

    let output = t.run(&["vault", "status"]);
    assert_success(&output);
    assert_stdout_contains(&output, "encrypted");
}

#[test]
fn test_status_without_vault_file() {
    let t = Test::new();
    t.write(DEFINITION_FILE, OVERLAPPING);

    t.hostbook()
        .args(["vault", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not specify a vault file"));
}

#[test]
fn test_nicknames_flags_unknown_entries() {
    let t = Test::with_inventory();
    t.write(
        VAULT_FILE,
        "secrets:\n  myserver1: {password: a}\n  retired: {password: b}\n",
    );

    let output = t.run(&["vault", "nicknames"]);
    assert_success(&output);
    assert_stdout_contains(&output, "• myserver1");
    assert_stdout_contains(&output, "retired (not a server in the definition file)");

    let output = t.run(&["vault", "nicknames", "--json"]);
    assert_success(&output);
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[1]["nickname"], "retired");
    assert_eq!(records[1]["defined"], false);
}

#[test]
fn test_encrypt_then_decrypt() {
    let t = Test::with_inventory();

    let output = t.run_with_password(PASSWORD, &["vault", "encrypt"]);
    assert_success(&output);
    let encrypted = t.read(VAULT_FILE);
    assert!(encrypted.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));
    assert!(!encrypted.contains("mypass1"));

    let output = t.run_with_password(PASSWORD, &["list", "--show-secrets"]);
    assert_success(&output);
    assert_stdout_contains(&output, "mypass2");

    let output = t.run_with_password(PASSWORD, &["vault", "decrypt"]);
    assert_success(&output);
    assert_stderr_contains(&output, "now plaintext");
    assert_eq!(t.read(VAULT_FILE), VAULT);
}

#[test]
fn test_encrypt_twice_fails() {
    let t = Test::with_encrypted_inventory();

    let output = t.run_with_password(PASSWORD, &["vault", "encrypt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "already encrypted");
}

#[test]
fn test_decrypt_plaintext_fails() {
    let t = Test::with_inventory();

    let output = t.run_with_password(PASSWORD, &["vault", "decrypt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "is not encrypted");
}

#[test]
fn test_encrypt_refuses_invalid_vault() {
    let t = Test::with_inventory();
    t.write(VAULT_FILE, "secret:\n  myserver1: {}\n");

    let output = t.run_with_password(PASSWORD, &["vault", "encrypt"]);
    assert_failure(&output);
    assert_eq!(t.read(VAULT_FILE), "secret:\n  myserver1: {}\n");
}

#[test]
fn test_encrypt_without_password() {
    let t = Test::with_inventory();

    let output = t.run(&["vault", "encrypt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no password available");
    assert_eq!(t.read(VAULT_FILE), VAULT);
}

#[cfg(unix)]
#[test]
fn test_rewritten_vault_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_encrypted_inventory();
    let path = t.path(VAULT_FILE);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let output = t.run_with_password(PASSWORD, &["vault", "decrypt"]);
    assert_success(&output);
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    let output = t.run_with_password(PASSWORD, &["vault", "encrypt"]);
    assert_success(&output);
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
