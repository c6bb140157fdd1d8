//! Tests for `hostbook groups`.

use crate::support::*;

#[test]
fn test_groups_table() {
    let t = Test::with_inventory();

    let output = t.run(&["groups"]);
    assert_success(&output);
    assert_stdout_contains(&output, "GROUP");
    assert_stdout_contains(&output, "mygroup1");
    assert_stdout_contains(&output, "(default)");
}

#[test]
fn test_groups_json_in_declaration_order() {
    let t = Test::new();
    t.write(DEFINITION_FILE, OVERLAPPING);

    let output = t.run(&["groups", "--json"]);
    assert_success(&output);
    let groups: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = groups
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["nickname"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["g1", "g2", "g3", "g4"]);
    assert_eq!(groups[0]["members"], serde_json::json!(["s1", "s2"]));
}

#[test]
fn test_groups_none_defined() {
    let t = Test::new();
    t.write(DEFINITION_FILE, "servers:\n  s1: {description: only}\n");

    let output = t.run(&["groups"]);
    assert_success(&output);
    assert_stdout_contains(&output, "no server groups defined");
}
