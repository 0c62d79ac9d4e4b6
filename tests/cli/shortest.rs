use crate::cli::support::{kiwiland, SAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_shortest_between_nodes() {
    kiwiland()
        .args(["shortest", "--graph", SAMPLE_GRAPH, "A", "C"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_shortest_round_trip() {
    kiwiland()
        .args(["shortest", "--graph", SAMPLE_GRAPH, "B", "B"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_shortest_unreachable() {
    kiwiland()
        .args(["shortest", "--graph", SAMPLE_GRAPH, "E", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no such route"));
}

#[test]
fn test_shortest_unknown_node() {
    kiwiland()
        .args(["shortest", "--graph", SAMPLE_GRAPH, "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no node found: Z"));
}

#[test]
fn test_shortest_rejects_multi_letter_name() {
    kiwiland()
        .args(["shortest", "--graph", SAMPLE_GRAPH, "AB", "C"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected a single letter"));
}

#[test]
fn test_shortest_json_includes_route() {
    let output = kiwiland()
        .args(["--format", "json", "shortest", "--graph", SAMPLE_GRAPH, "B", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["distance"], 9);
    assert_eq!(json["route"], serde_json::json!(["B", "C", "E", "B"]));
}

#[test]
fn test_shortest_json_error_envelope() {
    let output = kiwiland()
        .args(["--format", "json", "shortest", "--graph", SAMPLE_GRAPH, "E", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "no_such_route");
    assert_eq!(json["error"]["code"], 3);
}
