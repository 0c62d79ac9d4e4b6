use crate::cli::support::{kiwiland, SAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_routes_below_distance() {
    kiwiland()
        .args(["routes", "--graph", SAMPLE_GRAPH, "C", "C", "--below", "30"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_routes_json() {
    let output = kiwiland()
        .args(["--format", "json", "routes", "--graph", SAMPLE_GRAPH, "C", "C", "--below", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["routes"], serde_json::json!(["C-E-B-C"]));
}

#[test]
fn test_routes_unknown_node() {
    kiwiland()
        .args(["routes", "--graph", SAMPLE_GRAPH, "Q", "C", "--below", "30"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no node found: Q"));
}

#[test]
fn test_routes_none_found() {
    kiwiland()
        .args(["routes", "--graph", SAMPLE_GRAPH, "E", "A", "--below", "50"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_routes_above_default_limit() {
    kiwiland()
        .args(["routes", "--graph", SAMPLE_GRAPH, "C", "C", "--below", "1000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "distance of 1000 exceeds the configured limit of 150",
        ));
}
