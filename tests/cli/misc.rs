use crate::cli::support::{kiwiland, SAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    kiwiland()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: kiwiland"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("shortest"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn test_no_command_prints_overview() {
    kiwiland()
        .assert()
        .success()
        .stdout(predicate::str::contains("kiwiland"))
        .stdout(predicate::str::contains("kiwiland --help"));
}

#[test]
fn test_info() {
    kiwiland()
        .args(["info", "--graph", SAMPLE_GRAPH])
        .assert()
        .success()
        .stdout("nodes: 5 (A, B, C, D, E)\nedges: 9\n");
}

#[test]
fn test_info_json() {
    let output = kiwiland()
        .args(["--format", "json", "info", "--graph", "AB5, AB7, BC1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 3);
    assert_eq!(json["edges"], 2);
    assert_eq!(json["names"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_unknown_format_is_usage_error() {
    kiwiland()
        .args(["--format", "yaml", "info", "--graph", SAMPLE_GRAPH])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}
