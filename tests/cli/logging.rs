use crate::cli::support::{kiwiland, SAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    kiwiland()
        .args(["--log-level", "debug", "shortest", "--graph", SAMPLE_GRAPH, "A", "C"])
        .assert()
        .success()
        .stdout("9\n")
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    kiwiland()
        .args(["--log-level", "warn", "shortest", "--graph", SAMPLE_GRAPH, "A", "C"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_graph_events() {
    kiwiland()
        .args(["--verbose", "info", "--graph", SAMPLE_GRAPH])
        .assert()
        .success()
        .stderr(predicate::str::contains("graph built"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = kiwiland()
        .args(["--log-json", "--log-level", "debug", "info", "--graph", SAMPLE_GRAPH])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("expected log output");
    let json: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(json.get("level").is_some());
}
