use crate::cli::support::{kiwiland, SAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_distance_of_routes() {
    for (route, expected) in [("A-B-C", "9\n"), ("A-D", "5\n"), ("A-D-C", "13\n"), ("A-E-B-C-D", "22\n")] {
        kiwiland()
            .args(["distance", "--graph", SAMPLE_GRAPH, route])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_distance_missing_edge() {
    kiwiland()
        .args(["distance", "--graph", SAMPLE_GRAPH, "A-E-D"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: no such route"));
}

#[test]
fn test_distance_single_node_route() {
    kiwiland()
        .args(["distance", "--graph", SAMPLE_GRAPH, "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid route"));
}

#[test]
fn test_distance_malformed_route() {
    kiwiland()
        .args(["distance", "--graph", SAMPLE_GRAPH, "A--B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid format for the route"));
}

#[test]
fn test_distance_unknown_node() {
    kiwiland()
        .args(["distance", "--graph", SAMPLE_GRAPH, "A-Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no node found: Z"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    kiwiland()
        .args(["--quiet", "distance", "--graph", SAMPLE_GRAPH, "A-E-D"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
