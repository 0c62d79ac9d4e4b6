use crate::cli::support::{kiwiland, SAMPLE_GRAPH};
use predicates::prelude::*;

#[test]
fn test_trips_with_max_stops() {
    kiwiland()
        .args(["trips", "--graph", SAMPLE_GRAPH, "C", "C", "--max", "3"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_trips_with_exact_stops() {
    kiwiland()
        .args(["trips", "--graph", SAMPLE_GRAPH, "A", "C", "--exact", "4"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_trips_list() {
    kiwiland()
        .args(["trips", "--graph", SAMPLE_GRAPH, "C", "C", "--max", "3", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2\n"))
        .stdout(predicate::str::contains("C-D-C\n"))
        .stdout(predicate::str::contains("C-E-B-C\n"));
}

#[test]
fn test_trips_requires_a_bound() {
    kiwiland()
        .args(["trips", "--graph", SAMPLE_GRAPH, "C", "C"])
        .assert()
        .code(2);
}

#[test]
fn test_trips_bounds_conflict() {
    kiwiland()
        .args(["trips", "--graph", SAMPLE_GRAPH, "C", "C", "--max", "3", "--exact", "2"])
        .assert()
        .code(2);
}

#[test]
fn test_trips_above_default_limit() {
    kiwiland()
        .args(["trips", "--graph", SAMPLE_GRAPH, "C", "C", "--max", "17"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exceeds the configured limit of 16"));
}
