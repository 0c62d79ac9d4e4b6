use crate::cli::support::kiwiland;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const REFERENCE_SESSION: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7
distance of route A-B-C
distance of route A-D
distance of route A-D-C
distance of route A-E-B-C-D
distance of route A-E-D
all trips C C steps <= 3
all trips A C steps = 4
shortest route A C
shortest route B B
all routes C C distance < 30
exit
";

const REFERENCE_OUTPUT: &str = "9\n5\n13\n22\nno such route; type help for usage\n2\n3\n9\n9\n7\n";

#[test]
fn test_session_from_stdin() {
    kiwiland()
        .arg("session")
        .write_stdin(REFERENCE_SESSION)
        .assert()
        .success()
        .stdout(REFERENCE_OUTPUT);
}

#[test]
fn test_session_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.txt");
    fs::write(&path, REFERENCE_SESSION).unwrap();

    kiwiland()
        .args(["session", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(REFERENCE_OUTPUT);
}

#[test]
fn test_session_help_and_unknown_command() {
    kiwiland()
        .arg("session")
        .write_stdin("AB5\nhelp\nwhat now\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("shortest route X Y"))
        .stdout(predicate::str::contains("unknown command; type help for usage"));
}

#[test]
fn test_session_invalid_edge_list() {
    kiwiland()
        .arg("session")
        .write_stdin("not a graph\nshortest route A B\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid format for graph input"));
}

#[test]
fn test_session_refuses_runaway_distance_bound() {
    kiwiland()
        .arg("session")
        .write_stdin("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7\nall routes C C distance < 1000\nall routes C C distance < 30\n")
        .assert()
        .success()
        .stdout(
            "distance of 1000 exceeds the configured limit of 150; type help for usage\n7\n",
        );
}
