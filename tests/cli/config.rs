use crate::cli::support::{kiwiland, SAMPLE_GRAPH};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_file_limits() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[limits]\nmax_stops = 2\nmax_distance = 20\n").unwrap();

    kiwiland()
        .arg("--config")
        .arg(&path)
        .args(["trips", "--graph", SAMPLE_GRAPH, "C", "C", "--max", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("stops of 3 exceeds the configured limit of 2"));

    kiwiland()
        .arg("--config")
        .arg(&path)
        .args(["routes", "--graph", SAMPLE_GRAPH, "C", "C", "--below", "20"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_config_dir_override() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[limits]\nmax_distance = 5\n").unwrap();

    kiwiland()
        .env("KIWILAND_CONFIG_DIR", dir.path())
        .args(["routes", "--graph", SAMPLE_GRAPH, "C", "C", "--below", "30"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("distance of 30 exceeds the configured limit of 5"));
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[limits\n").unwrap();

    kiwiland()
        .arg("--config")
        .arg(&path)
        .args(["trips", "--graph", SAMPLE_GRAPH, "C", "C", "--max", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
