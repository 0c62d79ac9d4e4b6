use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Reference network used across the CLI tests
pub const SAMPLE_GRAPH: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

/// Get a Command for kiwiland, isolated from any user configuration
pub fn kiwiland() -> Command {
    let mut cmd = cargo_bin_cmd!("kiwiland");
    cmd.env(
        "KIWILAND_CONFIG_DIR",
        std::env::temp_dir().join("kiwiland-tests-without-config"),
    )
    .env_remove("KIWILAND_CONFIG")
    .env_remove("KIWILAND_LOG")
    .env_remove("RUST_LOG");
    cmd
}
