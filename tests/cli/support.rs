use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Small sample network; O -> T costs 13 via O, A, B, D, T
pub const SMALL_GRAPH: &str = r#"
nodes = ["O", "A", "B", "C", "D", "F", "E", "T"]

edges = [
    { from = "O", to = "A", weight = 2 },
    { from = "O", to = "B", weight = 5 },
    { from = "O", to = "C", weight = 4 },
    { from = "A", to = "B", weight = 2 },
    { from = "A", to = "D", weight = 7 },
    { from = "A", to = "F", weight = 12 },
    { from = "B", to = "C", weight = 1 },
    { from = "B", to = "D", weight = 4 },
    { from = "B", to = "E", weight = 3 },
    { from = "C", to = "E", weight = 4 },
    { from = "D", to = "E", weight = 1 },
    { from = "D", to = "T", weight = 5 },
    { from = "E", to = "T", weight = 7 },
    { from = "F", to = "T", weight = 3 },
]
"#;

/// Two components: {A, B} and {X, Y}
pub const SPLIT_GRAPH: &str = r#"
nodes = ["A", "B", "X", "Y"]

[[edges]]
from = "A"
to = "B"
weight = 1

[[edges]]
from = "X"
to = "Y"
weight = 1
"#;

/// Get a Command for shortpath, isolated from any user configuration
pub fn shortpath() -> Command {
    let mut cmd = cargo_bin_cmd!("shortpath");
    cmd.env_remove("SHORTPATH_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("SHORTPATH_LOG")
        .env(
            "SHORTPATH_CONFIG_DIR",
            std::env::temp_dir().join("shortpath-cli-tests-no-config"),
        );
    cmd
}

/// Write a fixture file into `dir` and return its path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
