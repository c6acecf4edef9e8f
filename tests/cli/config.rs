use crate::cli::support::{shortpath, stdout_json, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    shortpath()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# source: defaults"))
        .stdout(predicate::str::contains("selector = \"heap\""))
        .stdout(predicate::str::contains("strict_node_registration = true"));
}

#[test]
fn test_config_show_explicit_file_json() {
    let dir = tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "config.toml",
        "selector = \"linear\"\nstrict_node_registration = false\n",
    );

    let output = shortpath()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .args(["config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["selector"], "linear");
    assert_eq!(json["strict_node_registration"], false);
    assert_eq!(json["registration_policy"], "permissive");
}

#[test]
fn test_config_dir_env_is_discovered() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "config.toml", "selector = \"linear\"\n");

    shortpath()
        .env("SHORTPATH_CONFIG_DIR", dir.path())
        .args(["demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with the linear frontier"));
}

#[test]
fn test_permissive_config_applies_to_graph_files() {
    let dir = tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "config.toml",
        "strict_node_registration = false\n",
    );
    let graph = write_file(
        dir.path(),
        "loose.toml",
        "[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = 2\n",
    );

    shortpath()
        .arg("--config")
        .arg(&config)
        .arg("solve")
        .arg(&graph)
        .args(["A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: 2"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    shortpath()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["config", "show"])
        .assert()
        .failure();
}

#[test]
fn test_config_path_honors_env() {
    let dir = tempdir().unwrap();

    shortpath()
        .env("SHORTPATH_CONFIG_DIR", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
