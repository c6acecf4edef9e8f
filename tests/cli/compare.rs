use crate::cli::support::{shortpath, stdout_json, write_file, SMALL_GRAPH, SPLIT_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// compare command tests
// ============================================================================

#[test]
fn test_compare_strategies_agree() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    shortpath()
        .arg("compare")
        .arg(&graph)
        .args(["O", "T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linear"))
        .stdout(predicate::str::contains("heap"))
        .stdout(predicate::str::contains("cost 13  O -> A -> B -> D -> T"))
        .stdout(predicate::str::contains("agree: yes"));
}

#[test]
fn test_compare_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    let output = shortpath()
        .args(["--format", "json", "compare"])
        .arg(&graph)
        .args(["O", "T"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["agree"], true);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["selector"], "linear");
    assert_eq!(results[1]["selector"], "heap");
    for result in results {
        assert_eq!(result["found"], true);
        assert_eq!(result["cost"], 13);
        assert!(result["elapsed_us"].is_u64());
    }
}

#[test]
fn test_compare_unreachable_still_agrees() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "split.toml", SPLIT_GRAPH);

    shortpath()
        .arg("compare")
        .arg(&graph)
        .args(["A", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unreachable"))
        .stdout(predicate::str::contains("agree: yes"));
}

#[test]
fn test_compare_quiet_omits_timing() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    shortpath()
        .args(["--quiet", "compare"])
        .arg(&graph)
        .args(["O", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost 4  O -> A -> B"))
        .stdout(predicate::str::contains("(").not());
}
