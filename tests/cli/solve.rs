use crate::cli::support::{shortpath, stdout_json, write_file, SMALL_GRAPH, SPLIT_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// solve command tests
// ============================================================================

#[test]
fn test_solve_small_graph() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["O", "T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O -> A -> B -> D -> T"))
        .stdout(predicate::str::contains("cost: 13"))
        .stdout(predicate::str::contains("hops: 4"));
}

#[test]
fn test_solve_linear_selector_matches_heap() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    for selector in ["linear", "heap"] {
        shortpath()
            .arg("solve")
            .arg(&graph)
            .args(["O", "T", "--selector", selector])
            .assert()
            .success()
            .stdout(predicate::str::contains("O -> A -> B -> D -> T"));
    }
}

#[test]
fn test_solve_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    let output = shortpath()
        .args(["--format", "json", "solve"])
        .arg(&graph)
        .args(["O", "T", "--selector", "linear"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], "O");
    assert_eq!(json["target"], "T");
    assert_eq!(json["selector"], "linear");
    assert_eq!(json["cost"], 13);
    assert_eq!(json["hops"], 4);
    assert_eq!(
        json["path"],
        serde_json::json!(["O", "A", "B", "D", "T"])
    );
    assert!(json["stats"]["pops"].as_u64().unwrap() >= 5);
}

#[test]
fn test_solve_all_lists_distances() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    let output = shortpath()
        .args(["--format", "json", "solve"])
        .arg(&graph)
        .args(["O", "E", "--all"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["cost"], 7);
    let distances = json["distances"].as_array().unwrap();
    assert_eq!(distances.len(), 8);
    assert_eq!(distances[0], serde_json::json!({ "node": "O", "cost": 0 }));
    assert_eq!(distances[7], serde_json::json!({ "node": "T", "cost": 13 }));
}

#[test]
fn test_solve_source_equals_target() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["D", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: 0"));
}

#[test]
fn test_solve_unreachable_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "split.toml", SPLIT_GRAPH);

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["A", "Y"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no path from A to Y"));
}

#[test]
fn test_solve_unreachable_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "split.toml", SPLIT_GRAPH);

    shortpath()
        .args(["--format", "json", "solve"])
        .arg(&graph)
        .args(["A", "Y"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"no_path\""));
}

#[test]
fn test_solve_unknown_node_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "small.toml", SMALL_GRAPH);

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["O", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Z"));
}

#[test]
fn test_solve_missing_graph_file() {
    let dir = tempdir().unwrap();

    shortpath()
        .arg("solve")
        .arg(dir.path().join("absent.toml"))
        .args(["O", "T"])
        .assert()
        .code(3);
}

#[test]
fn test_solve_negative_weight_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "bad.toml",
        "nodes = [\"A\", \"B\"]\n[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = -1\n",
    );

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative weight"));
}

#[test]
fn test_solve_strict_graph_rejects_unregistered_endpoint() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "loose.toml",
        "[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = 2\n",
    );

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: A"));

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["A", "B", "--permissive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost: 2"));
}

#[test]
fn test_solve_permissive_conflicts_with_strict_file() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "strict.toml",
        "strict = true\nnodes = [\"A\", \"B\"]\n[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = 2\n",
    );

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["A", "B", "--permissive"])
        .assert()
        .code(2);
}

#[test]
fn test_solve_json_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "graph.json",
        r#"{"nodes": ["A", "B", "C"], "edges": [
            {"from": "A", "to": "B", "weight": 4},
            {"from": "B", "to": "C", "weight": 4},
            {"from": "A", "to": "C", "weight": 9}
        ]}"#,
    );

    shortpath()
        .arg("solve")
        .arg(&graph)
        .args(["A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"))
        .stdout(predicate::str::contains("cost: 8"));
}

#[test]
fn test_solve_oversized_weight_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        dir.path(),
        "heavy.toml",
        "nodes = [\"A\", \"B\"]\n[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = 9223372036854775807\n",
    );

    shortpath()
        .args(["--format", "json", "solve"])
        .arg(&graph)
        .args(["A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"weight_too_large\""));
}
