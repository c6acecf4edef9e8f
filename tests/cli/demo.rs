use crate::cli::support::{shortpath, stdout_json};
use predicates::prelude::*;

// ============================================================================
// demo command tests
// ============================================================================

#[test]
fn test_demo_solves_both_samples() {
    shortpath()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("small (8 nodes, 14 edges)"))
        .stdout(predicate::str::contains("path: O -> A -> B -> D -> T"))
        .stdout(predicate::str::contains("cost: 13"))
        .stdout(predicate::str::contains("large (12 nodes, 17 edges)"))
        .stdout(predicate::str::contains("path: O -> B -> D -> E -> H -> J -> T"))
        .stdout(predicate::str::contains("cost: 23"));
}

#[test]
fn test_demo_reports_selector() {
    shortpath()
        .args(["demo", "--selector", "linear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with the linear frontier"));
}

#[test]
fn test_demo_json_output() {
    let output = shortpath()
        .args(["--format", "json", "demo", "-s", "heap"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let runs = json.as_array().unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0]["sample"], "small");
    assert_eq!(runs[0]["cost"], 13);
    assert_eq!(runs[1]["sample"], "large");
    assert_eq!(runs[1]["cost"], 23);
    assert_eq!(runs[1]["hops"], 6);
    assert_eq!(runs[1]["selector"], "heap");
}
