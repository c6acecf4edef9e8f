//! Shared rendering for path results

use shortpath_core::graph::{PathOutcome, ShortestPath, SolveStats};

/// `O -> A -> T`
pub fn path_line(path: &[String]) -> String {
    path.join(" -> ")
}

pub fn stats_json(stats: &SolveStats) -> serde_json::Value {
    serde_json::json!({
        "pops": stats.pops,
        "relaxations": stats.relaxations,
    })
}

pub fn path_json(result: &ShortestPath<String>) -> serde_json::Value {
    serde_json::json!({
        "path": result.path,
        "cost": result.cost,
        "hops": result.hops(),
        "stats": stats_json(&result.stats),
    })
}

/// Outcome as JSON; unreachable targets carry `"found": false` and no path
pub fn outcome_json(outcome: &PathOutcome<String>) -> serde_json::Value {
    match outcome {
        PathOutcome::Found(result) => {
            let mut json = path_json(result);
            if let Some(obj) = json.as_object_mut() {
                obj.insert("found".to_string(), serde_json::json!(true));
            }
            json
        }
        PathOutcome::Unreachable { .. } => serde_json::json!({
            "found": false,
            "path": serde_json::Value::Null,
            "cost": serde_json::Value::Null,
        }),
    }
}
