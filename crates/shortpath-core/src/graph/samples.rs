//! Built-in sample networks
//!
//! Two small road-map style graphs, both queried from `O` to `T`. The demo
//! command solves them and the test suites pin their answers.

use crate::error::Result;
use crate::graph::weighted::WeightedGraph;

pub const SAMPLE_SOURCE: &str = "O";
pub const SAMPLE_TARGET: &str = "T";

pub const SMALL_NODES: [&str; 8] = ["O", "A", "B", "C", "D", "F", "E", "T"];

pub const SMALL_EDGES: [(&str, &str, i64); 14] = [
    ("O", "A", 2),
    ("O", "B", 5),
    ("O", "C", 4),
    ("A", "B", 2),
    ("A", "D", 7),
    ("A", "F", 12),
    ("B", "C", 1),
    ("B", "D", 4),
    ("B", "E", 3),
    ("C", "E", 4),
    ("D", "E", 1),
    ("D", "T", 5),
    ("E", "T", 7),
    ("F", "T", 3),
];

pub const LARGE_NODES: [&str; 12] = ["O", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "T"];

pub const LARGE_EDGES: [(&str, &str, i64); 17] = [
    ("O", "A", 6),
    ("O", "B", 8),
    ("A", "B", 2),
    ("A", "C", 5),
    ("B", "D", 2),
    ("A", "E", 14),
    ("D", "E", 3),
    ("D", "F", 4),
    ("C", "G", 7),
    ("E", "H", 2),
    ("G", "H", 4),
    ("F", "I", 3),
    ("I", "H", 8),
    ("H", "J", 7),
    ("J", "T", 1),
    ("H", "T", 10),
    ("I", "T", 11),
];

/// A named sample graph
pub struct Sample {
    pub name: &'static str,
    pub graph: WeightedGraph,
}

fn build(nodes: &[&str], edges: &[(&str, &str, i64)]) -> Result<WeightedGraph> {
    let mut graph = WeightedGraph::new();
    for &node in nodes {
        graph.add_node(node)?;
    }
    for &(a, b, weight) in edges {
        graph.add_edge(a, b, weight)?;
    }
    Ok(graph)
}

/// Eight nodes, fourteen edges
pub fn small() -> Result<WeightedGraph> {
    build(&SMALL_NODES, &SMALL_EDGES)
}

/// Twelve nodes, seventeen edges
pub fn large() -> Result<WeightedGraph> {
    build(&LARGE_NODES, &LARGE_EDGES)
}

pub fn all() -> Result<Vec<Sample>> {
    Ok(vec![
        Sample {
            name: "small",
            graph: small()?,
        },
        Sample {
            name: "large",
            graph: large()?,
        },
    ])
}
