//! Weighted graphs and shortest-path search
//!
//! - `weighted`: undirected graph with insertion-ordered adjacency
//! - `frontier`: frontier selection strategies (linear scan, binary heap)
//! - `solver`: Dijkstra search written against the frontier trait
//! - `definition`: graph description files consumed by the CLI
//! - `samples`: built-in sample networks

pub mod definition;
pub mod frontier;
pub mod samples;
pub mod solver;
pub mod types;
pub mod weighted;

pub use definition::{EdgeDefinition, GraphDefinition};
pub use frontier::{FrontierSelector, HeapSelector, LinearScanSelector, SelectorKind};
pub use solver::{solve, ShortestPathSolver, ShortestPathTree};
pub use types::{Cost, NodeLabel, PathOutcome, ShortestPath, SolveStats};
pub use weighted::{RegistrationPolicy, WeightedGraph, MAX_EDGE_WEIGHT};
