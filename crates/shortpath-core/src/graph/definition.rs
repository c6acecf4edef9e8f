//! Graph description files
//!
//! A definition lists nodes and weighted edges. It is read-only input: graphs
//! are never written back out.
//!
//! ```toml
//! strict = true
//! nodes = ["O", "A"]
//!
//! [[edges]]
//! from = "O"
//! to = "A"
//! weight = 2
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ShortpathError};
use crate::graph::weighted::{RegistrationPolicy, WeightedGraph};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDefinition {
    /// Overrides the configured registration policy when present
    #[serde(default)]
    pub strict: Option<bool>,

    #[serde(default)]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
}

impl GraphDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a definition, choosing JSON for `.json` files and TOML otherwise
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ShortpathError::invalid_graph_file(path, e))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        let definition = parsed.map_err(|e| ShortpathError::invalid_graph_file(path, e))?;

        tracing::debug!(
            path = %path.display(),
            nodes = definition.nodes.len(),
            edges = definition.edges.len(),
            "graph_definition_loaded"
        );
        Ok(definition)
    }

    /// Policy this definition builds with, given the configured default
    pub fn policy(&self, default: RegistrationPolicy) -> RegistrationPolicy {
        self.strict
            .map(RegistrationPolicy::from_strict)
            .unwrap_or(default)
    }

    /// Build the graph: nodes first, in file order, then edges
    pub fn build(&self, default: RegistrationPolicy) -> Result<WeightedGraph> {
        let mut graph = WeightedGraph::with_policy(self.policy(default));
        for node in &self.nodes {
            graph.add_node(node.as_str())?;
        }
        for edge in &self.edges {
            graph.add_edge(edge.from.as_str(), edge.to.as_str(), edge.weight)?;
        }
        Ok(graph)
    }
}
