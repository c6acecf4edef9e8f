//! Frontier selection strategies
//!
//! The frontier holds node indices whose distance is not yet final. The
//! solver only talks to [`FrontierSelector`]; which implementation backs it
//! is chosen by [`SelectorKind`].
//!
//! Both implementations break ties between equal keys in favor of the node
//! inserted first, so they finalize nodes in the same order.

pub mod heap;
pub mod linear;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShortpathError;
use crate::graph::types::Cost;

pub use heap::HeapSelector;
pub use linear::LinearScanSelector;

/// Priority structure over node indices keyed by tentative distance
pub trait FrontierSelector {
    /// Add a node that is not yet in the frontier
    fn insert(&mut self, node: usize, key: Cost);

    /// Remove and return the member with the smallest key
    fn pop_min(&mut self) -> Option<(usize, Cost)>;

    /// Lower the key of a member; keys never increase
    fn decrease_key(&mut self, node: usize, key: Cost);

    fn contains(&self, node: usize) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which frontier implementation a solve uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    /// Unordered working list, O(V) per pop
    Linear,
    /// Binary heap, O(log V) per pop
    #[default]
    Heap,
}

impl SelectorKind {
    pub const ALL: [SelectorKind; 2] = [SelectorKind::Linear, SelectorKind::Heap];

    /// Build an empty frontier sized for `capacity` nodes
    pub fn build(self, capacity: usize) -> Box<dyn FrontierSelector> {
        match self {
            SelectorKind::Linear => Box::new(LinearScanSelector::with_capacity(capacity)),
            SelectorKind::Heap => Box::new(HeapSelector::with_capacity(capacity)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::Linear => "linear",
            SelectorKind::Heap => "heap",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectorKind {
    type Err = ShortpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "linear-scan" => Ok(SelectorKind::Linear),
            "heap" | "priority-queue" => Ok(SelectorKind::Heap),
            other => Err(ShortpathError::invalid_value(
                "selector (expected: linear, heap)",
                other,
            )),
        }
    }
}
