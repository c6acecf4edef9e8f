use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{Result, ShortpathError};

/// Labels usable as graph nodes.
///
/// Anything cloneable, hashable and printable qualifies: `String`, `&str`,
/// integers, or small newtypes.
pub trait NodeLabel: Clone + Eq + Hash + fmt::Display {}

impl<T> NodeLabel for T where T: Clone + Eq + Hash + fmt::Display {}

/// Accumulated path weight.
///
/// `Cost::INFINITY` is the sentinel for "no known path yet". It is never the
/// sum of real edge weights: addition saturates at the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const INFINITY: Cost = Cost(u64::MAX);

    pub fn new(cost: u64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITY
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<u64> for Cost {
    type Output = Self;

    fn add(self, weight: u64) -> Self {
        Cost(self.0.saturating_add(weight))
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Work counters for a single solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Nodes removed from the frontier
    pub pops: usize,
    /// Successful distance improvements
    pub relaxations: usize,
}

/// A lowest-cost route between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<N> {
    /// Nodes from source to target, both inclusive
    pub path: Vec<N>,
    /// Sum of edge weights along `path`
    pub cost: Cost,
    #[serde(skip)]
    pub stats: SolveStats,
}

impl<N> ShortestPath<N> {
    pub fn source(&self) -> Option<&N> {
        self.path.first()
    }

    pub fn target(&self) -> Option<&N> {
        self.path.last()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a shortest-path query over valid endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome<N> {
    Found(ShortestPath<N>),
    /// The target lies outside the source's connected component
    Unreachable { source: N, target: N },
}

impl<N: NodeLabel> PathOutcome<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&ShortestPath<N>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable { .. } => None,
        }
    }

    pub fn cost(&self) -> Option<Cost> {
        self.path().map(|p| p.cost)
    }

    pub fn into_path(self) -> Option<ShortestPath<N>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable { .. } => None,
        }
    }

    /// Treat unreachability as a `NoPath` error
    pub fn into_result(self) -> Result<ShortestPath<N>> {
        match self {
            PathOutcome::Found(path) => Ok(path),
            PathOutcome::Unreachable { source, target } => {
                Err(ShortpathError::no_path(source, target))
            }
        }
    }
}
