//! Undirected weighted graph with insertion-ordered adjacency
//!
//! Nodes get a dense index in insertion order. Each node keeps an ordered
//! neighbor set, and weights live in a single map keyed by the unordered
//! index pair, so both directions always read the same value.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::bail_not_found;
use crate::error::{Result, ShortpathError};
use crate::graph::types::NodeLabel;

/// Largest accepted edge weight.
///
/// A simple path has fewer than `node_count` edges, so its cost stays far
/// below `Cost::INFINITY` for any graph that fits in memory.
pub const MAX_EDGE_WEIGHT: u64 = u32::MAX as u64;

/// How `add_edge` treats endpoints that were never registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationPolicy {
    /// Endpoints must be added with `add_node` first; duplicates are rejected
    #[default]
    Strict,
    /// Unknown endpoints are registered on the fly; duplicate `add_node` is a no-op
    Permissive,
}

impl RegistrationPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            RegistrationPolicy::Strict
        } else {
            RegistrationPolicy::Permissive
        }
    }

    pub fn is_strict(&self) -> bool {
        *self == RegistrationPolicy::Strict
    }
}

impl fmt::Display for RegistrationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationPolicy::Strict => write!(f, "strict"),
            RegistrationPolicy::Permissive => write!(f, "permissive"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeightedGraph<N = String> {
    policy: RegistrationPolicy,
    labels: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<usize>>,
    weights: HashMap<(usize, usize), u64>,
}

fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl<N: NodeLabel> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeLabel> WeightedGraph<N> {
    /// Empty graph with strict node registration
    pub fn new() -> Self {
        Self::with_policy(RegistrationPolicy::Strict)
    }

    /// Empty graph that registers edge endpoints automatically
    pub fn permissive() -> Self {
        Self::with_policy(RegistrationPolicy::Permissive)
    }

    pub fn with_policy(policy: RegistrationPolicy) -> Self {
        WeightedGraph {
            policy,
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            weights: HashMap::new(),
        }
    }

    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Register a node.
    ///
    /// Returns `Ok(true)` when the node is new. A repeated id fails with
    /// `DuplicateNode` under strict registration and returns `Ok(false)`
    /// under permissive registration.
    pub fn add_node(&mut self, id: impl Into<N>) -> Result<bool> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return match self.policy {
                RegistrationPolicy::Strict => Err(ShortpathError::duplicate_node(&id)),
                RegistrationPolicy::Permissive => Ok(false),
            };
        }
        self.insert_node(id);
        Ok(true)
    }

    fn insert_node(&mut self, id: N) -> usize {
        let idx = self.labels.len();
        self.index.insert(id.clone(), idx);
        self.labels.push(id);
        self.adjacency.push(Vec::new());
        idx
    }

    fn resolve_endpoint(&mut self, id: N) -> Result<usize> {
        if let Some(&idx) = self.index.get(&id) {
            return Ok(idx);
        }
        match self.policy {
            RegistrationPolicy::Strict => Err(ShortpathError::node_not_found(&id)),
            RegistrationPolicy::Permissive => Ok(self.insert_node(id)),
        }
    }

    /// Add an undirected edge, overwriting the weight of an existing one.
    ///
    /// Negative weights are rejected before the graph is touched. A self-loop
    /// is stored once. Re-adding an edge keeps its neighbor position.
    pub fn add_edge(&mut self, a: impl Into<N>, b: impl Into<N>, weight: i64) -> Result<()> {
        let (a, b) = (a.into(), b.into());
        if weight < 0 {
            return Err(ShortpathError::negative_weight(&a, &b, weight));
        }
        if weight as u64 > MAX_EDGE_WEIGHT {
            return Err(ShortpathError::weight_too_large(
                &a,
                &b,
                weight,
                MAX_EDGE_WEIGHT,
            ));
        }
        if self.policy.is_strict() {
            for endpoint in [&a, &b] {
                if !self.index.contains_key(endpoint) {
                    bail_not_found!(endpoint);
                }
            }
        }

        let ia = self.resolve_endpoint(a)?;
        let ib = self.resolve_endpoint(b)?;
        let previous = self.weights.insert(edge_key(ia, ib), weight as u64);

        if previous.is_none() {
            self.adjacency[ia].push(ib);
            if ia != ib {
                self.adjacency[ib].push(ia);
            }
        }
        Ok(())
    }

    /// Neighbors of `node` in the order their edges were first added
    pub fn neighbors<Q>(&self, node: &Q) -> Result<impl Iterator<Item = &N> + '_>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let idx = self.require(node)?;
        Ok(self.neighbors_at(idx))
    }

    fn neighbors_at(&self, idx: usize) -> impl Iterator<Item = &N> + '_ {
        self.adjacency[idx].iter().map(|&n| &self.labels[n])
    }

    /// Weight of the edge between `a` and `b`, in either direction
    pub fn weight<Q>(&self, a: &Q, b: &Q) -> Result<u64>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        self.weight_between(ia, ib)
            .ok_or_else(|| ShortpathError::edge_not_found(a, b))
    }

    pub fn contains_node<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct undirected edges, self-loops included
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.labels.iter()
    }

    /// Each undirected edge once, ordered by its lower-index endpoint
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, u64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, nbrs)| {
            nbrs.iter()
                .filter(move |&&j| i <= j)
                .filter_map(move |&j| {
                    let weight = self.weight_between(i, j)?;
                    Some((&self.labels[i], &self.labels[j], weight))
                })
        })
    }

    pub(crate) fn index_of<Q>(&self, node: &Q) -> Option<usize>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(node).copied()
    }

    pub(crate) fn require<Q>(&self, node: &Q) -> Result<usize>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.index_of(node)
            .ok_or_else(|| ShortpathError::node_not_found(node))
    }

    pub(crate) fn label(&self, idx: usize) -> &N {
        &self.labels[idx]
    }

    pub(crate) fn neighbor_indices(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    pub(crate) fn weight_between(&self, a: usize, b: usize) -> Option<u64> {
        self.weights.get(&edge_key(a, b)).copied()
    }
}
