use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::SolverConfig;
use crate::error::{Result, ShortpathError};
use crate::graph::frontier::{FrontierSelector, SelectorKind};
use crate::graph::types::{Cost, NodeLabel, PathOutcome, ShortestPath, SolveStats};
use crate::graph::weighted::WeightedGraph;

/// How the main loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Termination {
    /// The target was popped with a finite distance
    Reached,
    /// The smallest remaining key was the infinity sentinel
    Unreachable,
    /// Every node was finalized
    Exhausted,
}

impl Termination {
    fn as_str(&self) -> &'static str {
        match self {
            Termination::Reached => "reached",
            Termination::Unreachable => "unreachable",
            Termination::Exhausted => "exhausted",
        }
    }
}

/// Working tables owned by a single solve
struct SearchState {
    dist: Vec<Cost>,
    pred: Vec<Option<usize>>,
    stats: SolveStats,
}

impl SearchState {
    fn new(node_count: usize, source: usize) -> Self {
        let mut dist = vec![Cost::INFINITY; node_count];
        dist[source] = Cost::ZERO;
        SearchState {
            dist,
            pred: vec![None; node_count],
            stats: SolveStats::default(),
        }
    }

    /// Walk predecessor links back from `target`; `None` if it was never reached
    fn path_indices(&self, target: usize) -> Option<Vec<usize>> {
        if self.dist[target].is_infinite() {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.pred[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra shortest-path solver over a [`WeightedGraph`].
///
/// The frontier implementation is injected through [`SelectorKind`] (or
/// passed directly to [`ShortestPathSolver::solve_using`]); the algorithm
/// itself is the same for every strategy. Each call allocates its own
/// distance and predecessor tables, so one solver and one graph can serve
/// any number of queries, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathSolver {
    selector: SelectorKind,
    cancel: Option<Arc<AtomicBool>>,
}

impl ShortestPathSolver {
    pub fn new(selector: SelectorKind) -> Self {
        ShortestPathSolver {
            selector,
            cancel: None,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.selector)
    }

    /// Abort with `Interrupted` once `flag` is set; checked between pops
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn selector(&self) -> SelectorKind {
        self.selector
    }

    /// Lowest-cost path from `source` to `target`.
    ///
    /// Fails with `NodeNotFound` if either endpoint is not in the graph.
    /// A target in another connected component yields
    /// [`PathOutcome::Unreachable`], never a partial path.
    #[tracing::instrument(skip_all, fields(source = %source, target = %target, selector = %self.selector))]
    pub fn solve<N, Q>(
        &self,
        graph: &WeightedGraph<N>,
        source: &Q,
        target: &Q,
    ) -> Result<PathOutcome<N>>
    where
        N: NodeLabel + Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let mut frontier = self.selector.build(graph.node_count());
        self.solve_using(graph, source, target, frontier.as_mut())
    }

    /// Like [`solve`](Self::solve), but with a caller-supplied frontier.
    ///
    /// `frontier` must be empty; it is seeded with every node of `graph`.
    pub fn solve_using<N, Q, F>(
        &self,
        graph: &WeightedGraph<N>,
        source: &Q,
        target: &Q,
        frontier: &mut F,
    ) -> Result<PathOutcome<N>>
    where
        N: NodeLabel + Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
        F: FrontierSelector + ?Sized,
    {
        let s = graph.require(source)?;
        let t = graph.require(target)?;

        let (state, termination) = self.search(graph, s, Some(t), frontier)?;
        tracing::debug!(
            pops = state.stats.pops,
            relaxations = state.stats.relaxations,
            termination = termination.as_str(),
            "solve_complete"
        );

        Ok(match state.path_indices(t) {
            Some(indices) => PathOutcome::Found(ShortestPath {
                path: indices.into_iter().map(|i| graph.label(i).clone()).collect(),
                cost: state.dist[t],
                stats: state.stats,
            }),
            None => PathOutcome::Unreachable {
                source: graph.label(s).clone(),
                target: graph.label(t).clone(),
            },
        })
    }

    /// Distances from `source` to every node it can reach
    #[tracing::instrument(skip_all, fields(source = %source, selector = %self.selector))]
    pub fn solve_all<'g, N, Q>(
        &self,
        graph: &'g WeightedGraph<N>,
        source: &Q,
    ) -> Result<ShortestPathTree<'g, N>>
    where
        N: NodeLabel + Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let s = graph.require(source)?;
        let mut frontier = self.selector.build(graph.node_count());
        let (state, termination) = self.search(graph, s, None, frontier.as_mut())?;
        tracing::debug!(
            pops = state.stats.pops,
            relaxations = state.stats.relaxations,
            termination = termination.as_str(),
            "solve_all_complete"
        );

        Ok(ShortestPathTree {
            graph,
            source: s,
            state,
        })
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::SeqCst) => Err(ShortpathError::Interrupted),
            _ => Ok(()),
        }
    }

    fn search<N, F>(
        &self,
        graph: &WeightedGraph<N>,
        source: usize,
        target: Option<usize>,
        frontier: &mut F,
    ) -> Result<(SearchState, Termination)>
    where
        N: NodeLabel,
        F: FrontierSelector + ?Sized,
    {
        let node_count = graph.node_count();
        let mut state = SearchState::new(node_count, source);
        for idx in 0..node_count {
            frontier.insert(idx, state.dist[idx]);
        }

        loop {
            self.check_cancelled()?;
            let Some((current, distance)) = frontier.pop_min() else {
                return Ok((state, Termination::Exhausted));
            };
            state.stats.pops += 1;
            tracing::trace!(node = %graph.label(current), %distance, "pop");

            if distance.is_infinite() {
                return Ok((state, Termination::Unreachable));
            }
            if Some(current) == target {
                return Ok((state, Termination::Reached));
            }

            for &next in graph.neighbor_indices(current) {
                if !frontier.contains(next) {
                    continue;
                }
                let Some(weight) = graph.weight_between(current, next) else {
                    continue;
                };
                let candidate = distance + weight;
                if candidate < state.dist[next] {
                    state.dist[next] = candidate;
                    state.pred[next] = Some(current);
                    state.stats.relaxations += 1;
                    frontier.decrease_key(next, candidate);
                }
            }
        }
    }
}

/// Solve with the default (heap) frontier
pub fn solve<N, Q>(graph: &WeightedGraph<N>, source: &Q, target: &Q) -> Result<PathOutcome<N>>
where
    N: NodeLabel + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    ShortestPathSolver::default().solve(graph, source, target)
}

/// Result of a full single-source run
pub struct ShortestPathTree<'g, N> {
    graph: &'g WeightedGraph<N>,
    source: usize,
    state: SearchState,
}

impl<N: NodeLabel> ShortestPathTree<'_, N> {
    pub fn source(&self) -> &N {
        self.graph.label(self.source)
    }

    pub fn stats(&self) -> SolveStats {
        self.state.stats
    }

    /// Distance to `node`, or `None` when it is unreachable
    pub fn distance<Q>(&self, node: &Q) -> Result<Option<Cost>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let idx = self.graph.require(node)?;
        let cost = self.state.dist[idx];
        Ok((!cost.is_infinite()).then_some(cost))
    }

    pub fn path_to<Q>(&self, node: &Q) -> Result<PathOutcome<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let idx = self.graph.require(node)?;
        Ok(match self.state.path_indices(idx) {
            Some(indices) => PathOutcome::Found(ShortestPath {
                path: indices
                    .into_iter()
                    .map(|i| self.graph.label(i).clone())
                    .collect(),
                cost: self.state.dist[idx],
                stats: self.state.stats,
            }),
            None => PathOutcome::Unreachable {
                source: self.source().clone(),
                target: self.graph.label(idx).clone(),
            },
        })
    }

    /// Reachable nodes with their distances, in graph insertion order
    pub fn reachable(&self) -> impl Iterator<Item = (&N, Cost)> + '_ {
        self.graph
            .nodes()
            .zip(self.state.dist.iter().copied())
            .filter(|(_, cost)| !cost.is_infinite())
    }
}
