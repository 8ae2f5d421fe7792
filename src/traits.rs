//! Core trait definitions for shortest-path solvers over the decision DAG.
//!
//! A solver turns an immutable [`KnapsackGraph`] into a [`ShortestPaths`]
//! table: the minimum distance from the source to every reachable vertex
//! together with one predecessor achieving it.
//!
//! Implementations are free to pick any traversal order as long as:
//! - every vertex of the graph (the sink included) appears in the table,
//! - unreachable vertices keep an infinite distance and no predecessor,
//! - following predecessors from any reachable vertex leads back to the
//!   source along a minimum-weight path.
//!
//! Edge weights produced by [`build_graph`](crate::graph::build_graph) are
//! non-negative, so greedy (Dijkstra-style) solvers are valid; the graph is
//! also layered, so a single topological sweep suffices.

use crate::graph::KnapsackGraph;
use crate::solvers::ShortestPaths;

/// Single-source shortest paths from the graph's source vertex.
pub trait ShortestPathSolver {
    /// Short identifier used in logs and probe output.
    fn name(&self) -> &'static str;

    /// Compute distances and predecessors for every vertex of `graph`.
    ///
    /// Ties between equal-weight predecessors are resolved by the
    /// implementation; any minimum-weight predecessor is acceptable.
    fn solve(&self, graph: &KnapsackGraph) -> ShortestPaths;
}
