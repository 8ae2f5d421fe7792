//! Shortest-path solvers for the knapsack decision DAG.
//!
//! - [`layered`]  : one topological sweep over the layers (default).
//! - [`dijkstra`] : binary-heap Dijkstra with lazy deletion.
//!
//! Both produce a [`ShortestPaths`] table and relax with a strict `<`, so the
//! first predecessor reaching a minimum keeps it.

pub mod dijkstra;
pub mod layered;

use std::collections::HashMap;

use crate::graph::{KnapsackGraph, Vertex};
use crate::traits::ShortestPathSolver;

pub use dijkstra::Dijkstra;
pub use layered::LayeredRelaxation;

/// Distances and predecessors produced by a solver.
#[derive(Clone, Debug, Default)]
pub struct ShortestPaths {
    /// Shortest known distance from the source; `+inf` when unreachable.
    pub dist: HashMap<Vertex, f64>,
    /// Predecessor on one shortest path; `None` for the source and for
    /// unreachable vertices.
    pub prev: HashMap<Vertex, Option<Vertex>>,
}

impl ShortestPaths {
    /// Table with every vertex of `graph` at `+inf`, except the source at 0.
    pub fn unreached(graph: &KnapsackGraph) -> Self {
        let n = graph.num_vertices();
        let mut dist = HashMap::with_capacity(n);
        let mut prev = HashMap::with_capacity(n);
        for &v in graph.vertices() {
            dist.insert(v, f64::INFINITY);
            prev.insert(v, None);
        }
        dist.insert(graph.source(), 0.0);
        Self { dist, prev }
    }

    /// Distance to `v`, `+inf` if `v` is unknown or unreachable.
    pub fn distance(&self, v: &Vertex) -> f64 {
        self.dist.get(v).copied().unwrap_or(f64::INFINITY)
    }

    pub fn predecessor(&self, v: &Vertex) -> Option<Vertex> {
        self.prev.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: &Vertex) -> bool {
        self.distance(v).is_finite()
    }

    /// Relax `u -> v` with weight `w`; returns whether `v` improved.
    #[inline]
    pub(crate) fn relax(&mut self, u: Vertex, v: Vertex, w: f64) -> bool {
        let cand = self.distance(&u) + w;
        let slot = self.dist.entry(v).or_insert(f64::INFINITY);
        if cand < *slot {
            *slot = cand;
            self.prev.insert(v, Some(u));
            true
        } else {
            false
        }
    }
}

/// Shortest paths with the default solver ([`LayeredRelaxation`]).
pub fn shortest_paths(graph: &KnapsackGraph) -> ShortestPaths {
    LayeredRelaxation.solve(graph)
}
