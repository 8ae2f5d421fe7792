//! End-to-end knapsack engine.
//!
//! Runs the four stages in order:
//! 1. build the layered decision DAG,
//! 2. compute shortest paths from the source,
//! 3. walk predecessors back from the sink,
//! 4. read the taken items off the path.
//!
//! Every run owns its graph and distance tables; nothing is shared between
//! runs, so independent instances can be solved concurrently.

use std::fmt;
use std::str::FromStr;

use crate::graph::{build_graph, KnapsackGraph, Vertex};
use crate::instance::KnapsackInstance;
use crate::path::{reconstruct_path, select_items};
use crate::solvers::{Dijkstra, LayeredRelaxation, ShortestPaths};
use crate::traits::ShortestPathSolver;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which shortest-path solver the engine runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Single topological sweep over the layers.
    #[default]
    Layered,
    /// Binary-heap Dijkstra with lazy deletion.
    Dijkstra,
}

impl Strategy {
    pub fn solver(self) -> &'static dyn ShortestPathSolver {
        match self {
            Strategy::Layered => &LayeredRelaxation,
            Strategy::Dijkstra => &Dijkstra,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.solver().name()
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "layered" => Ok(Self::Layered),
            "dijkstra" => Ok(Self::Dijkstra),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one engine run.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Indices of the taken items, ascending.
    pub items: Vec<usize>,
    /// Total value of `items`.
    pub value: f64,
    /// Total volume of `items`.
    pub volume: f64,
    /// Weight of the shortest source → sink path, `N * max_value - value`.
    pub cost: f64,
    /// Optimal path, source first and sink last.
    pub path: Vec<Vertex>,
}

impl Solution {
    /// False when the sink was never reached (degenerate input).
    pub fn found(&self) -> bool {
        self.path.len() > 1
    }
}

/// Knapsack solver pipeline for a configured [`Strategy`].
///
/// Typical usage:
/// ```
/// use knapsack_dag::{KnapsackEngine, KnapsackInstance};
///
/// let instance = KnapsackInstance::new(
///     vec![60.0, 100.0, 120.0],
///     vec![1.0, 2.0, 3.0],
///     5.0,
/// ).unwrap();
/// let solution = KnapsackEngine::new().run(&instance);
/// assert_eq!(solution.items, vec![1, 2]);
/// assert_eq!(solution.value, 220.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct KnapsackEngine {
    strategy: Strategy,
}

impl KnapsackEngine {
    /// Engine with the default layered solver.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Shortest paths on an already built graph with the configured solver.
    pub fn shortest_paths(&self, graph: &KnapsackGraph) -> ShortestPaths {
        self.strategy.solver().solve(graph)
    }

    /// Solve a validated instance.
    pub fn run(&self, instance: &KnapsackInstance) -> Solution {
        self.run_raw(instance.values(), instance.volumes(), instance.capacity())
    }

    /// Solve unvalidated input.
    ///
    /// The slices must have equal length and contain finite numbers; other
    /// input yields an unspecified (but non-panicking) solution.
    pub fn run_raw(&self, values: &[f64], volumes: &[f64], capacity: f64) -> Solution {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "knapsack_run",
            items = values.len(),
            capacity,
            strategy = self.strategy.as_str()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let graph = build_graph(values, volumes, capacity);

        let sp = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!(
                "shortest_paths",
                vertices = graph.num_vertices(),
                edges = graph.num_edges()
            );
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.shortest_paths(&graph)
        };

        let path = reconstruct_path(&graph, &sp.prev);
        let items = select_items(&path);
        let value: f64 = items.iter().map(|&i| values[i]).sum();
        let volume: f64 = items.iter().map(|&i| volumes[i]).sum();
        let cost = sp.distance(&graph.sink());

        #[cfg(feature = "tracing")]
        tracing::debug!(taken = items.len(), value, volume, cost, "knapsack solved");

        Solution {
            items,
            value,
            volume,
            cost,
            path,
        }
    }

    /// Solve independent instances, in parallel with the `parallel` feature.
    #[cfg(feature = "parallel")]
    pub fn run_batch(&self, instances: &[KnapsackInstance]) -> Vec<Solution> {
        instances.par_iter().map(|inst| self.run(inst)).collect()
    }

    /// Solve independent instances, in parallel with the `parallel` feature.
    #[cfg(not(feature = "parallel"))]
    pub fn run_batch(&self, instances: &[KnapsackInstance]) -> Vec<Solution> {
        instances.iter().map(|inst| self.run(inst)).collect()
    }
}
