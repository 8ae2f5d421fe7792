//! Exact 0/1 knapsack via shortest paths on a layered decision DAG.
//!
//! ## Core idea
//! 1. Every vertex is a state `(remaining capacity, items decided so far)`.
//!    States reached by different decision histories are merged, which keeps
//!    the graph pseudo-polynomial instead of exponential.
//! 2. Skipping an item costs `max_value`, taking item `i` costs
//!    `max_value - values[i]`. Every source → sink path has the same number of
//!    edges, so the shortest path is the most valuable feasible selection.
//! 3. A take edge only exists when the item still fits, so every path is
//!    feasible by construction.
//!
//! ## Quick start
//! ```
//! use knapsack_dag::{build_graph, reconstruct_path, select_items, shortest_paths};
//!
//! let values = [60.0, 100.0, 120.0];
//! let volumes = [1.0, 2.0, 3.0];
//! let graph = build_graph(&values, &volumes, 5.0);
//! let sp = shortest_paths(&graph);
//! let path = reconstruct_path(&graph, &sp.prev);
//! assert_eq!(path.len(), values.len() + 2);
//! assert_eq!(select_items(&path), vec![1, 2]);
//! assert_eq!(sp.distance(&graph.sink()), 3.0 * 120.0 - 220.0);
//! ```
//!
//! ## Stages
//! - [`graph`]   : decision DAG construction.
//! - [`solvers`] : layered relaxation and Dijkstra behind [`ShortestPathSolver`].
//! - [`path`]    : predecessor walk and item extraction.
//! - [`engine`]  : the whole pipeline, with [`KnapsackInstance`] validation
//!   available up front.

pub mod builder;
pub mod engine;
pub mod graph;
pub mod instance;
pub mod path;
pub mod solvers;
pub mod traits;

pub use crate::builder::KnapsackEngineBuilder;
pub use crate::engine::{KnapsackEngine, Solution, Strategy};
pub use crate::graph::{build_graph, Edge, EdgeKind, KnapsackGraph, Vertex};
pub use crate::instance::{InstanceError, KnapsackInstance};
pub use crate::path::{reconstruct_path, select_items};
pub use crate::solvers::{shortest_paths, Dijkstra, LayeredRelaxation, ShortestPaths};
pub use crate::traits::ShortestPathSolver;
