//! Path reconstruction and item extraction.

use std::collections::HashMap;

use crate::graph::{KnapsackGraph, Vertex};

/// Walk predecessors back from the sink and return the path source → sink.
///
/// A result of length 1 (just the source) means the sink was not reached.
pub fn reconstruct_path(graph: &KnapsackGraph, prev: &HashMap<Vertex, Option<Vertex>>) -> Vec<Vertex> {
    let source = graph.source();
    let sink = graph.sink();
    if prev.get(&sink).copied().flatten().is_none() {
        return vec![source];
    }

    let mut path = Vec::with_capacity(graph.num_items() + 2);
    let mut node = sink;
    path.push(node);
    while let Some(p) = prev.get(&node).copied().flatten() {
        path.push(p);
        node = p;
    }
    path.reverse();
    path
}

/// Item indices taken along `path`, in path order.
///
/// A step into an item layer that lowers the remaining capacity is a take.
/// The final step into the sink decides nothing and is not inspected.
pub fn select_items(path: &[Vertex]) -> Vec<usize> {
    if path.len() < 3 {
        return Vec::new();
    }
    path[..path.len() - 1]
        .windows(2)
        .filter(|w| w[1].remaining < w[0].remaining)
        .map(|w| w[1].decision as usize)
        .collect()
}
