//! Dijkstra's algorithm with a binary heap and lazy deletion.
//!
//! `BinaryHeap` has no decrease-key, so an improved vertex is pushed again and
//! the outdated entry is discarded when popped (its key no longer matches the
//! distance table). Entries with equal keys pop in insertion order, which
//! keeps the result deterministic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::graph::{KnapsackGraph, Vertex};
use crate::solvers::ShortestPaths;
use crate::traits::ShortestPathSolver;

#[derive(Clone, Copy, Debug, Default)]
pub struct Dijkstra;

#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    dist: f64,
    seq: u64,
    vertex: Vertex,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for HeapEntry {}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeapEntry {
    // Reversed: the max-heap pops the smallest distance, then the oldest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl ShortestPathSolver for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn solve(&self, graph: &KnapsackGraph) -> ShortestPaths {
        let mut sp = ShortestPaths::unreached(graph);
        let mut settled: HashSet<Vertex> = HashSet::with_capacity(graph.num_vertices());
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;
        heap.push(HeapEntry {
            dist: 0.0,
            seq,
            vertex: graph.source(),
        });

        #[cfg(feature = "tracing")]
        let mut stale = 0usize;

        while let Some(HeapEntry { dist, vertex: u, .. }) = heap.pop() {
            if dist > sp.distance(&u) || !settled.insert(u) {
                #[cfg(feature = "tracing")]
                {
                    stale += 1;
                }
                continue;
            }
            for e in graph.edges(&u) {
                if settled.contains(&e.to) {
                    continue;
                }
                if sp.relax(u, e.to, e.weight) {
                    seq += 1;
                    heap.push(HeapEntry {
                        dist: sp.distance(&e.to),
                        seq,
                        vertex: e.to,
                    });
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(pushes = seq + 1, stale, "dijkstra finished");

        sp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::solvers::LayeredRelaxation;

    #[test]
    fn heap_pops_smallest_then_oldest() {
        let v = Vertex::new(1.0, 0);
        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry { dist: 3.0, seq: 0, vertex: v });
        heap.push(HeapEntry { dist: 1.0, seq: 1, vertex: v });
        heap.push(HeapEntry { dist: 1.0, seq: 2, vertex: v });
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|e| e.seq).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn agrees_with_layered_on_scenario_two() {
        let g = build_graph(&[20.0, 17.0, 18.0, 15.0, 7.0], &[4.0, 3.0, 2.0, 2.0, 1.0], 6.0);
        let a = Dijkstra.solve(&g);
        let b = LayeredRelaxation.solve(&g);
        for v in g.vertices() {
            assert_eq!(a.distance(v), b.distance(v), "distance mismatch at {v}");
        }
        // 5 * 20 - (17 + 18 + 7)
        assert_eq!(a.distance(&g.sink()), 58.0);
    }

    #[test]
    fn infinite_values_leave_sink_unreached() {
        let g = build_graph(&[f64::INFINITY], &[1.0], 2.0);
        let sp = Dijkstra.solve(&g);
        assert!(!sp.is_reachable(&g.sink()));
        assert_eq!(sp.predecessor(&g.sink()), None);
    }
}
