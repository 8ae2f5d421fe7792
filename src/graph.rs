//! Layered decision DAG for the 0/1 knapsack reduction.
//!
//! Layers run over decision indices `-1..=N`:
//! - layer `-1` holds the single source `(capacity, -1)`,
//! - layer `i` holds every distinct remaining capacity after deciding item `i`,
//! - layer `N` holds the single sink `(0, N)`.
//!
//! Edges only go from decision index `k` to `k + 1`. Skip edges cost
//! `max_value`, take edges cost `max_value - values[i]`, sink edges cost 0, so
//! the weight of any full path is `N * max_value - (value taken)`.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A decision state: capacity left after the first `decision + 1` items.
///
/// `decision == -1` marks the source, `decision == N` the sink.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub remaining: f64,
    pub decision: isize,
}

impl Vertex {
    pub fn new(remaining: f64, decision: isize) -> Self {
        Self {
            remaining,
            decision,
        }
    }

    /// The unique source `(capacity, -1)`.
    pub fn source(capacity: f64) -> Self {
        Self::new(capacity, -1)
    }

    /// The unique sink `(0, n_items)`.
    pub fn sink(n_items: usize) -> Self {
        Self::new(0.0, n_items as isize)
    }

    pub fn is_source(&self) -> bool {
        self.decision < 0
    }

    // -0.0 and 0.0 must land on the same vertex.
    #[inline]
    fn capacity_bits(&self) -> u64 {
        if self.remaining == 0.0 {
            0.0f64.to_bits()
        } else {
            self.remaining.to_bits()
        }
    }
}

impl PartialEq for Vertex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.decision == other.decision && self.capacity_bits() == other.capacity_bits()
    }
}
impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity_bits().hash(state);
        self.decision.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.remaining, self.decision)
    }
}

/// Which decision an edge encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Leave item `i` out.
    Skip(usize),
    /// Put item `i` in.
    Take(usize),
    /// Collapse the last decision layer into the sink.
    Sink,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub to: Vertex,
    pub weight: f64,
    pub kind: EdgeKind,
}

/// Immutable layered DAG built by [`build_graph`].
#[derive(Clone, Debug)]
pub struct KnapsackGraph {
    /// adjacency[v] = outgoing edges of `v`, in insertion order.
    adjacency: HashMap<Vertex, Vec<Edge>>,
    /// layers[k] = vertices with decision index `k - 1`, in discovery order.
    layers: Vec<Vec<Vertex>>,
    n_items: usize,
    max_value: f64,
}

impl KnapsackGraph {
    pub fn source(&self) -> Vertex {
        self.layers[0][0]
    }

    /// The sink `(0, N)`, derived from the item count.
    pub fn sink(&self) -> Vertex {
        Vertex::sink(self.n_items)
    }

    pub fn num_items(&self) -> usize {
        self.n_items
    }

    /// Penalty paid by every skip edge.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Outgoing edges of `v`; empty for the sink and for unknown vertices.
    pub fn edges(&self, v: &Vertex) -> &[Edge] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertices grouped by layer, source first and sink last.
    ///
    /// This is a topological order of the DAG.
    pub fn layers(&self) -> &[Vec<Vertex>] {
        &self.layers
    }

    /// Every vertex of the graph, sink included, in topological order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.layers.iter().flatten()
    }

    pub fn num_vertices(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains(&self, v: &Vertex) -> bool {
        self.layers
            .get((v.decision + 1) as usize)
            .is_some_and(|layer| layer.contains(v))
    }
}

/// Build the decision DAG for `(values, volumes, capacity)`.
///
/// No validation is performed: callers are expected to pass equally long,
/// finite inputs. For zero items the source links straight to the sink.
pub fn build_graph(values: &[f64], volumes: &[f64], capacity: f64) -> KnapsackGraph {
    let n = values.len().min(volumes.len());
    let max_value = values[..n].iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_value = if n == 0 { 0.0 } else { max_value };

    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("build_graph", items = n, capacity, max_value);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut adjacency: HashMap<Vertex, Vec<Edge>> = HashMap::new();
    let mut layers = Vec::with_capacity(n + 2);
    let mut frontier = vec![Vertex::source(capacity)];

    for item in 0..n {
        let decision = item as isize;
        let mut next = Vec::with_capacity(frontier.len() * 2);
        let mut seen = HashSet::with_capacity(frontier.len() * 2);

        for &u in &frontier {
            let out = adjacency.entry(u).or_default();

            let skip = Vertex::new(u.remaining, decision);
            out.push(Edge {
                to: skip,
                weight: max_value,
                kind: EdgeKind::Skip(item),
            });
            if seen.insert(skip) {
                next.push(skip);
            }

            let left = u.remaining - volumes[item];
            if left >= 0.0 {
                let take = Vertex::new(left, decision);
                out.push(Edge {
                    to: take,
                    weight: max_value - values[item],
                    kind: EdgeKind::Take(item),
                });
                if seen.insert(take) {
                    next.push(take);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(item, width = next.len(), "frontier expanded");

        layers.push(std::mem::replace(&mut frontier, next));
    }

    let sink = Vertex::sink(n);
    for &u in &frontier {
        adjacency.entry(u).or_default().push(Edge {
            to: sink,
            weight: 0.0,
            kind: EdgeKind::Sink,
        });
    }
    layers.push(frontier);
    layers.push(vec![sink]);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = layers.iter().map(Vec::len).sum::<usize>(),
        "graph built"
    );

    KnapsackGraph {
        adjacency,
        layers,
        n_items: n,
        max_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_equality_merges_signed_zero() {
        let a = Vertex::new(0.0, 3);
        let b = Vertex::new(-0.0, 3);
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_ne!(Vertex::new(0.0, 2), a);
    }

    #[test]
    fn textbook_graph_shape() {
        let g = build_graph(&[60.0, 100.0, 120.0], &[1.0, 2.0, 3.0], 5.0);
        assert_eq!(g.num_items(), 3);
        assert_eq!(g.max_value(), 120.0);
        assert_eq!(g.source(), Vertex::new(5.0, -1));
        assert_eq!(g.sink(), Vertex::new(0.0, 3));
        // source, 3 decision layers, sink
        assert_eq!(g.layers().len(), 5);
        let widths: Vec<usize> = g.layers().iter().map(Vec::len).collect();
        // {5,4} -> {5,3,4,2} -> {5,2,4,1,3,0,...}
        assert_eq!(widths[0], 1);
        assert_eq!(widths[1], 2);
        assert_eq!(widths[2], 4);
        assert_eq!(widths[4], 1);
        assert!(g.edges(&g.sink()).is_empty());
    }

    #[test]
    fn structurally_equal_states_are_shared() {
        // Taking either of two unit items leaves the same capacity.
        let g = build_graph(&[1.0, 1.0], &[1.0, 1.0], 3.0);
        let layer = &g.layers()[2];
        let twos = layer.iter().filter(|v| v.remaining == 2.0).count();
        assert_eq!(twos, 1);
        assert_eq!(layer.len(), 3);
    }

    #[test]
    fn take_edge_only_when_item_fits() {
        let g = build_graph(&[10.0], &[7.0], 5.0);
        let out = g.edges(&g.source());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, EdgeKind::Skip(0));
        assert_eq!(out[0].weight, 10.0);
    }

    #[test]
    fn edges_only_connect_consecutive_layers() {
        let g = build_graph(&[20.0, 17.0, 18.0, 15.0, 7.0], &[4.0, 3.0, 2.0, 2.0, 1.0], 6.0);
        for v in g.vertices() {
            for e in g.edges(v) {
                assert_eq!(e.to.decision, v.decision + 1);
                assert!(e.weight >= 0.0);
                assert!(e.to.remaining >= 0.0);
            }
        }
        assert!(g.contains(&g.sink()));
        assert!(!g.contains(&Vertex::new(6.0, 5)));
    }

    #[test]
    fn every_non_sink_vertex_has_a_skip_or_sink_edge() {
        let g = build_graph(&[3.0, 4.0, 5.0], &[2.0, 3.0, 4.0], 5.0);
        let sink = g.sink();
        for v in g.vertices().filter(|v| **v != sink) {
            assert!(g
                .edges(v)
                .iter()
                .any(|e| matches!(e.kind, EdgeKind::Skip(_) | EdgeKind::Sink)));
        }
    }

    #[test]
    fn zero_items_link_source_to_sink() {
        let g = build_graph(&[], &[], 4.0);
        assert_eq!(g.max_value(), 0.0);
        assert_eq!(g.sink(), Vertex::new(0.0, 0));
        assert_eq!(g.edges(&g.source()).len(), 1);
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.num_edges(), 1);
    }
}
