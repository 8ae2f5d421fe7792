//! Topological relaxation over the DAG layers.
//! Layer k is final once every edge out of layer k-1 has been relaxed, so a
//! single sweep visits each edge exactly once.

use crate::graph::KnapsackGraph;
use crate::solvers::ShortestPaths;
use crate::traits::ShortestPathSolver;

#[derive(Clone, Copy, Debug, Default)]
pub struct LayeredRelaxation;

impl ShortestPathSolver for LayeredRelaxation {
    fn name(&self) -> &'static str {
        "layered"
    }

    fn solve(&self, graph: &KnapsackGraph) -> ShortestPaths {
        let mut sp = ShortestPaths::unreached(graph);
        for (_depth, layer) in graph.layers().iter().enumerate() {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("relax_layer", depth = _depth, width = layer.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            for u in layer {
                if !sp.is_reachable(u) {
                    continue;
                }
                for e in graph.edges(u) {
                    sp.relax(*u, e.to, e.weight);
                }
            }
        }
        sp
    }
}
