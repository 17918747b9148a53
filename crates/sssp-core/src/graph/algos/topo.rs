use crate::error::Result;
use crate::graph::algos::{Algorithm, RunStats, ShortestPathStrategy};
use crate::graph::relax::relax;
use crate::graph::state::VertexStateStore;
use crate::graph::types::{Vertex, VisitPolicy};
use crate::graph::weighted::WeightedGraph;

/// Relax out-edges once per vertex in topological order. O(V + E).
///
/// Every predecessor of a vertex is visited before the vertex itself, so its
/// distance is final by the time it is marked. Input must be acyclic; a cycle
/// fails with `CycleDetected` before any state is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopoRelax;

impl ShortestPathStrategy for TopoRelax {
    fn algorithm(&self) -> Algorithm {
        Algorithm::TopoRelax
    }

    fn solve<'g, V: Vertex>(
        &self,
        graph: &'g WeightedGraph<V>,
        source: usize,
    ) -> Result<VertexStateStore<'g, V>> {
        let order = graph.topological_order()?;
        let mut states = VertexStateStore::new(graph, source, self.algorithm());
        let mut stats = RunStats::default();

        for u in order {
            states.mark_visited(u);
            stats.passes += 1;
            for &v in graph.adjacent_indices(u) {
                let improved = relax(&mut states, u, v, VisitPolicy::SettleOnce)?;
                stats.record_relaxation(improved);
            }
        }

        stats.log(self.algorithm());
        Ok(states)
    }
}
