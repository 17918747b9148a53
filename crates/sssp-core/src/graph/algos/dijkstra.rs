use crate::error::Result;
use crate::graph::algos::{Algorithm, RunStats, ShortestPathStrategy};
use crate::graph::relax::relax;
use crate::graph::state::VertexStateStore;
use crate::graph::types::{Vertex, VisitPolicy, Weight};
use crate::graph::weighted::WeightedGraph;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: usize,
    pub distance: Weight,
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
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState<'g, V> {
    states: VertexStateStore<'g, V>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    stats: RunStats,
}

impl<'g, V: Vertex> DijkstraState<'g, V> {
    fn new(graph: &'g WeightedGraph<V>, source: usize) -> Self {
        Self {
            states: VertexStateStore::new(graph, source, Algorithm::Dijkstra),
            heap: BinaryHeap::new(),
            stats: RunStats::default(),
        }
    }

    /// Relax every out-edge of a settled vertex, queueing improved neighbors
    fn expand(&mut self, u: usize) -> Result<()> {
        let graph = self.states.graph();
        self.stats.passes += 1;
        for &v in graph.adjacent_indices(u) {
            let improved = relax(&mut self.states, u, v, VisitPolicy::SettleOnce)?;
            self.stats.record_relaxation(improved);
            if improved {
                self.heap.push(Reverse(HeapEntry {
                    vertex: v,
                    distance: self.states.distance_at(v),
                }));
                self.stats.heap_pushes += 1;
            }
        }
        Ok(())
    }

    /// Pop the closest unsettled vertex.
    ///
    /// Improvements re-insert rather than decrease keys, so the heap can hold
    /// superseded entries for a vertex; those are skipped here.
    fn pop_unsettled(&mut self) -> Option<usize> {
        while let Some(Reverse(HeapEntry { vertex, distance })) = self.heap.pop() {
            if self.states.is_visited_at(vertex) || distance > self.states.distance_at(vertex) {
                self.stats.stale_pops += 1;
                continue;
            }
            return Some(vertex);
        }
        None
    }
}

/// Dijkstra: settle vertices in order of distance. O((V + E) log V).
///
/// Requires non-negative weights; this is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl ShortestPathStrategy for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn solve<'g, V: Vertex>(
        &self,
        graph: &'g WeightedGraph<V>,
        source: usize,
    ) -> Result<VertexStateStore<'g, V>> {
        let mut state = DijkstraState::new(graph, source);

        // The source starts settled at distance 0
        state.expand(source)?;

        while let Some(u) = state.pop_unsettled() {
            state.states.mark_visited(u);
            state.expand(u)?;
        }

        state.stats.log(self.algorithm());
        Ok(state.states)
    }
}
