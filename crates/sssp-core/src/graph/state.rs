//! Per-vertex state for a single algorithm run

use crate::error::{Result, SsspError};
use crate::graph::algos::Algorithm;
use crate::graph::types::{Vertex, Weight, INFINITY};
use crate::graph::weighted::WeightedGraph;

/// Shortest-path bookkeeping for one vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexState {
    distance: Weight,
    predecessor: Option<usize>,
    visited: bool,
}

impl VertexState {
    fn unreached() -> Self {
        Self {
            distance: INFINITY,
            predecessor: None,
            visited: false,
        }
    }

    /// Best known distance from the source; `INFINITY` if unreached
    pub fn distance(&self) -> Weight {
        self.distance
    }

    /// Dense index of the predecessor on the best known path
    pub fn predecessor_index(&self) -> Option<usize> {
        self.predecessor
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn is_reachable(&self) -> bool {
        self.distance < INFINITY
    }
}

/// One row of a completed store, resolved to vertex values
#[derive(Debug, Clone, PartialEq)]
pub struct StateEntry<'a, V> {
    pub vertex: &'a V,
    pub distance: Weight,
    pub predecessor: Option<&'a V>,
    pub visited: bool,
}

/// States for every vertex of a graph, owned by one algorithm run.
///
/// Populated eagerly for every vertex when the run starts. Distances can only
/// go down, and a predecessor changes only together with its distance.
#[derive(Debug, Clone)]
pub struct VertexStateStore<'g, V> {
    graph: &'g WeightedGraph<V>,
    states: Vec<VertexState>,
    source: usize,
    algorithm: Algorithm,
}

impl<'g, V: Vertex> VertexStateStore<'g, V> {
    /// Fresh store with the source at distance 0 and marked visited
    pub(crate) fn new(graph: &'g WeightedGraph<V>, source: usize, algorithm: Algorithm) -> Self {
        let mut states = vec![VertexState::unreached(); graph.vertex_count()];
        states[source].distance = 0.0;
        states[source].visited = true;
        Self {
            graph,
            states,
            source,
            algorithm,
        }
    }

    pub fn graph(&self) -> &'g WeightedGraph<V> {
        self.graph
    }

    pub fn source(&self) -> &'g V {
        self.graph.vertex_at(self.source)
    }

    pub fn source_index(&self) -> usize {
        self.source
    }

    /// Algorithm that produced this store
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of `vertex`, or `UnknownVertex`
    pub fn state(&self, vertex: &V) -> Result<&VertexState> {
        self.graph
            .index_of(vertex)
            .map(|index| &self.states[index])
            .ok_or_else(|| SsspError::unknown_vertex(vertex))
    }

    pub fn distance(&self, vertex: &V) -> Result<Weight> {
        Ok(self.state(vertex)?.distance)
    }

    pub fn predecessor(&self, vertex: &V) -> Result<Option<&'g V>> {
        Ok(self
            .state(vertex)?
            .predecessor
            .map(|index| self.graph.vertex_at(index)))
    }

    pub fn is_visited(&self, vertex: &V) -> Result<bool> {
        Ok(self.state(vertex)?.visited)
    }

    pub fn is_reachable(&self, vertex: &V) -> Result<bool> {
        Ok(self.state(vertex)?.is_reachable())
    }

    /// All states in vertex order
    pub fn entries(&self) -> impl Iterator<Item = StateEntry<'g, V>> + '_ {
        let graph = self.graph;
        self.states
            .iter()
            .enumerate()
            .map(move |(index, state)| StateEntry {
                vertex: graph.vertex_at(index),
                distance: state.distance,
                predecessor: state.predecessor.map(|p| graph.vertex_at(p)),
                visited: state.visited,
            })
    }

    pub(crate) fn distance_at(&self, index: usize) -> Weight {
        self.states[index].distance
    }

    pub(crate) fn predecessor_at(&self, index: usize) -> Option<usize> {
        self.states[index].predecessor
    }

    pub(crate) fn is_visited_at(&self, index: usize) -> bool {
        self.states[index].visited
    }

    pub(crate) fn mark_visited(&mut self, index: usize) {
        self.states[index].visited = true;
    }

    /// Lower the distance of `index` through `predecessor`.
    ///
    /// Returns false, leaving the state untouched, unless `distance` is
    /// strictly below the current one.
    pub(crate) fn improve(&mut self, index: usize, distance: Weight, predecessor: usize) -> bool {
        let state = &mut self.states[index];
        if distance < state.distance {
            state.distance = distance;
            state.predecessor = Some(predecessor);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::weighted::build_graph;

    fn chain() -> WeightedGraph<u32> {
        build_graph([((0, 1), 2.0), ((1, 2), 3.0)]).unwrap()
    }

    #[test]
    fn test_new_store_initializes_every_vertex() {
        let graph = chain();
        let store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);

        assert_eq!(store.len(), 3);
        assert_eq!(store.source(), &0);
        assert_eq!(store.distance(&0).unwrap(), 0.0);
        assert!(store.is_visited(&0).unwrap());
        assert_eq!(store.predecessor(&0).unwrap(), None);

        for vertex in [1, 2] {
            assert_eq!(store.distance(&vertex).unwrap(), INFINITY);
            assert!(!store.is_visited(&vertex).unwrap());
            assert!(!store.is_reachable(&vertex).unwrap());
            assert_eq!(store.predecessor(&vertex).unwrap(), None);
        }
    }

    #[test]
    fn test_improve_only_lowers_distance() {
        let graph = chain();
        let mut store = VertexStateStore::new(&graph, 0, Algorithm::BellmanFord);

        assert!(store.improve(1, 5.0, 0));
        assert_eq!(store.distance(&1).unwrap(), 5.0);

        // Equal or larger distances never replace the current one
        assert!(!store.improve(1, 5.0, 2));
        assert!(!store.improve(1, 7.0, 2));
        assert_eq!(store.distance(&1).unwrap(), 5.0);
        assert_eq!(store.predecessor(&1).unwrap(), Some(&0));

        assert!(store.improve(1, 2.0, 0));
        assert_eq!(store.distance(&1).unwrap(), 2.0);
    }

    #[test]
    fn test_unknown_vertex_lookup_fails() {
        let graph = chain();
        let store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);
        let err = store.distance(&99).unwrap_err();
        assert!(matches!(err, SsspError::UnknownVertex { .. }));
    }

    #[test]
    fn test_entries_resolve_vertices() {
        let graph = chain();
        let mut store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);
        store.improve(1, 2.0, 0);
        store.mark_visited(1);

        let entries: Vec<_> = store.entries().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].vertex, &1);
        assert_eq!(entries[1].distance, 2.0);
        assert_eq!(entries[1].predecessor, Some(&0));
        assert!(entries[1].visited);
        assert_eq!(entries[2].predecessor, None);
    }
}
