//! Path reconstruction from a completed state store

use crate::error::{Result, SsspError};
use crate::graph::state::VertexStateStore;
use crate::graph::types::{PathResult, Vertex, Weight};

/// Walk predecessor links from `target` back to the run's source.
///
/// Returns the vertices in source to target order. Fails with `NoPath` when
/// the target was never reached and `UnknownVertex` when it is not in the
/// graph. A predecessor chain longer than the vertex count can only come
/// from a negative cycle and fails with `NegativeCycle`.
#[tracing::instrument(skip(store, target), fields(source = %store.source(), target = %target))]
pub fn reconstruct_path<V: Vertex>(store: &VertexStateStore<'_, V>, target: &V) -> Result<Vec<V>> {
    let graph = store.graph();
    let target_index = graph
        .index_of(target)
        .ok_or_else(|| SsspError::unknown_vertex(target))?;
    let source_index = store.source_index();

    if !store.state(target)?.is_reachable() {
        return Err(SsspError::no_path(store.source(), target));
    }

    let mut indices = vec![target_index];
    let mut current = target_index;
    while current != source_index {
        let Some(predecessor) = store.predecessor_at(current) else {
            return Err(SsspError::no_path(store.source(), target));
        };
        if indices.len() >= store.len() {
            return Err(SsspError::NegativeCycle {
                vertex: graph.vertex_at(current).to_string(),
            });
        }
        indices.push(predecessor);
        current = predecessor;
    }

    indices.reverse();
    tracing::debug!(hops = indices.len() - 1, "path_reconstructed");
    Ok(indices
        .into_iter()
        .map(|index| graph.vertex_at(index).clone())
        .collect())
}

/// Total cost of the shortest path to `target`
pub fn path_cost<V: Vertex>(store: &VertexStateStore<'_, V>, target: &V) -> Result<Weight> {
    let distance = store.distance(target)?;
    if distance.is_infinite() {
        return Err(SsspError::no_path(store.source(), target));
    }
    Ok(distance)
}

/// Path and cost to `target` in one result
pub fn shortest_path<V: Vertex>(
    store: &VertexStateStore<'_, V>,
    target: &V,
) -> Result<PathResult<V>> {
    let path = reconstruct_path(store, target)?;
    let cost = path_cost(store, target)?;
    Ok(PathResult {
        source: store.source().clone(),
        target: target.clone(),
        path,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::Algorithm;
    use crate::graph::weighted::{build_graph, GraphBuilder, WeightedGraph};

    fn diamond() -> WeightedGraph<u32> {
        build_graph([((0, 1), 5.0), ((1, 2), 3.0), ((0, 2), 10.0)]).unwrap()
    }

    #[test]
    fn test_reconstruct_path_follows_predecessors() {
        let graph = diamond();
        let mut store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);
        store.improve(1, 5.0, 0);
        store.improve(2, 8.0, 1);

        assert_eq!(reconstruct_path(&store, &2).unwrap(), vec![0, 1, 2]);
        assert_eq!(path_cost(&store, &2).unwrap(), 8.0);
    }

    #[test]
    fn test_reconstruct_path_to_source() {
        let graph = diamond();
        let store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);
        assert_eq!(reconstruct_path(&store, &0).unwrap(), vec![0]);
        assert_eq!(path_cost(&store, &0).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_distance_intermediate_is_not_mistaken_for_source() {
        let graph = build_graph([((0, 1), 0.0), ((1, 2), 0.0)]).unwrap();
        let mut store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);
        store.improve(1, 0.0, 0);
        store.improve(2, 0.0, 1);

        assert_eq!(reconstruct_path(&store, &2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unreachable_target_fails() {
        let graph = GraphBuilder::new()
            .edge(0, 1, 1.0)
            .vertex(2)
            .build()
            .unwrap();
        let store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);

        let err = reconstruct_path(&store, &2).unwrap_err();
        assert!(matches!(err, SsspError::NoPath { .. }));
        let err = path_cost(&store, &2).unwrap_err();
        assert!(matches!(err, SsspError::NoPath { .. }));
    }

    #[test]
    fn test_unknown_target_fails() {
        let graph = diamond();
        let store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);
        let err = reconstruct_path(&store, &7).unwrap_err();
        assert!(matches!(err, SsspError::UnknownVertex { .. }));
    }

    #[test]
    fn test_predecessor_cycle_is_reported() {
        let graph = build_graph([((0, 1), 1.0), ((1, 2), 1.0), ((2, 1), -5.0)]).unwrap();
        let mut store = VertexStateStore::new(&graph, 0, Algorithm::BellmanFord);
        store.improve(1, 1.0, 2);
        store.improve(2, 0.0, 1);

        let err = reconstruct_path(&store, &2).unwrap_err();
        assert!(matches!(err, SsspError::NegativeCycle { .. }));
    }

    #[test]
    fn test_shortest_path_result() {
        let graph = diamond();
        let mut store = VertexStateStore::new(&graph, 0, Algorithm::Dijkstra);
        store.improve(1, 5.0, 0);
        store.improve(2, 8.0, 1);

        let result = shortest_path(&store, &2).unwrap();
        assert_eq!(result.source, 0);
        assert_eq!(result.target, 2);
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.cost, 8.0);
        assert_eq!(result.hops(), 2);
    }
}
