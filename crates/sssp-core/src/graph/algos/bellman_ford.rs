use crate::config::BellmanFordConfig;
use crate::error::{Result, SsspError};
use crate::graph::algos::{Algorithm, RunStats, ShortestPathStrategy};
use crate::graph::relax::{candidate_distance, relax};
use crate::graph::state::VertexStateStore;
use crate::graph::types::{Vertex, VisitPolicy};
use crate::graph::weighted::WeightedGraph;

/// Bellman-Ford: up to |V| - 1 passes over every edge. O(V * E).
///
/// Only the source is ever marked visited; relaxation runs with
/// [`VisitPolicy::Revisit`] so negative edges can lower any vertex again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BellmanFord {
    /// Stop as soon as a full pass lowers nothing
    pub early_exit: bool,
    /// Run one extra pass and fail with `NegativeCycle` if it still improves
    pub detect_negative_cycles: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self {
            early_exit: true,
            detect_negative_cycles: true,
        }
    }
}

impl From<&BellmanFordConfig> for BellmanFord {
    fn from(config: &BellmanFordConfig) -> Self {
        Self {
            early_exit: config.early_exit,
            detect_negative_cycles: config.detect_negative_cycles,
        }
    }
}

impl ShortestPathStrategy for BellmanFord {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BellmanFord
    }

    fn solve<'g, V: Vertex>(
        &self,
        graph: &'g WeightedGraph<V>,
        source: usize,
    ) -> Result<VertexStateStore<'g, V>> {
        let mut states = VertexStateStore::new(graph, source, self.algorithm());
        let mut stats = RunStats::default();

        for _ in 1..graph.vertex_count() {
            stats.passes += 1;
            let mut improved_any = false;
            for (u, v) in graph.edge_indices() {
                let improved = relax(&mut states, u, v, VisitPolicy::Revisit)?;
                stats.record_relaxation(improved);
                improved_any |= improved;
            }
            if self.early_exit && !improved_any {
                break;
            }
        }

        if self.detect_negative_cycles {
            check_negative_cycle(graph, &states)?;
        }

        stats.log(self.algorithm());
        Ok(states)
    }
}

/// One more pass without writing: any edge that could still lower its target
/// lies on or behind a negative cycle reachable from the source
fn check_negative_cycle<V: Vertex>(
    graph: &WeightedGraph<V>,
    states: &VertexStateStore<'_, V>,
) -> Result<()> {
    for (u, v) in graph.edge_indices() {
        let Some(candidate) = candidate_distance(states, u, v)? else {
            continue;
        };
        if candidate < states.distance_at(v) {
            tracing::warn!(vertex = %graph.vertex_at(v), "negative_cycle_detected");
            return Err(SsspError::NegativeCycle {
                vertex: graph.vertex_at(v).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::path::reconstruct_path;
    use crate::graph::weighted::{build_graph, GraphBuilder};

    fn solve(graph: &WeightedGraph<u32>) -> Result<VertexStateStore<'_, u32>> {
        BellmanFord::default().solve(graph, 0)
    }

    #[test]
    fn test_negative_edge_beats_direct_edge() {
        let graph = build_graph([((0, 1), 4.0), ((1, 2), -2.0), ((0, 2), 3.0)]).unwrap();
        let states = solve(&graph).unwrap();

        assert_eq!(states.distance(&1).unwrap(), 4.0);
        assert_eq!(states.distance(&2).unwrap(), 2.0);
        assert_eq!(reconstruct_path(&states, &2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_only_source_is_visited() {
        let graph = build_graph([((0, 1), 1.0), ((1, 2), 1.0)]).unwrap();
        let states = solve(&graph).unwrap();

        assert!(states.is_visited(&0).unwrap());
        assert!(!states.is_visited(&1).unwrap());
        assert!(!states.is_visited(&2).unwrap());
    }

    #[test]
    fn test_edge_order_needs_repeated_passes() {
        // Edges are inserted so that one pass in edge order is not enough
        let graph = GraphBuilder::new()
            .edge(2, 3, 1.0)
            .edge(1, 2, 1.0)
            .edge(0, 1, 1.0)
            .build()
            .unwrap();
        let states = BellmanFord::default().solve(&graph, graph.index_of(&0).unwrap()).unwrap();

        assert_eq!(states.distance(&3).unwrap(), 3.0);
        assert_eq!(reconstruct_path(&states, &3).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fixed_pass_count_matches_early_exit() {
        let graph = build_graph([
            ((0, 1), 2.0),
            ((0, 2), 7.0),
            ((1, 2), 3.0),
            ((2, 3), -1.0),
            ((1, 3), 9.0),
        ])
        .unwrap();

        let early = solve(&graph).unwrap();
        let full = BellmanFord {
            early_exit: false,
            ..Default::default()
        }
        .solve(&graph, 0)
        .unwrap();

        let early: Vec<_> = early.entries().collect();
        let full: Vec<_> = full.entries().collect();
        assert_eq!(early, full);
    }

    #[test]
    fn test_negative_cycle_detected() {
        let graph = build_graph([((0, 1), 1.0), ((1, 2), -3.0), ((2, 1), 1.0), ((2, 3), 1.0)])
            .unwrap();
        let err = solve(&graph).unwrap_err();
        assert!(matches!(err, SsspError::NegativeCycle { .. }));
    }

    #[test]
    fn test_unreachable_negative_cycle_is_ignored() {
        let graph = GraphBuilder::new()
            .edge(0, 1, 1.0)
            .edge(2, 3, -3.0)
            .edge(3, 2, 1.0)
            .build()
            .unwrap();
        let states = solve(&graph).unwrap();
        assert_eq!(states.distance(&1).unwrap(), 1.0);
        assert!(states.distance(&2).unwrap().is_infinite());
        assert!(states.distance(&3).unwrap().is_infinite());
    }

    #[test]
    fn test_negative_cycle_tolerated_without_detection() {
        let graph = build_graph([((0, 1), 1.0), ((1, 2), -3.0), ((2, 1), 1.0)]).unwrap();
        let states = BellmanFord {
            detect_negative_cycles: false,
            ..Default::default()
        }
        .solve(&graph, 0)
        .unwrap();
        assert!(states.distance(&1).unwrap() < 1.0);
    }

    #[test]
    fn test_cycle_through_source_leaves_source_alone() {
        let graph = build_graph([((0, 1), 1.0), ((1, 0), -3.0)]).unwrap();
        let states = BellmanFord {
            detect_negative_cycles: false,
            ..Default::default()
        }
        .solve(&graph, 0)
        .unwrap();
        assert_eq!(states.distance(&0).unwrap(), 0.0);
        assert_eq!(states.predecessor(&0).unwrap(), None);
        assert_eq!(reconstruct_path(&states, &1).unwrap(), vec![0, 1]);

        let err = solve(&graph).unwrap_err();
        assert!(matches!(err, SsspError::NegativeCycle { .. }));
    }

    #[test]
    fn test_negative_overflow_fails() {
        let graph = build_graph([((0, 1), -1e308), ((1, 2), -1e308)]).unwrap();
        let err = solve(&graph).unwrap_err();
        assert!(matches!(err, SsspError::InvalidGraph { .. }));
    }

    #[test]
    fn test_zero_weight_self_loop() {
        let graph = build_graph([((0, 1), 2.0), ((1, 1), 0.0), ((1, 2), 1.0)]).unwrap();
        let states = solve(&graph).unwrap();
        assert_eq!(states.distance(&1).unwrap(), 2.0);
        assert_eq!(states.predecessor(&1).unwrap(), Some(&0));
        assert_eq!(states.distance(&2).unwrap(), 3.0);
    }

    #[test]
    fn test_single_vertex_graph() {
        let graph = GraphBuilder::<u32>::new().vertex(0).build().unwrap();
        let states = solve(&graph).unwrap();
        assert_eq!(states.distance(&0).unwrap(), 0.0);
        assert_eq!(reconstruct_path(&states, &0).unwrap(), vec![0]);
    }
}
