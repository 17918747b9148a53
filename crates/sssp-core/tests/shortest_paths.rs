//! End-to-end shortest path scenarios through the public API

use sssp_core::error::SsspError;
use sssp_core::graph::{
    build_graph, parse_edge, path_cost, reconstruct_path, run, run_by_name, shortest_path,
    Algorithm, GraphBuilder, WeightedGraph,
};

fn basic() -> WeightedGraph<u32> {
    build_graph([((0, 1), 5.0), ((1, 2), 3.0), ((0, 2), 10.0)]).unwrap()
}

#[test]
fn test_basic_scenario() {
    let graph = basic();
    for algorithm in Algorithm::ALL {
        let store = run(algorithm, &graph, &0).unwrap();
        assert_eq!(store.distance(&1).unwrap(), 5.0);
        assert_eq!(store.distance(&2).unwrap(), 8.0);

        let result = shortest_path(&store, &2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.cost, 8.0);
    }
}

#[test]
fn test_negative_weight_with_bellman_ford() {
    let graph = build_graph([((0, 1), 4.0), ((1, 2), -2.0), ((0, 2), 3.0)]).unwrap();
    let store = run(Algorithm::BellmanFord, &graph, &0).unwrap();

    assert_eq!(store.distance(&2).unwrap(), 2.0);
    assert_eq!(reconstruct_path(&store, &2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_unreachable_target() {
    let graph = GraphBuilder::new()
        .vertex(0)
        .vertex(1)
        .vertex(2)
        .edge(0, 1, 1.0)
        .build()
        .unwrap();

    for algorithm in Algorithm::ALL {
        let store = run(algorithm, &graph, &0).unwrap();
        assert!(store.distance(&2).unwrap().is_infinite());
        assert!(matches!(
            reconstruct_path(&store, &2),
            Err(SsspError::NoPath { .. })
        ));
        assert!(matches!(
            path_cost(&store, &2),
            Err(SsspError::NoPath { .. })
        ));
    }
}

#[test]
fn test_run_by_name() {
    let graph = basic();
    let store = run_by_name("topo_relax", &graph, &0).unwrap();
    assert_eq!(store.algorithm(), Algorithm::TopoRelax);

    assert!(matches!(
        run_by_name("bogus", &graph, &0),
        Err(SsspError::UnknownAlgorithm { .. })
    ));
    assert!(matches!(
        run_by_name("dijkstra", &graph, &9),
        Err(SsspError::InvalidSource { .. })
    ));
}

#[test]
fn test_textual_edges() {
    let edges = ["a,b=1", "b,c=2.5", "a,c=4"]
        .into_iter()
        .map(parse_edge)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let graph = build_graph(edges).unwrap();

    let source = "a".to_string();
    let target = "c".to_string();
    let store = run(Algorithm::Dijkstra, &graph, &source).unwrap();
    let result = shortest_path(&store, &target).unwrap();
    assert_eq!(result.path, vec!["a", "b", "c"]);
    assert_eq!(result.cost, 3.5);
}

#[test]
fn test_store_exposes_distance_and_predecessor() {
    let graph = basic();
    let store = run(Algorithm::Dijkstra, &graph, &0).unwrap();

    let rows: Vec<_> = store
        .entries()
        .map(|entry| (*entry.vertex, entry.distance, entry.predecessor.copied()))
        .collect();
    assert_eq!(
        rows,
        vec![(0, 0.0, None), (1, 5.0, Some(0)), (2, 8.0, Some(1))]
    );
}

#[test]
fn test_runs_share_a_graph_across_threads() {
    let graph = basic();
    std::thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let graph = &graph;
                scope.spawn(move || run(algorithm, graph, &0).unwrap().distance(&2).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 8.0);
        }
    });
}

#[test]
fn test_overflowing_path_weight_is_rejected() {
    let graph = build_graph([((0, 1), 1e308), ((1, 2), 1e308)]).unwrap();
    for algorithm in Algorithm::ALL {
        let err = run(algorithm, &graph, &0).unwrap_err();
        assert!(
            matches!(err, SsspError::InvalidGraph { .. }),
            "{algorithm}: {err}"
        );
    }
}
