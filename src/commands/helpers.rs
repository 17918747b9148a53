//! Helper functions shared across commands

use sssp_core::{bail_invalid_graph, bail_usage};
use sssp_core::error::Result;
use sssp_core::graph::{parse_edge, GraphBuilder, WeightedGraph};

use crate::cli::GraphArgs;

/// Build a graph from `--edge u,v=weight` and `--vertex v` arguments
pub fn build_graph_from_args(args: &GraphArgs) -> Result<WeightedGraph<String>> {
    if args.edges.is_empty() && args.vertices.is_empty() {
        bail_usage!("no graph given; pass edges as --edge u,v=weight");
    }

    let edges = args
        .edges
        .iter()
        .map(|edge| parse_edge(edge))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = GraphBuilder::new().edges(edges);
    for vertex in &args.vertices {
        let vertex = vertex.trim();
        if vertex.is_empty() {
            bail_invalid_graph!("--vertex needs a non-empty name");
        }
        builder = builder.vertex(vertex.to_string());
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sssp_core::error::SsspError;

    #[test]
    fn test_build_graph_from_args() {
        let args = GraphArgs {
            edges: vec!["0,1=5".to_string(), "1,2=3".to_string()],
            vertices: vec!["9".to_string()],
        };
        let graph = build_graph_from_args(&args).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_vertex(&"9".to_string()));
    }

    #[test]
    fn test_empty_graph_is_usage_error() {
        let err = build_graph_from_args(&GraphArgs::default()).unwrap_err();
        assert!(matches!(err, SsspError::UsageError(_)));
    }

    #[test]
    fn test_malformed_edge() {
        let args = GraphArgs {
            edges: vec!["0,1=heavy".to_string()],
            vertices: Vec::new(),
        };
        let err = build_graph_from_args(&args).unwrap_err();
        assert!(matches!(err, SsspError::InvalidGraph { .. }));
    }

    #[test]
    fn test_blank_vertex_is_rejected() {
        for blank in ["", "   "] {
            let args = GraphArgs {
                edges: vec!["0,1=5".to_string()],
                vertices: vec![blank.to_string()],
            };
            let err = build_graph_from_args(&args).unwrap_err();
            assert!(matches!(err, SsspError::InvalidGraph { .. }));
        }
    }
}
