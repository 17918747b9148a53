//! Weighted graphs and single-source shortest paths
//!
//! Provides the graph model and the algorithms that run over it:
//! - `weighted`: immutable weighted directed graph and its builder
//! - `state`: per-vertex distance/predecessor/visited store for one run
//! - `relax`: the edge relaxation step every algorithm shares
//! - `algos`: Bellman-Ford, Dijkstra and topological-order relaxation
//! - `path`: predecessor walk from a target back to the source

pub mod algos;
pub mod path;
pub mod relax;
pub mod state;
pub mod types;
pub mod weighted;

pub use algos::{run, run_by_name, Algorithm, ShortestPathStrategy, Solver};
pub use path::{path_cost, reconstruct_path, shortest_path};
pub use relax::relax;
pub use state::{StateEntry, VertexState, VertexStateStore};
pub use types::{PathResult, Vertex, VisitPolicy, Weight, INFINITY};
pub use weighted::{build_graph, parse_edge, GraphBuilder, WeightedGraph};
