//! Shortest-path algorithm implementations
//!
//! Contains the three single-source strategies, all built on the same
//! relaxation step:
//! - `bellman_ford`: repeated full edge passes, tolerates negative weights
//! - `dijkstra`: binary-heap settle-once traversal for non-negative weights
//! - `topo`: one pass in topological order for DAGs
//! - `shared`: per-run counters shared by the strategies

pub mod bellman_ford;
pub mod dijkstra;
pub mod shared;
pub mod topo;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::{Result, SsspError};
use crate::graph::state::VertexStateStore;
use crate::graph::types::Vertex;
use crate::graph::weighted::WeightedGraph;
use crate::trace_time;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use shared::RunStats;
pub use topo::TopoRelax;

/// A single-source shortest-path strategy.
///
/// Implementations receive a source already validated against the graph
/// (as a dense index) and return a store holding a final state for every
/// vertex. On error no store is returned.
pub trait ShortestPathStrategy {
    /// Identifier of the strategy
    fn algorithm(&self) -> Algorithm;

    fn solve<'g, V: Vertex>(
        &self,
        graph: &'g WeightedGraph<V>,
        source: usize,
    ) -> Result<VertexStateStore<'g, V>>;
}

/// The closed set of available algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    BellmanFord,
    #[default]
    Dijkstra,
    TopoRelax,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BellmanFord,
        Algorithm::Dijkstra,
        Algorithm::TopoRelax,
    ];

    /// Stable identifier used on the command line and in config files
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::BellmanFord => "bellman_ford",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::TopoRelax => "topo_relax",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::BellmanFord => "repeated edge relaxation, O(V*E), allows negative weights",
            Algorithm::Dijkstra => "priority-queue settling, O((V+E) log V), non-negative weights",
            Algorithm::TopoRelax => {
                "relaxation in topological order, O(V+E), acyclic graphs only"
            }
        }
    }

    pub fn supports_negative_weights(&self) -> bool {
        matches!(self, Algorithm::BellmanFord)
    }

    pub fn requires_acyclic(&self) -> bool {
        matches!(self, Algorithm::TopoRelax)
    }

    /// Comma-separated list of every identifier
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(Algorithm::id)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Algorithm {
    type Err = SsspError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == normalized)
            .ok_or_else(|| SsspError::UnknownAlgorithm {
                name: s.to_string(),
                supported: Self::supported(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Runs algorithms with the options from a [`SolverConfig`]
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the configured default algorithm
    pub fn run_default<'g, V: Vertex>(
        &self,
        graph: &'g WeightedGraph<V>,
        source: &V,
    ) -> Result<VertexStateStore<'g, V>> {
        self.run(self.config.default_algorithm, graph, source)
    }

    /// Run `algorithm` from `source`, failing with `InvalidSource` if the
    /// source is not a vertex of `graph`
    #[tracing::instrument(skip(self, algorithm, graph, source), fields(algorithm = %algorithm, source = %source, vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn run<'g, V: Vertex>(
        &self,
        algorithm: Algorithm,
        graph: &'g WeightedGraph<V>,
        source: &V,
    ) -> Result<VertexStateStore<'g, V>> {
        let start = Instant::now();
        let source_index = graph
            .index_of(source)
            .ok_or_else(|| SsspError::invalid_source(source))?;

        let store = match algorithm {
            Algorithm::BellmanFord => {
                BellmanFord::from(&self.config.bellman_ford).solve(graph, source_index)
            }
            Algorithm::Dijkstra => Dijkstra.solve(graph, source_index),
            Algorithm::TopoRelax => TopoRelax.solve(graph, source_index),
        }?;

        trace_time!(start, "run_complete");
        Ok(store)
    }
}

/// Run `algorithm` with default options
pub fn run<'g, V: Vertex>(
    algorithm: Algorithm,
    graph: &'g WeightedGraph<V>,
    source: &V,
) -> Result<VertexStateStore<'g, V>> {
    Solver::default().run(algorithm, graph, source)
}

/// Run an algorithm selected by identifier, failing with `UnknownAlgorithm`
/// for names outside the closed set
pub fn run_by_name<'g, V: Vertex>(
    name: &str,
    graph: &'g WeightedGraph<V>,
    source: &V,
) -> Result<VertexStateStore<'g, V>> {
    let algorithm: Algorithm = name.parse()?;
    run(algorithm, graph, source)
}
