//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::algos::Algorithm;

/// Solver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Algorithm used when none is named explicitly
    #[serde(default)]
    pub default_algorithm: Algorithm,

    /// Bellman-Ford options
    #[serde(default)]
    pub bellman_ford: BellmanFordConfig,
}

/// Options for Bellman-Ford runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellmanFordConfig {
    /// Stop once a full pass over the edges lowers nothing
    #[serde(default = "default_true")]
    pub early_exit: bool,

    /// Run an extra pass and fail if a negative cycle is reachable
    #[serde(default = "default_true")]
    pub detect_negative_cycles: bool,
}

impl Default for BellmanFordConfig {
    fn default() -> Self {
        Self {
            early_exit: true,
            detect_negative_cycles: true,
        }
    }
}

fn default_true() -> bool {
    true
}
