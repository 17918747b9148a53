//! Solver configuration for sssp
//!
//! Configuration is read from a TOML file, e.g.:
//!
//! ```toml
//! default_algorithm = "bellman_ford"
//!
//! [bellman_ford]
//! early_exit = true
//! detect_negative_cycles = false
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, SsspError};

pub use types::{BellmanFordConfig, SolverConfig};

impl SolverConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SolverConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), algorithm = %config.default_algorithm, "config_loaded");
        Ok(config)
    }

    /// Load configuration if a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SsspError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
