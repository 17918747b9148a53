//! Error types and exit codes for sssp
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm, bad source)
//! - 3: Data error (malformed graph, unreachable target, negative cycle)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or unsolvable query (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or computing shortest paths
#[derive(Error, Debug)]
pub enum SsspError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unknown algorithm: {name} (supported: {supported})")]
    UnknownAlgorithm { name: String, supported: String },

    #[error("source vertex not in graph: {vertex}")]
    InvalidSource { vertex: String },

    #[error("vertex not in graph: {vertex}")]
    UnknownVertex { vertex: String },

    // Data errors (exit code 3)
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("no path from {source_vertex} to {target}")]
    NoPath {
        source_vertex: String,
        target: String,
    },

    #[error("negative cycle reachable from source (detected at vertex {vertex})")]
    NegativeCycle { vertex: String },

    #[error("graph is not acyclic: topological order covers {ordered} of {total} vertices")]
    CycleDetected { ordered: usize, total: usize },

    // Generic failures (exit code 1)
    #[error("edge not in graph: ({from}, {to})")]
    MissingEdge { from: String, to: String },

    #[error("algorithms disagree on cost to {target}: {details}")]
    Disagreement { target: String, details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl SsspError {
    /// Create an error for malformed graph input
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        SsspError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for a weight lookup on an absent edge
    pub fn missing_edge(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        SsspError::MissingEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an unreachable target
    pub fn no_path(source: impl std::fmt::Display, target: impl std::fmt::Display) -> Self {
        SsspError::NoPath {
            source_vertex: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Create an error for a vertex lookup that failed
    pub fn unknown_vertex(vertex: impl std::fmt::Display) -> Self {
        SsspError::UnknownVertex {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for a source vertex missing from the graph
    pub fn invalid_source(vertex: impl std::fmt::Display) -> Self {
        SsspError::InvalidSource {
            vertex: vertex.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SsspError::UnknownFormat(_)
            | SsspError::UsageError(_)
            | SsspError::UnknownAlgorithm { .. }
            | SsspError::InvalidSource { .. }
            | SsspError::UnknownVertex { .. } => ExitCode::Usage,

            SsspError::InvalidGraph { .. }
            | SsspError::NoPath { .. }
            | SsspError::NegativeCycle { .. }
            | SsspError::CycleDetected { .. } => ExitCode::Data,

            SsspError::MissingEdge { .. }
            | SsspError::Disagreement { .. }
            | SsspError::Io(_)
            | SsspError::Json(_)
            | SsspError::Toml(_)
            | SsspError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SsspError::UnknownFormat(_) => "unknown_format",
            SsspError::UsageError(_) => "usage_error",
            SsspError::UnknownAlgorithm { .. } => "unknown_algorithm",
            SsspError::InvalidSource { .. } => "invalid_source",
            SsspError::UnknownVertex { .. } => "unknown_vertex",
            SsspError::InvalidGraph { .. } => "invalid_graph",
            SsspError::NoPath { .. } => "no_path",
            SsspError::NegativeCycle { .. } => "negative_cycle",
            SsspError::CycleDetected { .. } => "cycle_detected",
            SsspError::MissingEdge { .. } => "missing_edge",
            SsspError::Disagreement { .. } => "disagreement",
            SsspError::Io(_) => "io_error",
            SsspError::Json(_) => "json_error",
            SsspError::Toml(_) => "toml_error",
            SsspError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for sssp operations
pub type Result<T> = std::result::Result<T, SsspError>;
