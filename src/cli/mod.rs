//! CLI argument parsing for sssp
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sssp_core::graph::Algorithm;
pub use sssp_core::format::OutputFormat;

pub use args::GraphArgs;
use parse::{parse_algorithm, parse_output_format};

/// sssp - single-source shortest paths on weighted directed graphs
#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `sssp_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Solver configuration file (TOML)
    #[arg(long, global = true, env = "SSSP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two vertices
    Solve {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex
        #[arg(long, short)]
        source: String,

        /// Target vertex
        #[arg(long, short)]
        target: String,

        /// Algorithm (defaults to the configured one)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },

    /// Show distance and predecessor of every vertex
    Distances {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex
        #[arg(long, short)]
        source: String,

        /// Algorithm (defaults to the configured one)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },

    /// Run every applicable algorithm and check that they agree
    Compare {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex
        #[arg(long, short)]
        source: String,

        /// Target vertex
        #[arg(long, short)]
        target: String,
    },

    /// List available algorithms
    Algorithms,
}
