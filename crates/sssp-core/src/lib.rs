//! Sssp Core Library
//!
//! Single-source shortest paths over weighted directed graphs with
//! Bellman-Ford, Dijkstra and topological-order relaxation.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
