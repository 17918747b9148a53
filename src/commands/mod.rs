//! CLI commands for sssp

pub mod algorithms;
pub mod compare;
pub mod dispatch;
pub mod distances;
pub mod helpers;
pub mod solve;
