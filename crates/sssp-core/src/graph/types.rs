use std::fmt;
use std::hash::Hash;

use serde::Serialize;

/// Edge weight and path distance
pub type Weight = f64;

/// Distance of a vertex no relaxation has reached yet
pub const INFINITY: Weight = f64::INFINITY;

/// Opaque vertex identifier.
///
/// Anything hashable and printable qualifies: integers for generated graphs,
/// strings for graphs read from the command line.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Vertex for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Whether relaxation may lower the distance of an already visited vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitPolicy {
    /// Visited vertices are final; relaxations targeting them are ignored
    SettleOnce,
    /// The visited flag is not consulted; every vertex but the source may be
    /// lowered again
    Revisit,
}

/// A reconstructed shortest path and its total cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<V> {
    pub source: V,
    pub target: V,
    /// Vertices in source to target order, both endpoints included
    pub path: Vec<V>,
    pub cost: Weight,
}

impl<V> PathResult<V> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
