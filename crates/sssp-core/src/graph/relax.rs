//! Edge relaxation shared by every shortest-path strategy

use crate::bail_invalid_graph;
use crate::error::Result;
use crate::graph::state::VertexStateStore;
use crate::graph::types::{Vertex, VisitPolicy, Weight, INFINITY};

/// Relax the edge `(u, v)` against the current states.
///
/// Lowers `v` to `distance(u) + weight(u, v)` when that is strictly shorter
/// and `policy` allows `v` to change. The source never changes under either
/// policy. Returns true when `v` improved.
///
/// A missing edge is an adjacency bug in the caller and surfaces as
/// `MissingEdge`. A sum that leaves the finite range fails with
/// `InvalidGraph`.
pub fn relax<V: Vertex>(
    states: &mut VertexStateStore<'_, V>,
    u: usize,
    v: usize,
    policy: VisitPolicy,
) -> Result<bool> {
    let Some(candidate) = candidate_distance(states, u, v)? else {
        return Ok(false);
    };

    if v == states.source_index() {
        return Ok(false);
    }
    if policy == VisitPolicy::SettleOnce && states.is_visited_at(v) {
        return Ok(false);
    }

    Ok(states.improve(v, candidate, u))
}

/// Distance to `v` through `u`, or `None` while `u` is unreached
pub(crate) fn candidate_distance<V: Vertex>(
    states: &VertexStateStore<'_, V>,
    u: usize,
    v: usize,
) -> Result<Option<Weight>> {
    let graph = states.graph();
    let weight = graph.weight_at(u, v)?;

    let distance = states.distance_at(u);
    if distance == INFINITY {
        return Ok(None);
    }

    let candidate = distance + weight;
    if !candidate.is_finite() {
        bail_invalid_graph!(
            "path weight to {} through {} overflows",
            graph.vertex_at(v),
            graph.vertex_at(u)
        );
    }
    Ok(Some(candidate))
}
