//! Weighted directed graph
//!
//! Vertices are interned to dense indices in first-seen order so that the
//! algorithms can keep their per-vertex state in flat vectors. The graph is
//! read-only once built.

use std::collections::{HashMap, VecDeque};

use crate::bail_invalid_graph;
use crate::error::{Result, SsspError};
use crate::graph::types::{Vertex, Weight};

/// Directed graph with one finite weight per `(u, v)` pair
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    /// Out-neighbors per vertex, in edge insertion order
    adjacency: Vec<Vec<usize>>,
    weights: HashMap<(usize, usize), Weight>,
}

impl<V: Vertex> WeightedGraph<V> {
    /// Number of vertices, isolated ones included
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Dense index of a vertex
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Vertex at a dense index
    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// All vertices in first-seen order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Weight of the edge `(from, to)`.
    ///
    /// Fails with `MissingEdge` when the edge does not exist; no default
    /// weight is ever substituted.
    pub fn weight_for_edge(&self, from: &V, to: &V) -> Result<Weight> {
        match (self.index_of(from), self.index_of(to)) {
            (Some(u), Some(v)) => self.weight_at(u, v),
            _ => Err(SsspError::missing_edge(from, to)),
        }
    }

    /// Every edge as `(from, to, weight)`, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, Weight)> + '_ {
        self.edge_indices().map(move |(u, v)| {
            (
                &self.vertices[u],
                &self.vertices[v],
                self.weights[&(u, v)],
            )
        })
    }

    /// Out-neighbors of `vertex`; empty for vertices not in the graph
    pub fn adjacent<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        let targets: &'a [usize] = match self.index_of(vertex) {
            Some(u) => &self.adjacency[u],
            None => &[],
        };
        targets.iter().map(move |&v| &self.vertices[v])
    }

    /// True if any edge carries a negative weight
    pub fn has_negative_weight(&self) -> bool {
        self.weights.values().any(|w| *w < 0.0)
    }

    pub fn is_acyclic(&self) -> bool {
        self.topological_order().is_ok()
    }

    /// Vertices in a topological order, or `CycleDetected`
    pub fn topological_vertices(&self) -> Result<Vec<&V>> {
        Ok(self
            .topological_order()?
            .into_iter()
            .map(|u| &self.vertices[u])
            .collect())
    }

    pub(crate) fn vertex_at(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    pub(crate) fn weight_at(&self, u: usize, v: usize) -> Result<Weight> {
        self.weights
            .get(&(u, v))
            .copied()
            .ok_or_else(|| SsspError::missing_edge(&self.vertices[u], &self.vertices[v]))
    }

    pub(crate) fn adjacent_indices(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    pub(crate) fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, targets)| targets.iter().map(move |&v| (u, v)))
    }

    /// Kahn's algorithm over dense indices. O(V + E).
    pub(crate) fn topological_order(&self) -> Result<Vec<usize>> {
        let mut indegree = vec![0usize; self.vertices.len()];
        for (_, v) in self.edge_indices() {
            indegree[v] += 1;
        }

        let mut queue: VecDeque<usize> = indegree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(u, _)| u)
            .collect();

        let mut order = Vec::with_capacity(self.vertices.len());
        while let Some(u) = queue.pop_front() {
            order.push(u);
            for &v in &self.adjacency[u] {
                indegree[v] -= 1;
                if indegree[v] == 0 {
                    queue.push_back(v);
                }
            }
        }

        if order.len() < self.vertices.len() {
            return Err(SsspError::CycleDetected {
                ordered: order.len(),
                total: self.vertices.len(),
            });
        }
        Ok(order)
    }
}

/// Builder for [`WeightedGraph`]
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V, Weight)>,
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> GraphBuilder<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex that may have no incident edges
    pub fn vertex(mut self, vertex: V) -> Self {
        self.vertices.push(vertex);
        self
    }

    /// Add an edge; a repeated `(from, to)` pair overwrites the earlier weight
    pub fn edge(mut self, from: V, to: V, weight: Weight) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = ((V, V), Weight)>,
    {
        self.edges
            .extend(edges.into_iter().map(|((from, to), weight)| (from, to, weight)));
        self
    }

    /// Validate weights and intern vertices
    pub fn build(self) -> Result<WeightedGraph<V>> {
        let mut graph = WeightedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            weights: HashMap::new(),
        };

        for (from, to, weight) in self.edges {
            if !weight.is_finite() {
                bail_invalid_graph!("weight of edge ({}, {}) is not a finite number", from, to);
            }
            let u = intern(&mut graph, from);
            let v = intern(&mut graph, to);
            if graph.weights.insert((u, v), weight).is_none() {
                graph.adjacency[u].push(v);
            }
        }

        for vertex in self.vertices {
            intern(&mut graph, vertex);
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph_built"
        );
        Ok(graph)
    }
}

fn intern<V: Vertex>(graph: &mut WeightedGraph<V>, vertex: V) -> usize {
    if let Some(&index) = graph.index.get(&vertex) {
        return index;
    }
    let index = graph.vertices.len();
    graph.index.insert(vertex.clone(), index);
    graph.vertices.push(vertex);
    graph.adjacency.push(Vec::new());
    index
}

/// Build a graph from an edge → weight mapping; vertices are the union of
/// edge endpoints
pub fn build_graph<V, I>(edges: I) -> Result<WeightedGraph<V>>
where
    V: Vertex,
    I: IntoIterator<Item = ((V, V), Weight)>,
{
    GraphBuilder::new().edges(edges).build()
}

/// Parse the textual edge form `u,v=weight`
pub fn parse_edge(text: &str) -> Result<((String, String), Weight)> {
    let Some((endpoints, weight)) = text.rsplit_once('=') else {
        bail_invalid_graph!("edge '{}' is missing '=weight'", text);
    };
    let Some((from, to)) = endpoints.split_once(',') else {
        bail_invalid_graph!("edge '{}' must name two endpoints as 'u,v'", text);
    };

    let from = from.trim();
    let to = to.trim();
    if from.is_empty() || to.is_empty() {
        bail_invalid_graph!("edge '{}' has an empty endpoint", text);
    }
    if to.contains(',') {
        bail_invalid_graph!("edge '{}' has more than two endpoints", text);
    }
    if from.contains('=') || to.contains('=') {
        bail_invalid_graph!("edge '{}' has more than one '='", text);
    }

    let weight: Weight = weight
        .trim()
        .parse()
        .map_err(|_| SsspError::invalid_graph(format!("edge '{}' has a non-numeric weight", text)))?;

    Ok(((from.to_string(), to.to_string()), weight))
}
