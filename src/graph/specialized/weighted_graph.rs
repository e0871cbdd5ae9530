//! A directed graph whose arcs all carry an integer weight.

use crate::collections::WeightFunction;
use crate::error::{GraphError, Result};
use crate::graph::basic::{DirectedGraph, Edge, GraphOptions, Label, ParentMap, Vertex};

/// Weight given to arcs added without an explicit one.
pub const DEFAULT_WEIGHT: i64 = 1;

/// A [`DirectedGraph`] paired with a [`WeightFunction`] covering every arc.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: DirectedGraph,
    weights: WeightFunction,
}

impl WeightedGraph {
    /// Creates an empty weighted graph that permits loops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty weighted graph with the given options.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            graph: DirectedGraph::with_options(options),
            weights: WeightFunction::new(),
        }
    }

    /// Read-only view of the underlying graph.
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// The weight function.
    pub fn weights(&self) -> &WeightFunction {
        &self.weights
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        self.graph.add_vertex(vertex)
    }

    /// Adds `tail -> head` with [`DEFAULT_WEIGHT`]. An arc already present
    /// keeps its weight.
    pub fn add_edge(&mut self, tail: impl Into<Vertex>, head: impl Into<Vertex>) -> Result<bool> {
        let edge = Edge::new(tail, head);
        let added = self.graph.insert_edge(edge.clone())?;
        self.weights = self.weights.add(edge, DEFAULT_WEIGHT);
        Ok(added)
    }

    /// Adds `tail -> head` with the given weight, replacing the weight of an
    /// arc already present.
    pub fn add_weighted_edge(
        &mut self,
        tail: impl Into<Vertex>,
        head: impl Into<Vertex>,
        weight: i64,
    ) -> Result<bool> {
        let edge = Edge::new(tail, head);
        let added = self.graph.insert_edge(edge.clone())?;
        self.weights = self.weights.set(edge, weight);
        Ok(added)
    }

    /// Removes an arc and its weight.
    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        self.weights = self.weights.remove(edge);
        self.graph.remove_edge(edge)
    }

    /// Removes a vertex, its incident arcs and their weights.
    pub fn remove_vertex(&mut self, vertex: &Vertex) -> bool {
        for edge in self.graph.edges() {
            if edge.tail() == vertex || edge.head() == vertex {
                self.weights = self.weights.remove(&edge);
            }
        }
        self.graph.remove_vertex(vertex)
    }

    /// Weight of the arc `tail -> head`.
    pub fn weight(&self, tail: &Vertex, head: &Vertex) -> Result<i64> {
        self.weights.get(&Edge::new(tail.clone(), head.clone()))
    }

    /// Weight of the arc joining the vertices of the given labels.
    pub fn weight_by_labels(&self, tail: &Label, head: &Label) -> Result<i64> {
        self.weights.get_by_labels(tail, head)
    }

    /// Sum of all arc weights.
    ///
    /// Fails with [`GraphError::IllegalConfiguration`] if the sum does not fit
    /// in an `i64`.
    pub fn total_weight(&self) -> Result<i64> {
        self.weights
            .total()
            .ok_or_else(|| GraphError::illegal("total weight overflows i64"))
    }

    /// See [`DirectedGraph::neighbors_of`].
    pub fn neighbors_of(&self, vertex: &Vertex) -> Result<Vec<Vertex>> {
        self.graph.neighbors_of(vertex)
    }

    /// The vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        self.graph.vertices()
    }

    /// Snapshot of the arcs.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph.edges()
    }

    /// See [`DirectedGraph::breadth_first_search`].
    pub fn breadth_first_search(&self, source: &Vertex) -> Result<ParentMap> {
        self.graph.breadth_first_search(source)
    }

    /// See [`DirectedGraph::is_acyclic`].
    pub fn is_acyclic(&self) -> bool {
        self.graph.is_acyclic()
    }
}
