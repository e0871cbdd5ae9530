//! A dynamic adjacency-list directed graph over labeled vertices.
//!
//! Vertices live in a dense vector in insertion order; each vertex owns the
//! list of indices of its out-neighbors. A label index maps vertices back to
//! their slot. Edges are duplicate-free: inserting an arc that is already
//! present has no effect.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Edge, GraphOptions, Label, Vertex};
use crate::error::{GraphError, Result};

/// A mutable directed graph stored as adjacency lists.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to internal vectors |
/// | `remove_vertex` | \(O(n + m)\) | Shifts indices in every adjacency list |
/// | `add_edge` | \(O(\text{out-degree})\) | Checks for existence first |
/// | `remove_edge` | \(O(\text{out-degree})\) | Linear scan of adjacency list |
/// | `out_degree` | \(O(1)\) | returns `Vec::len` |
/// | `in_degree` | \(O(n + m)\) | Scans all adjacency lists |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "GraphRepr", try_from = "GraphRepr")]
pub struct DirectedGraph {
    options: GraphOptions,
    vertices: Vec<Vertex>,
    index: HashMap<Vertex, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl DirectedGraph {
    /// Creates an empty graph that permits loops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given options.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options this graph was built with.
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        let vertex = vertex.into();
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.slot_of(vertex);
        true
    }

    /// Adds the arc `tail -> head`, inserting missing endpoints.
    ///
    /// Returns `Ok(false)` if the arc was already present. Fails with
    /// [`GraphError::IllegalConfiguration`] for a loop when loops are
    /// forbidden, in which case nothing is inserted.
    pub fn add_edge(&mut self, tail: impl Into<Vertex>, head: impl Into<Vertex>) -> Result<bool> {
        let (tail, head) = (tail.into(), head.into());
        if tail == head && !self.options.allow_self_loops {
            return Err(GraphError::illegal(format!(
                "self-loops are not allowed, got ({tail}, {head})"
            )));
        }
        let from = self.slot_of(tail);
        let to = self.slot_of(head);
        let nbrs = &mut self.adjacency[from];
        if nbrs.contains(&to) {
            return Ok(false);
        }
        nbrs.push(to);
        self.edge_count += 1;
        Ok(true)
    }

    /// Adds the given arc; see [`DirectedGraph::add_edge`].
    pub fn insert_edge(&mut self, edge: Edge) -> Result<bool> {
        let (tail, head) = edge.into_endpoints();
        self.add_edge(tail, head)
    }

    /// Removes a vertex and every arc it is tail or head of.
    ///
    /// Returns `false` if the vertex was absent.
    pub fn remove_vertex(&mut self, vertex: &Vertex) -> bool {
        let Some(slot) = self.index.remove(vertex) else {
            return false;
        };

        let outgoing = self.adjacency.remove(slot).len();
        self.edge_count -= outgoing;
        for nbrs in &mut self.adjacency {
            let before = nbrs.len();
            nbrs.retain(|&v| v != slot);
            self.edge_count -= before - nbrs.len();
            for v in nbrs.iter_mut() {
                if *v > slot {
                    *v -= 1;
                }
            }
        }

        self.vertices.remove(slot);
        for (i, v) in self.vertices.iter().enumerate().skip(slot) {
            if let Some(idx) = self.index.get_mut(v) {
                *idx = i;
            }
        }
        true
    }

    /// Removes the vertex carrying `label`, if any.
    pub fn remove_vertex_by_label(&mut self, label: &Label) -> bool {
        let vertex = Vertex::new(label);
        self.remove_vertex(&vertex)
    }

    /// Removes the arc `edge`. Returns `false` if it was absent.
    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        let (Some(from), Some(to)) = (self.index_of(edge.tail()), self.index_of(edge.head())) else {
            return false;
        };
        let nbrs = &mut self.adjacency[from];
        let before = nbrs.len();
        nbrs.retain(|&v| v != to);
        let removed = before != nbrs.len();
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    /// Removes the arc joining the vertices of the given labels, if any.
    pub fn remove_edge_by_labels(&mut self, tail: &Label, head: &Label) -> bool {
        self.remove_edge(&Edge::of(tail, head))
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of arcs.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `vertex` belongs to the graph.
    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.index.contains_key(vertex)
    }

    /// Checks if the arc `edge` belongs to the graph.
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        match (self.index_of(edge.tail()), self.index_of(edge.head())) {
            (Some(from), Some(to)) => self.adjacency[from].contains(&to),
            _ => false,
        }
    }

    /// The vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Snapshot of the arcs, grouped by tail in vertex insertion order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (from, nbrs) in self.adjacency.iter().enumerate() {
            for &to in nbrs {
                edges.push(Edge::new(
                    self.vertices[from].clone(),
                    self.vertices[to].clone(),
                ));
            }
        }
        edges
    }

    /// Returns the heads of all arcs whose tail is `vertex`.
    ///
    /// Fails with [`GraphError::NotFound`] if `vertex` is absent.
    pub fn neighbors_of(&self, vertex: &Vertex) -> Result<Vec<Vertex>> {
        Ok(self.out_neighbors(vertex)?.cloned().collect())
    }

    /// Borrowing variant of [`DirectedGraph::neighbors_of`].
    pub fn out_neighbors<'a>(
        &'a self,
        vertex: &Vertex,
    ) -> Result<impl Iterator<Item = &'a Vertex> + 'a> {
        let from = self.require(vertex)?;
        Ok(self.adjacency[from].iter().map(move |&to| &self.vertices[to]))
    }

    /// Returns the tails of all arcs whose head is `vertex`.
    pub fn in_neighbors(&self, vertex: &Vertex) -> Result<Vec<Vertex>> {
        let to = self.require(vertex)?;
        Ok(self
            .adjacency
            .iter()
            .enumerate()
            .filter(|(_, nbrs)| nbrs.contains(&to))
            .map(|(from, _)| self.vertices[from].clone())
            .collect())
    }

    /// Returns the out-degree of a vertex.
    pub fn out_degree(&self, vertex: &Vertex) -> Result<usize> {
        Ok(self.adjacency[self.require(vertex)?].len())
    }

    /// Returns the in-degree of a vertex.
    pub fn in_degree(&self, vertex: &Vertex) -> Result<usize> {
        let to = self.require(vertex)?;
        Ok(self.adjacency.iter().filter(|nbrs| nbrs.contains(&to)).count())
    }

    /// Adds the reverse of every arc, making the arc relation symmetric.
    pub fn symmetrize(&mut self) {
        let mut added = 0;
        for from in 0..self.adjacency.len() {
            for i in 0..self.adjacency[from].len() {
                let to = self.adjacency[from][i];
                if !self.adjacency[to].contains(&from) {
                    self.adjacency[to].push(from);
                    added += 1;
                }
            }
        }
        self.edge_count += added;
    }

    /// Removes every vertex and arc, keeping the options.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }

    #[inline]
    pub(crate) fn index_of(&self, vertex: &Vertex) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    #[inline]
    pub(crate) fn vertex_at(&self, slot: usize) -> &Vertex {
        &self.vertices[slot]
    }

    #[inline]
    pub(crate) fn successors(&self, slot: usize) -> &[usize] {
        &self.adjacency[slot]
    }

    fn require(&self, vertex: &Vertex) -> Result<usize> {
        self.index_of(vertex)
            .ok_or_else(|| GraphError::not_found(format!("no such vertex: {vertex}")))
    }

    fn slot_of(&mut self, vertex: Vertex) -> usize {
        if let Some(&slot) = self.index.get(&vertex) {
            return slot;
        }
        let slot = self.vertices.len();
        self.index.insert(vertex.clone(), slot);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        slot
    }
}

/// Wire shape of a [`DirectedGraph`].
#[derive(Serialize, Deserialize)]
struct GraphRepr {
    #[serde(default)]
    options: GraphOptions,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl From<DirectedGraph> for GraphRepr {
    fn from(graph: DirectedGraph) -> Self {
        Self {
            options: graph.options,
            edges: graph.edges(),
            vertices: graph.vertices,
        }
    }
}

impl TryFrom<GraphRepr> for DirectedGraph {
    type Error = GraphError;

    fn try_from(repr: GraphRepr) -> Result<Self> {
        let mut graph = DirectedGraph::with_options(repr.options);
        for vertex in repr.vertices {
            graph.add_vertex(vertex);
        }
        for edge in repr.edges {
            graph.insert_edge(edge)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: i64) -> Vertex {
        Vertex::new(n)
    }

    #[test]
    fn test_new_graph_is_empty() {
        let g = DirectedGraph::new();
        assert!(g.is_empty());
        assert!(g.vertices().is_empty());
        assert!(g.edges().is_empty());
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut g = DirectedGraph::new();
        assert!(g.add_vertex(0));
        assert!(g.add_vertex(1));
        assert!(!g.add_vertex(0));
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_add_edge_inserts_endpoints() {
        let mut g = DirectedGraph::new();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        assert_eq!(g.vertices(), &[v(0), v(1), v(2)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_add_present_edge_does_nothing() {
        let mut g = DirectedGraph::new();
        assert!(g.add_edge(0, 1).unwrap());
        assert!(!g.insert_edge(Edge::of(0, 1)).unwrap());
        assert_eq!(g.edges(), vec![Edge::of(0, 1)]);
    }

    #[test]
    fn test_loops_follow_options() {
        let mut g = DirectedGraph::new();
        g.add_edge(0, 0).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        assert_eq!(g.neighbors_of(&v(0)).unwrap(), vec![v(0), v(1), v(2)]);

        let mut strict = DirectedGraph::with_options(GraphOptions::loopless());
        let err = strict.add_edge("a", "a").unwrap_err();
        assert!(matches!(err, GraphError::IllegalConfiguration(_)));
        assert!(strict.is_empty());
    }

    #[test]
    fn test_neighbors_of_absent_vertex_is_not_found() {
        let g = DirectedGraph::new();
        assert!(g.neighbors_of(&v(0)).unwrap_err().is_not_found());
        assert!(g.out_degree(&v(0)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove_edge() {
        let mut g = DirectedGraph::new();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        assert!(g.remove_edge(&Edge::of(0, 1)));
        assert!(!g.remove_edge(&Edge::of(0, 1)));
        assert!(!g.remove_edge_by_labels(&Label::from(5), &Label::from(6)));
        assert_eq!(g.vertex_count(), 3);
        assert!(g.neighbors_of(&v(0)).unwrap().is_empty());
        assert_eq!(g.neighbors_of(&v(1)).unwrap(), vec![v(2)]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut g = DirectedGraph::new();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 0).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(1, 1).unwrap();

        assert!(g.remove_vertex(&v(1)));
        assert!(!g.remove_vertex(&v(1)));
        assert_eq!(g.vertices(), &[v(0), v(2), v(3)]);
        assert_eq!(g.edges(), vec![Edge::of(2, 0), Edge::of(2, 3)]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors_of(&v(2)).unwrap(), vec![v(0), v(3)]);
        assert!(g.neighbors_of(&v(0)).unwrap().is_empty());

        assert!(g.remove_vertex_by_label(&Label::from(0)));
        assert_eq!(g.edges(), vec![Edge::of(2, 3)]);
    }

    #[test]
    fn test_degrees() {
        let mut g = DirectedGraph::new();
        g.add_edge("a", "b").unwrap();
        g.add_edge("c", "b").unwrap();
        g.add_edge("b", "c").unwrap();
        let b = Vertex::new("b");
        assert_eq!(g.out_degree(&b).unwrap(), 1);
        assert_eq!(g.in_degree(&b).unwrap(), 2);
        assert_eq!(
            g.in_neighbors(&b).unwrap(),
            vec![Vertex::new("a"), Vertex::new("c")]
        );
    }

    #[test]
    fn test_symmetrize() {
        let mut g = DirectedGraph::new();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 0).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(3, 3).unwrap();
        g.symmetrize();
        assert_eq!(g.edge_count(), 5);
        assert!(g.contains_edge(&Edge::of(2, 1)));
        assert!(g.contains_edge(&Edge::of(3, 3)));
    }
}
