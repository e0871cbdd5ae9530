//! Directed rooted trees.
//!
//! A tree under construction is a forest of fragments: arcs may be added in
//! any order, but no vertex ever gets two parents, the root never gets one,
//! and no arc may close a cycle. Once every vertex hangs off the root,
//! [`Tree::is_spanning`] holds and there is a unique path from the root to
//! every vertex.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::basic::{DirectedGraph, Edge, GraphOptions, ParentMap, Vertex};

/// A directed rooted tree.
#[derive(Debug, Clone)]
pub struct Tree {
    graph: DirectedGraph,
    root: Vertex,
    parents: HashMap<Vertex, Vertex>,
}

impl Tree {
    /// Creates the tree made of `root` only.
    pub fn new(root: impl Into<Vertex>) -> Self {
        let root = root.into();
        let mut graph = DirectedGraph::with_options(GraphOptions::loopless());
        graph.add_vertex(root.clone());
        Self {
            graph,
            root,
            parents: HashMap::new(),
        }
    }

    /// Rebuilds the tree recorded by a traversal.
    ///
    /// The map must have exactly one entry mapped to itself (the root) and
    /// every other entry must lead back to it; otherwise this fails with
    /// [`GraphError::InvalidArgument`].
    pub fn from_parent_map(parents: &ParentMap) -> Result<Self> {
        let mut roots = parents.iter().filter(|&(child, parent)| child == parent);
        let root = match (roots.next(), roots.next()) {
            (Some((root, _)), None) => root,
            (None, _) => return Err(GraphError::invalid("parent map has no root")),
            (Some(_), Some(_)) => return Err(GraphError::invalid("parent map has several roots")),
        };

        let mut tree = Tree::new(root.clone());
        for (child, parent) in parents.iter() {
            if child == parent {
                continue;
            }
            tree.add_edge(parent.clone(), child.clone())
                .map_err(|err| GraphError::invalid(format!("parent map is not a tree: {err}")))?;
        }
        if !tree.is_spanning() {
            return Err(GraphError::invalid(
                "parent map has entries that do not lead back to the root",
            ));
        }
        Ok(tree)
    }

    /// The root of the tree.
    pub fn root(&self) -> &Vertex {
        &self.root
    }

    /// Read-only view of the underlying graph.
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Adds the arc `tail -> head`.
    ///
    /// Fails with [`GraphError::IllegalConfiguration`], leaving the tree
    /// unchanged, if `head` is the root, already has a parent, or is an
    /// ancestor of `tail`.
    pub fn add_edge(&mut self, tail: impl Into<Vertex>, head: impl Into<Vertex>) -> Result<()> {
        let edge = Edge::new(tail, head);
        if edge.head() == &self.root {
            return Err(GraphError::illegal("root cannot have ingoing edges"));
        }
        if self.parents.contains_key(edge.head()) {
            return Err(GraphError::illegal(format!(
                "{} already has a parent",
                edge.head()
            )));
        }

        let new_tail = !self.graph.contains_vertex(edge.tail());
        let new_head = !self.graph.contains_vertex(edge.head());
        self.graph.insert_edge(edge.clone())?;
        if !self.graph.is_acyclic() {
            tracing::debug!(%edge, "rolling back arc that closes a cycle");
            self.graph.remove_edge(&edge);
            if new_tail {
                self.graph.remove_vertex(edge.tail());
            }
            if new_head {
                self.graph.remove_vertex(edge.head());
            }
            return Err(GraphError::illegal(format!("{edge} would form a cycle")));
        }

        let (tail, head) = edge.into_endpoints();
        self.parents.insert(head, tail);
        Ok(())
    }

    /// The parent of `vertex`, `None` for the root and for fragment roots.
    pub fn parent_of(&self, vertex: &Vertex) -> Option<&Vertex> {
        self.parents.get(vertex)
    }

    /// The children of `vertex`, in insertion order.
    pub fn children_of(&self, vertex: &Vertex) -> Result<Vec<Vertex>> {
        self.graph.neighbors_of(vertex)
    }

    /// The vertices from the root down to `vertex`, or `None` if `vertex` is
    /// absent or not yet attached to the root.
    pub fn path_from_root(&self, vertex: &Vertex) -> Option<Vec<Vertex>> {
        if !self.graph.contains_vertex(vertex) {
            return None;
        }
        let mut path = vec![vertex.clone()];
        let mut current = vertex;
        while let Some(parent) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        if current != &self.root {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// Returns `true` if every vertex is reachable from the root.
    pub fn is_spanning(&self) -> bool {
        self.graph
            .breadth_first_search(&self.root)
            .is_ok_and(|reached| reached.len() == self.graph.vertex_count())
    }

    /// Parent map of the tree, labels only; the root maps to itself.
    pub fn to_parent_map(&self) -> ParentMap {
        std::iter::once((self.root.label().clone(), self.root.label().clone()))
            .chain(
                self.parents
                    .iter()
                    .map(|(child, parent)| (child.label().clone(), parent.label().clone())),
            )
            .collect()
    }

    /// The vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        self.graph.vertices()
    }

    /// Snapshot of the arcs.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph.edges()
    }
}
