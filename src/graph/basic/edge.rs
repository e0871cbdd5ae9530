//! Directed edges (arcs).

use core::fmt;

use serde::{Deserialize, Serialize};

use super::vertex::{Label, Vertex};
use crate::error::{GraphError, Result};

/// An ordered `(tail, head)` pair of vertices.
///
/// Equality and hashing depend only on the two endpoints. Loops
/// (`tail == head`) are representable; use [`Edge::simple`] where they must be
/// rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    tail: Vertex,
    head: Vertex,
}

impl Edge {
    /// Creates the arc `tail -> head`. Loops are permitted.
    pub fn new(tail: impl Into<Vertex>, head: impl Into<Vertex>) -> Self {
        Self {
            tail: tail.into(),
            head: head.into(),
        }
    }

    /// Creates the arc `tail -> head`, rejecting loops.
    pub fn simple(tail: impl Into<Vertex>, head: impl Into<Vertex>) -> Result<Self> {
        let edge = Self::new(tail, head);
        if edge.is_loop() {
            return Err(GraphError::illegal(format!(
                "tail and head must be different, got loop on {}",
                edge.tail
            )));
        }
        Ok(edge)
    }

    /// Creates the arc between the vertices of the given labels.
    pub fn of(tail: impl Into<Label>, head: impl Into<Label>) -> Self {
        Self::new(Vertex::new(tail), Vertex::new(head))
    }

    /// The vertex this arc comes from.
    #[inline]
    pub fn tail(&self) -> &Vertex {
        &self.tail
    }

    /// The vertex this arc points to.
    #[inline]
    pub fn head(&self) -> &Vertex {
        &self.head
    }

    /// Returns `true` if tail and head coincide.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.tail == self.head
    }

    /// Returns `true` if this arc joins the vertices of the given labels.
    #[inline]
    pub fn joins(&self, tail: &Label, head: &Label) -> bool {
        self.tail.label() == tail && self.head.label() == head
    }

    /// The same arc pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            tail: self.head.clone(),
            head: self.tail.clone(),
        }
    }

    /// Splits the arc into `(tail, head)`.
    pub fn into_endpoints(self) -> (Vertex, Vertex) {
        (self.tail, self.head)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.tail, self.head)
    }
}
