//! Flow networks: a loopless directed graph with a source, a sink and a
//! capacity on every arc.
//!
//! No arc may point into the source or leave the sink, and source and sink are
//! distinct. Arcs and their capacities are added together, so every arc added
//! through [`Network::add_edge`] always has a capacity.

use crate::collections::{CapacityFunction, FlowFunction};
use crate::error::{GraphError, Result};
use crate::graph::basic::{DirectedGraph, Edge, GraphOptions, Label, Vertex};

/// A flow network over a [`DirectedGraph`].
#[derive(Debug, Clone)]
pub struct Network {
    graph: DirectedGraph,
    source: Vertex,
    sink: Vertex,
    capacity: CapacityFunction,
}

impl Network {
    /// Creates the network made of `source` and `sink` only, with an empty
    /// capacity function.
    ///
    /// Fails with [`GraphError::IllegalConfiguration`] if they are equal.
    pub fn new(source: impl Into<Vertex>, sink: impl Into<Vertex>) -> Result<Self> {
        Self::with_capacities(source, sink, CapacityFunction::new())
    }

    /// Creates the network made of `source` and `sink` only, pre-seeded with a
    /// capacity function.
    ///
    /// The function may map arcs that are not (yet) in the network; see
    /// [`Network::add_seeded_edge`].
    pub fn with_capacities(
        source: impl Into<Vertex>,
        sink: impl Into<Vertex>,
        capacity: CapacityFunction,
    ) -> Result<Self> {
        let (source, sink) = (source.into(), sink.into());
        if source == sink {
            return Err(GraphError::illegal("source and sink must be different"));
        }
        let mut graph = DirectedGraph::with_options(GraphOptions::loopless());
        graph.add_vertex(source.clone());
        graph.add_vertex(sink.clone());
        Ok(Self {
            graph,
            source,
            sink,
            capacity,
        })
    }

    /// The source of the network.
    pub fn source(&self) -> &Vertex {
        &self.source
    }

    /// The sink of the network.
    pub fn sink(&self) -> &Vertex {
        &self.sink
    }

    /// Read-only view of the underlying graph.
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// The capacity function. Being persistent, it can be kept and shared
    /// without observing later changes to this network.
    pub fn capacity_function(&self) -> &CapacityFunction {
        &self.capacity
    }

    /// The vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        self.graph.vertices()
    }

    /// Snapshot of the arcs.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph.edges()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of arcs.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the heads of all arcs leaving `vertex`.
    pub fn neighbors_of(&self, vertex: &Vertex) -> Result<Vec<Vertex>> {
        self.graph.neighbors_of(vertex)
    }

    /// Adds the arc `tail -> head` with the given capacity, replacing the
    /// capacity if the arc is already present.
    ///
    /// Fails with [`GraphError::IllegalConfiguration`], leaving the network
    /// unchanged, if `head` is the source, `tail` is the sink, the arc is a
    /// loop, or `capacity < 1`.
    pub fn add_edge(
        &mut self,
        tail: impl Into<Vertex>,
        head: impl Into<Vertex>,
        capacity: i64,
    ) -> Result<()> {
        let edge = Edge::new(tail, head);
        self.check_arc(&edge)?;
        if capacity < 1 {
            return Err(GraphError::illegal(format!(
                "capacity of {edge} must be at least 1, got {capacity}"
            )));
        }
        self.graph.insert_edge(edge.clone())?;
        self.capacity = self.capacity.set(edge, capacity);
        Ok(())
    }

    /// Adds the arc `tail -> head` using the capacity already recorded for it
    /// in the capacity function.
    ///
    /// Fails with [`GraphError::NotFound`] if no capacity is recorded, and with
    /// [`GraphError::IllegalConfiguration`] under the same conditions as
    /// [`Network::add_edge`].
    pub fn add_seeded_edge(&mut self, tail: impl Into<Vertex>, head: impl Into<Vertex>) -> Result<()> {
        let edge = Edge::new(tail, head);
        self.check_arc(&edge)?;
        let capacity = self.capacity.get(&edge)?;
        if capacity < 1 {
            return Err(GraphError::illegal(format!(
                "capacity of {edge} must be at least 1, got {capacity}"
            )));
        }
        self.graph.insert_edge(edge)?;
        Ok(())
    }

    /// Capacity of the arc joining the vertices of the given labels.
    ///
    /// A value may be returned for an arc that is not in the network when the
    /// capacity function was pre-seeded.
    pub fn capacity(&self, tail: &Label, head: &Label) -> Result<i64> {
        self.capacity.get_by_labels(tail, head)
    }

    /// Capacity of `edge`.
    pub fn capacity_of(&self, edge: &Edge) -> Result<i64> {
        self.capacity.get(edge)
    }

    /// Returns `true` if every arc of the network has a capacity.
    pub fn is_fully_associated(&self) -> bool {
        self.graph
            .edges()
            .iter()
            .all(|edge| self.capacity.contains(edge))
    }

    /// Value of `flow`: the total it routes out of the source.
    ///
    /// Fails with [`GraphError::NotFound`] if an arc leaving the source has no
    /// flow value, and with [`GraphError::IllegalConfiguration`] if the total
    /// does not fit in an `i64`.
    pub fn outflow(&self, flow: &FlowFunction) -> Result<i64> {
        let mut total: i64 = 0;
        for head in self.graph.out_neighbors(&self.source)? {
            let routed = flow.get(&Edge::new(self.source.clone(), head.clone()))?;
            total = total
                .checked_add(routed)
                .ok_or_else(|| GraphError::illegal("outflow overflows i64"))?;
        }
        Ok(total)
    }

    fn check_arc(&self, edge: &Edge) -> Result<()> {
        if edge.is_loop() {
            return Err(GraphError::illegal(format!("network arcs cannot be loops, got {edge}")));
        }
        if edge.head() == &self.source {
            return Err(GraphError::illegal(format!(
                "no arc may enter the source, got {edge}"
            )));
        }
        if edge.tail() == &self.sink {
            return Err(GraphError::illegal(format!("no arc may leave the sink, got {edge}")));
        }
        Ok(())
    }
}
