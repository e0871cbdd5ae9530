//! Basic graph building blocks.
//!
//! This module contains the vertex and edge value types, the adjacency-list
//! store, and the traversal and cycle-detection algorithms over it.

pub mod adjacency_graph;
pub mod algorithms;
pub mod edge;
pub mod options;
pub mod vertex;

pub use adjacency_graph::DirectedGraph;
pub use algorithms::ParentMap;
pub use edge::Edge;
pub use options::GraphOptions;
pub use vertex::{Label, Vertex};
