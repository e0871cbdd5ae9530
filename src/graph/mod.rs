//! Directed graphs, their traversals, and the graph shapes built on them.
//!
//! Graph implementations are organized into categories:
//! - `basic`: vertices, edges, the adjacency-list store and its algorithms
//! - `specialized`: flow networks, weighted graphs and rooted trees

pub mod basic;
pub mod specialized;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{DirectedGraph, Edge, GraphOptions, Label, ParentMap, Vertex};
pub use specialized::{Network, Tree, WeightedGraph};
