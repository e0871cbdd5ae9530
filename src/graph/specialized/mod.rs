//! Graph shapes built on top of [`DirectedGraph`](super::DirectedGraph).
//!
//! - `network`: flow networks with a source, a sink and arc capacities
//! - `residual`: residual-network construction for a feasible flow
//! - `weighted_graph`: graphs whose arcs carry weights
//! - `tree`: directed rooted trees

pub mod network;
pub mod residual;
pub mod tree;
pub mod weighted_graph;

pub use network::Network;
pub use tree::Tree;
pub use weighted_graph::{WeightedGraph, DEFAULT_WEIGHT};
