//! Persistent collections used to attach values to graph elements.

pub mod edge_function;

pub use edge_function::{CapacityFunction, EdgeFunction, FlowFunction, WeightFunction};
