//! # `arcflow` - Directed Graph and Flow Network Toolkit
//!
//! A small toolkit for directed graphs over labeled vertices: breadth-first
//! traversal, cycle detection across disconnected components, and
//! residual-network construction for capacity-constrained flow networks.
//!
//! ## Key Features
//!
//! - **Label identity**: vertices and edges compare and hash by label only
//! - **Persistent edge functions**: capacities, weights and flows are
//!   copy-on-write maps; updates return new versions and no-ops return the
//!   very same version
//! - **Stack-safe algorithms**: every traversal uses an explicit queue or stack
//! - **Typed failures**: invalid arguments, illegal configurations, missing
//!   elements and capacity violations are distinct [`GraphError`] variants
//!
//! ## Architecture
//!
//! 1. **Value types** (`Vertex`, `Edge`, `Label`): immutable identities.
//! 2. **Edge functions** (`EdgeFunction<V>`): persistent layered maps from edge to value.
//! 3. **Adjacency store** (`DirectedGraph`): duplicate-free arcs, optional loops.
//! 4. **Algorithms**: `breadth_first_search`, `depth_first_order`, `is_acyclic`.
//! 5. **Specialized graphs**: `Network` (with `residual`), `WeightedGraph`, `Tree`.
//!
//! ## Concurrency
//!
//! Everything is synchronous. Graphs and networks are plain owned values and
//! need external synchronization if shared mutably; edge functions are
//! immutable and `Send + Sync` whenever their values are.
//!
//! ## Example
//!
//! ```rust
//! use arcflow::{Edge, FlowFunction, Network};
//!
//! let mut net = Network::new("s", "t").unwrap();
//! net.add_edge("s", "a", 4).unwrap();
//! net.add_edge("a", "t", 3).unwrap();
//!
//! let flow: FlowFunction = [(Edge::of("s", "a"), 3), (Edge::of("a", "t"), 3)]
//!     .into_iter()
//!     .collect();
//! let residual = net.residual(&flow).unwrap();
//!
//! assert_eq!(residual.capacity_of(&Edge::of("s", "a")).unwrap(), 1);
//! assert_eq!(residual.edge_count(), 1); // a -> t is saturated
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{CapacityFunction, EdgeFunction, FlowFunction, WeightFunction};
pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, Edge, GraphOptions, Label, Network, ParentMap, Tree, Vertex, WeightedGraph};

// Compile-time checks that shared values stay thread-safe.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EdgeFunction<i64>>();
    assert_send_sync::<DirectedGraph>();
    assert_send_sync::<Network>();
};
