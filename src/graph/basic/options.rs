//! Construction-time graph configuration.

use serde::{Deserialize, Serialize};

/// Construction-time switches for a [`DirectedGraph`](super::DirectedGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Whether arcs of the form `(x, x)` may be inserted.
    pub allow_self_loops: bool,
}

impl GraphOptions {
    /// Options for a graph that rejects loops.
    pub const fn loopless() -> Self {
        Self {
            allow_self_loops: false,
        }
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            allow_self_loops: true,
        }
    }
}
