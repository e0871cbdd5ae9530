//! Error taxonomy shared by every graph, function and network operation.
//!
//! Failures are reported synchronously to the caller and never partially
//! applied: an operation that returns `Err` leaves its receiver unchanged.

use thiserror::Error;

use crate::graph::basic::Label;

/// Errors produced by graph, edge-function and network operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A required input is missing or does not refer to anything usable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request would break a structural invariant of the receiver.
    #[error("illegal configuration: {0}")]
    IllegalConfiguration(String),

    /// The queried vertex, edge or value association does not exist.
    #[error("no such element: {0}")]
    NotFound(String),

    /// A flow assigns an edge more than its capacity, or a negative amount.
    #[error("flow violates capacity constraint on ({tail}, {head}): flow {flow}, capacity {capacity}")]
    CapacityViolated {
        /// Label of the edge tail.
        tail: Label,
        /// Label of the edge head.
        head: Label,
        /// Capacity recorded for the edge.
        capacity: i64,
        /// Flow routed through the edge.
        flow: i64,
    },
}

impl GraphError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        Self::IllegalConfiguration(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Returns `true` for [`GraphError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
