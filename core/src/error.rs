//! Error types for graph queries.
//!
//! Only precondition violations are errors. Expected search outcomes such as
//! an unreachable target or a non-graphical degree sequence are reported
//! through `Option`/`bool` return values instead.

use thiserror::Error;

/// Result type alias for fallible graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The start vertex of a traversal is not present in the graph.
    #[error("vertex {0} does not exist in the graph")]
    VertexNotFound(String),

    /// Dijkstra requires every edge weight to be a non-negative number.
    #[error("edge {from} -> {to} has invalid weight {weight}; weights must be non-negative")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// A cycle of negative total weight leaves shortest distances undefined.
    #[error("negative cycle through vertex {0}")]
    NegativeCycle(String),

    /// Edge weights must be numbers.
    #[error("edge {from} -> {to} has a NaN weight")]
    NanWeight { from: String, to: String },
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::VertexNotFound(format!("{:?}", vertex))
    }
}
