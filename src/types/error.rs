//! Error types for the ordgraph library.

use thiserror::Error;

/// All errors that can occur in the ordgraph library.
///
/// Variants carry no vertex payload: the store places no `Display` or
/// `Debug` bound on the vertex type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The requested vertex is not present in the graph.
    #[error("Vertex not found")]
    VertexNotFound,

    /// No edge matches the requested endpoints.
    #[error("Edge not found")]
    EdgeNotFound,

    /// The operation needs at least one vertex, but the graph is empty.
    #[error("Graph has no vertices")]
    EmptyGraph,
}

/// Convenience result type for ordgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
