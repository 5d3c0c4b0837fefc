use thiserror::Error;

use crate::graph::VertexId;

/// The error returned by fallible [`Digraph`](crate::Digraph) operations.
///
/// All variants are precondition violations. They are detected before any
/// mutation takes place, so a failed operation leaves the graph unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An operation referenced a vertex that is not present in the graph.
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),

    /// An operation referenced an edge between two existing vertices that are
    /// not connected.
    #[error("edge {0} -> {1} does not exist")]
    UnknownEdge(VertexId, VertexId),

    /// [`add_vertex`](crate::Digraph::add_vertex) was called with an
    /// identifier that is already taken.
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),

    /// [`add_edge`](crate::Digraph::add_edge) was called with an ordered pair
    /// of vertices that already has an edge.
    #[error("edge {0} -> {1} already exists")]
    DuplicateEdge(VertexId, VertexId),
}
