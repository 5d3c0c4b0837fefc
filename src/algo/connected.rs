//! Strong connectivity test.

use rustc_hash::FxHashSet;

use crate::graph::{Digraph, VertexId};

/// Returns `true` if every vertex of the graph is reachable from every other
/// vertex via directed edges.
///
/// An empty graph and a single-vertex graph are trivially strongly connected.
///
/// The check runs a forward traversal from each vertex, so the time
/// complexity is O(V * (V + E)).
pub fn is_strongly_connected<V, E>(graph: &Digraph<V, E>) -> bool {
    graph.vertices().all(|start| reaches_all(graph, start))
}

// Forward reachability from a single vertex. Every call gets its own visited
// set; the sets must not be shared between starting vertices.
fn reaches_all<V, E>(graph: &Digraph<V, E>, start: VertexId) -> bool {
    let mut visited = FxHashSet::default();
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex) {
            continue;
        }

        if let Some(outgoing) = graph.outgoing(vertex) {
            stack.extend(outgoing.keys().copied());
        }
    }

    visited.len() == graph.vertex_count()
}

impl<V, E> Digraph<V, E> {
    /// Tests whether the graph is strongly connected.
    ///
    /// See [`is_strongly_connected`] for details.
    pub fn is_strongly_connected(&self) -> bool {
        is_strongly_connected(self)
    }
}
