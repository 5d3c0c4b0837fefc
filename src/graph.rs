//! The directed graph data structure.
//!
//! [`Digraph`] is an adjacency list graph generic over the vertex and edge
//! attributes. Vertices are identified by client-supplied integers which are
//! not required to be contiguous or zero-based.
//!
//! # Examples
//!
//! ```
//! use digraph::Digraph;
//!
//! let mut graph = Digraph::new();
//!
//! graph.add_vertex(1, "Prague")?;
//! graph.add_vertex(2, "Vienna")?;
//! graph.add_edge(1, 2, 293u32)?;
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge(1, 2)?, &293);
//! # Ok::<(), digraph::GraphError>(())
//! ```

use std::collections::{btree_map, BTreeMap};
use std::mem;

use crate::error::GraphError;

/// Identifier of a vertex, chosen by the caller.
pub type VertexId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex<V, E> {
    attr: V,
    // Outgoing edges keyed by destination. The key uniqueness is what rules
    // out parallel edges.
    outgoing: BTreeMap<VertexId, E>,
}

impl<V, E> Vertex<V, E> {
    fn new(attr: V) -> Self {
        Self {
            attr,
            outgoing: BTreeMap::new(),
        }
    }
}

/// A directed graph with `V` vertex attributes and `E` edge attributes.
///
/// The graph owns all of its vertices and, transitively, all of its edges.
/// Cloning performs a deep copy; the clone and the original are fully
/// independent. See [module](self) documentation for an example.
///
/// Enumeration order of vertices and edges is ascending by identifier and
/// stable across calls as long as the graph is not modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph<V, E> {
    vertices: BTreeMap<VertexId, Vertex<V, E>>,
    edge_count: usize,
}

impl<V, E> Digraph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges outgoing from the given vertex.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if the vertex is not in the graph.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        self.vertex_inner(vertex).map(|v| v.outgoing.len())
    }

    /// Returns `true` if the vertex is in the graph.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    /// Returns `true` if an edge `from -> to` is in the graph.
    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get(&from)
            .map(|vertex| vertex.outgoing.contains_key(&to))
            .unwrap_or(false)
    }

    /// Iterates over all vertex identifiers in ascending order.
    pub fn vertices(&self) -> VertexIds<'_, V, E> {
        VertexIds {
            inner: self.vertices.keys(),
        }
    }

    /// Iterates over the `(from, to)` pairs of all edges in the graph.
    pub fn edges(&self) -> EdgeIds<'_, V, E> {
        EdgeIds {
            outer: self.vertices.iter(),
            inner: None,
        }
    }

    /// Iterates over the `(from, to)` pairs of the edges outgoing from the
    /// given vertex.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if the vertex is not in the graph.
    pub fn outgoing_edges(&self, vertex: VertexId) -> Result<OutgoingEdgeIds<'_, E>, GraphError> {
        let from = self.vertex_inner(vertex)?;

        Ok(OutgoingEdgeIds {
            from: vertex,
            inner: from.outgoing.keys(),
        })
    }

    /// Returns the attribute of the given vertex.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if the vertex is not in the graph.
    pub fn vertex(&self, vertex: VertexId) -> Result<&V, GraphError> {
        self.vertex_inner(vertex).map(|v| &v.attr)
    }

    /// Returns the attribute of the edge `from -> to`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is not in the graph,
    /// [`GraphError::UnknownEdge`] if both are but the edge is not.
    pub fn edge(&self, from: VertexId, to: VertexId) -> Result<&E, GraphError> {
        let vertex = self.vertex_inner(from)?;

        if !self.contains_vertex(to) {
            return Err(GraphError::UnknownVertex(to));
        }

        vertex
            .outgoing
            .get(&to)
            .ok_or(GraphError::UnknownEdge(from, to))
    }

    /// Adds a vertex with the given identifier and attribute. The new vertex
    /// has no edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateVertex`] if the identifier is already taken.
    pub fn add_vertex(&mut self, vertex: VertexId, attr: V) -> Result<(), GraphError> {
        match self.vertices.entry(vertex) {
            btree_map::Entry::Occupied(_) => Err(GraphError::DuplicateVertex(vertex)),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(Vertex::new(attr));
                Ok(())
            }
        }
    }

    /// Adds an edge `from -> to` with the given attribute.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is not in the graph,
    /// [`GraphError::DuplicateEdge`] if the edge already exists.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, attr: E) -> Result<(), GraphError> {
        if !self.contains_vertex(to) {
            return Err(GraphError::UnknownVertex(to));
        }

        let vertex = self
            .vertices
            .get_mut(&from)
            .ok_or(GraphError::UnknownVertex(from))?;

        match vertex.outgoing.entry(to) {
            btree_map::Entry::Occupied(_) => Err(GraphError::DuplicateEdge(from, to)),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(attr);
                self.edge_count += 1;
                Ok(())
            }
        }
    }

    /// Removes the vertex together with all its outgoing and incoming edges
    /// and returns its attribute.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if the vertex is not in the graph.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<V, GraphError> {
        let removed = self
            .vertices
            .remove(&vertex)
            .ok_or(GraphError::UnknownVertex(vertex))?;

        self.edge_count -= removed.outgoing.len();

        // Cascade to the incoming edges, which are owned by other vertices.
        for other in self.vertices.values_mut() {
            if other.outgoing.remove(&vertex).is_some() {
                self.edge_count -= 1;
            }
        }

        Ok(removed.attr)
    }

    /// Removes the edge `from -> to` and returns its attribute.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is not in the graph,
    /// [`GraphError::UnknownEdge`] if both are but the edge is not.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<E, GraphError> {
        if !self.contains_vertex(to) {
            return Err(GraphError::UnknownVertex(to));
        }

        let vertex = self
            .vertices
            .get_mut(&from)
            .ok_or(GraphError::UnknownVertex(from))?;

        let attr = vertex
            .outgoing
            .remove(&to)
            .ok_or(GraphError::UnknownEdge(from, to))?;

        self.edge_count -= 1;
        Ok(attr)
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    /// Takes the contents out of the graph, leaving it empty.
    ///
    /// The source graph remains valid and usable after the call, with zero
    /// vertices and zero edges.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn vertex_inner(&self, vertex: VertexId) -> Result<&Vertex<V, E>, GraphError> {
        self.vertices
            .get(&vertex)
            .ok_or(GraphError::UnknownVertex(vertex))
    }

    pub(crate) fn outgoing(&self, vertex: VertexId) -> Option<&BTreeMap<VertexId, E>> {
        self.vertices.get(&vertex).map(|v| &v.outgoing)
    }
}

impl<V, E> Default for Digraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the vertex identifiers of a graph.
///
/// Returned by [`Digraph::vertices`].
pub struct VertexIds<'a, V, E> {
    inner: btree_map::Keys<'a, VertexId, Vertex<V, E>>,
}

impl<V, E> Iterator for VertexIds<'_, V, E> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over the `(from, to)` pairs of all edges of a graph.
///
/// Returned by [`Digraph::edges`].
pub struct EdgeIds<'a, V, E> {
    outer: btree_map::Iter<'a, VertexId, Vertex<V, E>>,
    inner: Option<(VertexId, btree_map::Keys<'a, VertexId, E>)>,
}

impl<V, E> Iterator for EdgeIds<'_, V, E> {
    type Item = (VertexId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, targets)) = self.inner.as_mut() {
                if let Some(to) = targets.next() {
                    return Some((*from, *to));
                }
            }

            let (from, vertex) = self.outer.next()?;
            self.inner = Some((*from, vertex.outgoing.keys()));
        }
    }
}

/// Iterator over the `(from, to)` pairs of edges outgoing from one vertex.
///
/// Returned by [`Digraph::outgoing_edges`].
#[derive(Debug)]
pub struct OutgoingEdgeIds<'a, E> {
    from: VertexId,
    inner: btree_map::Keys<'a, VertexId, E>,
}

impl<E> Iterator for OutgoingEdgeIds<'_, E> {
    type Item = (VertexId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|to| (self.from, *to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
