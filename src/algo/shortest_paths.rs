//! Single source shortest paths.
//!
//! Classic [Dijkstra's
//! algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) over the
//! outgoing adjacency of a [`Digraph`], parameterized by a caller-supplied
//! edge weight function. The result is a predecessor map covering every
//! vertex of the graph; the start vertex and every vertex unreachable from it
//! are their own predecessors.
//!
//! # Examples
//!
//! ```
//! use digraph::{algo::shortest_paths, Digraph};
//!
//! let mut graph = Digraph::new();
//!
//! graph.add_vertex(1, "a")?;
//! graph.add_vertex(2, "b")?;
//! graph.add_vertex(3, "c")?;
//!
//! graph.add_edge(1, 2, 1u32)?;
//! graph.add_edge(2, 3, 1)?;
//! graph.add_edge(1, 3, 5)?;
//!
//! let paths = shortest_paths(&graph, 1, |weight| *weight)?;
//!
//! // The path through b is shorter than the direct edge.
//! assert_eq!(paths.predecessor(3), Some(2));
//! assert_eq!(paths.reconstruct(3).collect::<Vec<_>>(), vec![2, 1]);
//! # Ok::<(), digraph::GraphError>(())
//! ```

use std::cmp::Reverse;
use std::collections::{btree_map, BTreeMap, BinaryHeap};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::GraphError;
use crate::graph::{Digraph, VertexId};
use crate::weight::Weight;

/// Shortest paths from a single start vertex, as a predecessor map.
///
/// See [module](self) documentation for more details and an example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: VertexId,
    pred: BTreeMap<VertexId, VertexId>,
}

impl ShortestPaths {
    /// The vertex where the search was started.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Returns the predecessor of the given vertex on the minimum weight path
    /// from the start, or `None` if the vertex was not in the graph when the
    /// search ran.
    ///
    /// The start vertex and vertices unreachable from the start are their own
    /// predecessors.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.pred.get(&vertex).copied()
    }

    /// Iterates over `(vertex, predecessor)` pairs for every vertex of the
    /// graph, in ascending vertex order.
    pub fn iter(&self) -> PredecessorIter<'_> {
        PredecessorIter {
            inner: self.pred.iter(),
        }
    }

    /// Returns an iterator over the vertices on the path from the given
    /// vertex back to the start, excluding the vertex itself and including
    /// the start.
    ///
    /// For the start vertex and for vertices unreachable from the start the
    /// iterator is empty.
    pub fn reconstruct(&self, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }
}

/// Iterator over the `(vertex, predecessor)` pairs of a [`ShortestPaths`]
/// result.
pub struct PredecessorIter<'a> {
    inner: btree_map::Iter<'a, VertexId, VertexId>,
}

impl Iterator for PredecessorIter<'_> {
    type Item = (VertexId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(vertex, pred)| (*vertex, *pred))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over the vertices on the path from a vertex back to the start.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: VertexId,
    pred: &'a BTreeMap<VertexId, VertexId>,
}

impl Iterator for PathReconstruction<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let pred = *self.pred.get(&self.curr)?;

        // A vertex being its own predecessor means "no predecessor".
        if pred == self.curr {
            return None;
        }

        self.curr = pred;
        Some(pred)
    }
}

/// Finds the minimum weight paths from `start` to every reachable vertex of
/// the graph with Dijkstra's algorithm.
///
/// `edge_weight` maps an edge attribute to a non-negative cost. The behavior
/// is unspecified if it returns a negative weight for a traversed edge.
///
/// Time complexity is O((V + E) log V) with the binary heap.
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `start` is not in the graph.
pub fn shortest_paths<V, E, W, F>(
    graph: &Digraph<V, E>,
    start: VertexId,
    edge_weight: F,
) -> Result<ShortestPaths, GraphError>
where
    W: Weight,
    F: Fn(&E) -> W,
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::UnknownVertex(start));
    }

    // Every vertex starts as its own predecessor and keeps the sentinel if it
    // is never reached.
    let mut pred: BTreeMap<_, _> = graph.vertices().map(|vertex| (vertex, vertex)).collect();

    let mut dist: FxHashMap<VertexId, W> = FxHashMap::default();
    let mut visited: FxHashSet<VertexId> = FxHashSet::default();
    let mut queue = BinaryHeap::new();

    dist.insert(start, W::zero());
    queue.push(Reverse((W::Ord::from(W::zero()), start)));

    while let Some(Reverse((vertex_dist, vertex))) = queue.pop() {
        // Settled vertices can still have stale entries in the queue. Skip
        // them instead of removing them eagerly.
        if !visited.insert(vertex) {
            continue;
        }

        let vertex_dist: W = vertex_dist.into();

        let Some(outgoing) = graph.outgoing(vertex) else {
            continue;
        };

        for (&next, edge) in outgoing {
            if visited.contains(&next) {
                continue;
            }

            let edge_dist = edge_weight(edge);
            debug_assert!(edge_dist >= W::zero(), "negative edge weight");

            let next_dist = vertex_dist.clone() + edge_dist;

            // Relaxation. Update only when the new path is strictly shorter.
            let improved = match dist.get(&next) {
                Some(curr_dist) => next_dist < *curr_dist,
                None => true,
            };

            if improved {
                dist.insert(next, next_dist.clone());
                pred.insert(next, vertex);
                queue.push(Reverse((W::Ord::from(next_dist), next)));
            }
        }
    }

    Ok(ShortestPaths { start, pred })
}

impl<V, E> Digraph<V, E> {
    /// Finds the minimum weight paths from `start` to every reachable vertex.
    ///
    /// See [`shortest_paths`] for details.
    pub fn find_shortest_paths<W, F>(
        &self,
        start: VertexId,
        edge_weight: F,
    ) -> Result<ShortestPaths, GraphError>
    where
        W: Weight,
        F: Fn(&E) -> W,
    {
        shortest_paths(self, start, edge_weight)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    fn create_basic_graph() -> Digraph<(), u32> {
        let mut graph = Digraph::new();

        graph.add_vertex(1, ()).unwrap();
        graph.add_vertex(2, ()).unwrap();
        graph.add_vertex(3, ()).unwrap();

        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        graph.add_edge(1, 3, 5).unwrap();

        graph
    }

    #[test]
    fn prefers_shorter_path_over_direct_edge() {
        let graph = create_basic_graph();
        let paths = shortest_paths(&graph, 1, |weight| *weight).unwrap();

        assert_eq!(paths.start(), 1);
        assert_eq!(paths.predecessor(1), Some(1));
        assert_eq!(paths.predecessor(2), Some(1));
        assert_eq!(paths.predecessor(3), Some(2));
    }

    #[test]
    fn unreachable_vertex_is_its_own_predecessor() {
        let mut graph = create_basic_graph();
        graph.add_vertex(4, ()).unwrap();

        let paths = graph.find_shortest_paths(1, |weight| *weight).unwrap();

        assert_eq!(paths.predecessor(4), Some(4));
        assert_eq!(paths.reconstruct(4).count(), 0);
    }

    #[test]
    fn unknown_start() {
        let graph = create_basic_graph();

        assert_matches!(
            shortest_paths(&graph, 9, |weight: &u32| *weight),
            Err(GraphError::UnknownVertex(9))
        );
    }

    #[test]
    fn covers_every_vertex() {
        let mut graph = create_basic_graph();
        graph.add_vertex(4, ()).unwrap();

        let paths = shortest_paths(&graph, 1, |weight| *weight).unwrap();

        assert_eq!(
            paths.iter().map(|(vertex, _)| vertex).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn reconstruct_walks_back_to_start() {
        let graph = create_basic_graph();
        let paths = shortest_paths(&graph, 1, |weight| *weight).unwrap();

        assert_eq!(paths.reconstruct(3).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(paths.reconstruct(1).count(), 0);
    }

    #[test]
    fn float_weights() {
        let mut graph = Digraph::new();

        graph.add_vertex(1, ()).unwrap();
        graph.add_vertex(2, ()).unwrap();
        graph.add_vertex(3, ()).unwrap();

        graph.add_edge(1, 2, 0.25f64).unwrap();
        graph.add_edge(2, 3, 0.25).unwrap();
        graph.add_edge(1, 3, 0.75).unwrap();

        let paths = shortest_paths(&graph, 1, |weight| *weight).unwrap();

        assert_eq!(paths.predecessor(3), Some(2));
    }

    #[test]
    fn longer_hop_count_can_win() {
        let mut graph = Digraph::new();

        for vertex in 1..=5 {
            graph.add_vertex(vertex, ()).unwrap();
        }

        // A long chain of cheap edges against one expensive shortcut.
        graph.add_edge(1, 2, 1u32).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        graph.add_edge(3, 4, 1).unwrap();
        graph.add_edge(4, 5, 1).unwrap();
        graph.add_edge(1, 5, 10).unwrap();

        let paths = shortest_paths(&graph, 1, |weight| *weight).unwrap();

        assert_eq!(paths.reconstruct(5).collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn direct_edge_wins_over_expensive_chain() {
        let mut graph = Digraph::new();

        graph.add_vertex(1, ()).unwrap();
        graph.add_vertex(2, ()).unwrap();
        graph.add_vertex(3, ()).unwrap();

        graph.add_edge(1, 2, 4u32).unwrap();
        graph.add_edge(2, 3, 4).unwrap();
        graph.add_edge(1, 3, 5).unwrap();

        let paths = shortest_paths(&graph, 1, |weight| *weight).unwrap();

        assert_eq!(paths.predecessor(3), Some(1));
    }

    #[test]
    fn start_only_graph() {
        let mut graph = Digraph::<(), u32>::new();
        graph.add_vertex(7, ()).unwrap();

        let paths = shortest_paths(&graph, 7, |weight| *weight).unwrap();

        assert_eq!(paths.predecessor(7), Some(7));
        assert_eq!(paths.iter().count(), 1);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_predecessor_chains_terminate(
            edges in prop::collection::vec((0..16i64, 0..16i64, 1..100u32), 0..128),
            start in 0..16i64,
        ) {
            let mut graph = Digraph::new();

            for vertex in 0..16 {
                graph.add_vertex(vertex, ()).unwrap();
            }

            for (from, to, weight) in edges {
                let _ = graph.add_edge(from, to, weight);
            }

            let paths = shortest_paths(&graph, start, |weight| *weight).unwrap();

            for vertex in graph.vertices() {
                // Following predecessors must reach a sentinel within
                // vertex_count() steps; a cycle in the map would loop forever.
                let chain = paths.reconstruct(vertex).take(graph.vertex_count() + 1).collect::<Vec<_>>();
                prop_assert!(chain.len() <= graph.vertex_count());

                // A non-empty chain always ends at the start vertex.
                if let Some(last) = chain.last() {
                    prop_assert_eq!(*last, start);
                }
            }
        }
    }
}
