//! Generic directed graph with strong connectivity and shortest path
//! algorithms.
//!
//! The central type is [`Digraph`], an adjacency list graph whose vertices
//! are identified by caller-chosen integers and which carries arbitrary
//! attributes on both vertices and edges. Algorithms live in [`algo`].

pub mod algo;
pub mod error;
pub mod graph;
pub mod weight;

pub use error::GraphError;
pub use graph::{Digraph, VertexId};
