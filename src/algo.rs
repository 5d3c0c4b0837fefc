//! Algorithms operating on a [`Digraph`](crate::Digraph).

pub mod connected;
pub mod shortest_paths;

pub use connected::is_strongly_connected;
pub use shortest_paths::{shortest_paths, ShortestPaths};
