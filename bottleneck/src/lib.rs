//! Maximum bottleneck (widest) path between two vertices of an undirected
//! weighted graph.
//!
//! Two independent solvers answer the same query and must agree:
//! [`solve::binary_search`] tests edge-weight thresholds with a restricted
//! BFS, [`solve::forest`] unions edges from heaviest to lightest until the two
//! vertices meet. Vertex indices are 0-based throughout the library; the
//! [`dimacs`] loader translates the 1-based numbering used in fixture files.

pub mod batch;
pub mod dimacs;
pub mod error;
pub mod graph;
pub mod solve;

pub use error::Error;
pub use graph::{Edge, WeightedGraph};
pub use solve::{solve, Bottleneck, Query, SolveOptions, Strategy};
