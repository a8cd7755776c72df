//! In-memory graph operations: the core data structure.

pub mod adjacency;
pub mod symmetry;
pub mod traversal;

pub use adjacency::Graph;
pub use symmetry::{symmetry_reduced_edges, symmetry_reduced_map};
pub use traversal::{bfs_traverse, dfs_traverse};
