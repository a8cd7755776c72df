//! ordgraph: a generic ordered adjacency-list graph.
//!
//! Stores vertices of any totally ordered type as the keys of an ordered
//! map from vertex to outgoing edge list, with directed/undirected
//! semantics fixed at construction, DFS/BFS traversals whose visit order
//! follows a caller-selected sort direction, and symmetry-collapsing views
//! that present an undirected edge set without reciprocal duplicates.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs_traverse, dfs_traverse, symmetry_reduced_edges, symmetry_reduced_map, Graph};
pub use types::{sort_edges_by_target, Edge, GraphError, GraphResult, GraphType, SortOrder};
