//! All data types for the ordgraph library.

pub mod edge;
pub mod error;
pub mod order;

pub use edge::{Edge, GraphType};
pub use error::{GraphError, GraphResult};
pub use order::{sort_edges_by_target, SortOrder};
