//! Graph mode and the core edge struct.

use serde::Serialize;

/// Whether edges imply a reciprocal counterpart.
///
/// Fixed at construction and consulted by every mutation, existence check,
/// and symmetry view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GraphType {
    /// Every edge has a stored reciprocal; `(a,b)` and `(b,a)` are one
    /// logical edge.
    Undirected,
    /// Edges are one-way; a vertex may appear only as a destination.
    Directed,
}

impl Default for GraphType {
    fn default() -> Self {
        Self::Undirected
    }
}

/// A directed pair of vertices.
///
/// Structural equality (`PartialEq`) is storage identity. Unordered-pair
/// equivalence is a separate operation, [`Edge::connects_same_pair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T> {
    /// Origin vertex.
    pub from: T,
    /// Destination vertex.
    pub to: T,
}

impl<T> Edge<T> {
    /// Create a new edge.
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }
}

impl<T: PartialEq> Edge<T> {
    /// True if `vertex` is either endpoint.
    pub fn touches(&self, vertex: &T) -> bool {
        self.from == *vertex || self.to == *vertex
    }

    /// True if `other` is the exact mirror of this edge (`a-b` vs `b-a`).
    pub fn is_reciprocal(&self, other: &Edge<T>) -> bool {
        self.from == other.to && self.to == other.from
    }

    /// True if both edges connect the same unordered pair of vertices.
    ///
    /// Used for equivalence checks only, never for deduplication on insert.
    pub fn connects_same_pair(&self, other: &Edge<T>) -> bool {
        (self.from == other.from && self.to == other.to) || self.is_reciprocal(other)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
