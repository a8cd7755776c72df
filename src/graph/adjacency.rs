//! Core graph structure: the ordered vertex map and its mutation API.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use crate::types::{sort_edges_by_target, Edge, GraphError, GraphResult, GraphType, SortOrder};

/// An adjacency-list graph over vertices of one totally ordered type.
///
/// Vertices are the keys of an ordered map; each key owns a list of its
/// outgoing edges. Edge lists are unordered at rest. Traversals sort them
/// in place immediately before expansion, so a traversal is not a pure
/// read (see [`crate::graph::traversal`]).
pub struct Graph<T> {
    /// Directed/undirected mode, fixed at construction.
    graph_type: GraphType,
    /// Vertex to outgoing edges, in ascending key order.
    adjacency: BTreeMap<T, Vec<Edge<T>>>,
}

impl<T: Ord + Clone> Graph<T> {
    /// Create a new empty graph of the given mode.
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            adjacency: BTreeMap::new(),
        }
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphType::Undirected)
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphType::Directed)
    }

    /// This graph's mode.
    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// Read access to the full vertex map.
    pub fn adjacency(&self) -> &BTreeMap<T, Vec<Edge<T>>> {
        &self.adjacency
    }

    /// Register a vertex with an empty edge list.
    ///
    /// Returns false and leaves the graph untouched if the vertex is
    /// already present.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Register a batch of vertices, silently skipping duplicates.
    pub fn add_vertices<I: IntoIterator<Item = T>>(&mut self, vertices: I) {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Append an edge to `from`'s list.
    ///
    /// `from` must be a registered vertex. On an undirected graph `to`
    /// must be registered as well, and the reciprocal edge is appended to
    /// its list (a self-loop stores a single entry). On a directed graph
    /// `to` is not required to be a key: a vertex may exist only as a
    /// destination, which is what the directed [`Graph::contains`]
    /// fallback observes.
    pub fn add_edge(&mut self, from: T, to: T) -> GraphResult<()> {
        if !self.adjacency.contains_key(&from) {
            return Err(GraphError::VertexNotFound);
        }
        if self.graph_type == GraphType::Undirected && from != to {
            let reciprocals = self
                .adjacency
                .get_mut(&to)
                .ok_or(GraphError::VertexNotFound)?;
            reciprocals.push(Edge::new(to.clone(), from.clone()));
        }
        let edges = self
            .adjacency
            .get_mut(&from)
            .ok_or(GraphError::VertexNotFound)?;
        edges.push(Edge::new(from, to));
        Ok(())
    }

    /// The edge list of a vertex.
    pub fn get_edges(&self, vertex: &T) -> GraphResult<&[Edge<T>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexNotFound)
    }

    /// Mutable edge list access for in-place pre-traversal sorting.
    pub(crate) fn edges_mut(&mut self, vertex: &T) -> Option<&mut Vec<Edge<T>>> {
        self.adjacency.get_mut(vertex)
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Size of a vertex's edge list.
    pub fn edge_count(&self, vertex: &T) -> GraphResult<usize> {
        self.adjacency
            .get(vertex)
            .map(Vec::len)
            .ok_or(GraphError::VertexNotFound)
    }

    /// Sum of all edge-list sizes.
    ///
    /// On an undirected graph each logical edge counts once per endpoint
    /// list that stores it. [`Graph::logical_edge_count`] collapses the
    /// reciprocals.
    pub fn total_edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of logical edges, with reciprocal duplicates collapsed.
    pub fn logical_edge_count(&self) -> usize {
        super::symmetry::symmetry_reduced_edges(self).len()
    }

    /// Remove a vertex and its edge list.
    ///
    /// Does not cascade: edges in other lists that point at the removed
    /// vertex are left dangling.
    pub fn remove_vertex(&mut self, vertex: &T) -> GraphResult<()> {
        match self.adjacency.remove(vertex) {
            Some(edges) => {
                log::debug!("removed vertex with {} outgoing edges", edges.len());
                Ok(())
            }
            None => Err(GraphError::VertexNotFound),
        }
    }

    /// Remove the first edge in `from`'s list with destination `to`.
    ///
    /// On an undirected graph the first reciprocal entry is removed from
    /// `to`'s list as well. The primary match is verified before any
    /// mutation, so a failed call leaves the store untouched. A missing
    /// reciprocal (possible after a non-cascading [`Graph::remove_vertex`])
    /// is tolerated and logged.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> GraphResult<()> {
        let edges = self
            .adjacency
            .get_mut(from)
            .ok_or(GraphError::VertexNotFound)?;
        let position = edges
            .iter()
            .position(|edge| edge.to == *to)
            .ok_or(GraphError::EdgeNotFound)?;
        edges.remove(position);

        if self.graph_type == GraphType::Undirected && from != to {
            match self.adjacency.get_mut(to) {
                Some(reciprocals) => {
                    if let Some(index) = reciprocals.iter().position(|edge| edge.to == *from) {
                        reciprocals.remove(index);
                    } else {
                        log::debug!("undirected edge had no stored reciprocal");
                    }
                }
                None => log::debug!("undirected edge endpoint is not a registered vertex"),
            }
        }
        Ok(())
    }

    /// Empty the vertex map.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether a vertex is discoverable in the graph.
    ///
    /// Undirected graphs check key membership only. Directed graphs fall
    /// back to scanning every stored edge for the vertex as an endpoint,
    /// since a destination need not be registered as a key. The scan is
    /// O(total edges).
    pub fn contains(&self, vertex: &T) -> bool {
        match self.graph_type {
            GraphType::Undirected => self.adjacency.contains_key(vertex),
            GraphType::Directed => {
                self.adjacency.contains_key(vertex)
                    || self
                        .adjacency
                        .values()
                        .flatten()
                        .any(|edge| edge.touches(vertex))
            }
        }
    }

    /// Resolve a vertex to the canonical stored instance.
    ///
    /// Fails if the vertex is not discoverable; otherwise returns the
    /// smallest stored key that is >= the query (a ceiling lookup), so an
    /// equivalent-but-distinct instance retrieves what the store holds.
    pub fn get_vertex(&self, vertex: &T) -> GraphResult<&T> {
        if !self.contains(vertex) {
            return Err(GraphError::VertexNotFound);
        }
        self.adjacency
            .range((Bound::Included(vertex), Bound::Unbounded))
            .next()
            .map(|(key, _)| key)
            .ok_or(GraphError::VertexNotFound)
    }

    /// The smallest vertex, if any.
    pub fn first_vertex(&self) -> Option<&T> {
        self.adjacency.keys().next()
    }
}

impl<T: Ord + Clone> Default for Graph<T> {
    fn default() -> Self {
        Self::undirected()
    }
}

/// Diagnostic rendering: one line per vertex in ascending key order, the
/// connector, then the vertex's edges sorted ascending by destination.
/// Not a serialization format. Renders from a sorted copy so a `Display`
/// of the graph never reorders stored lists.
impl<T: Ord + Clone + fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in &self.adjacency {
            write!(f, "{} -> ", vertex)?;
            let mut sorted = edges.clone();
            sort_edges_by_target(&mut sorted, SortOrder::Ascending);
            for edge in &sorted {
                write!(f, "{} ", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
