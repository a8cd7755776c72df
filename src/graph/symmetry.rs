//! Symmetry-collapsing views of the undirected edge set.
//!
//! An undirected graph stores each logical edge twice, once per endpoint
//! list. These views answer "what are the logical edges" by keeping the
//! first-encountered direction of each unordered pair, scanning vertices
//! in ascending key order. Directed graphs pass through unreduced, since
//! direction distinguishes reciprocal pairs. Both views copy; the store is
//! never mutated.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Edge, GraphType};

use super::Graph;

/// Normalized unordered-pair key for the visited-pairs set.
fn pair_key<T: Ord + Clone>(edge: &Edge<T>) -> (T, T) {
    if edge.from <= edge.to {
        (edge.from.clone(), edge.to.clone())
    } else {
        (edge.to.clone(), edge.from.clone())
    }
}

/// Per-vertex view: a copy of the vertex map in which each unordered pair
/// appears exactly once, attributed to the list where it was first
/// encountered (the lexicographically smaller endpoint, given the map's
/// ascending scan). Every vertex keeps its key, possibly with an empty
/// list. Directed graphs get a plain copy.
pub fn symmetry_reduced_map<T: Ord + Clone>(graph: &Graph<T>) -> BTreeMap<T, Vec<Edge<T>>> {
    if graph.graph_type() == GraphType::Directed {
        return graph.adjacency().clone();
    }

    let mut seen: BTreeSet<(T, T)> = BTreeSet::new();
    let mut reduced = BTreeMap::new();
    for (vertex, edges) in graph.adjacency() {
        let kept: Vec<Edge<T>> = edges
            .iter()
            .filter(|edge| seen.insert(pair_key(edge)))
            .cloned()
            .collect();
        reduced.insert(vertex.clone(), kept);
    }
    reduced
}

/// Flat-list view: all edge lists flattened in ascending key order, with
/// one survivor per unordered pair on undirected graphs. Directed graphs
/// get the full flattened sequence, structural duplicates included.
pub fn symmetry_reduced_edges<T: Ord + Clone>(graph: &Graph<T>) -> Vec<Edge<T>> {
    let flattened = graph.adjacency().values().flatten();
    if graph.graph_type() == GraphType::Directed {
        return flattened.cloned().collect();
    }

    let mut seen: BTreeSet<(T, T)> = BTreeSet::new();
    flattened
        .filter(|edge| seen.insert(pair_key(edge)))
        .cloned()
        .collect()
}

impl<T: Ord + Clone> Graph<T> {
    /// See [`symmetry_reduced_map`].
    pub fn symmetry_reduced_map(&self) -> BTreeMap<T, Vec<Edge<T>>> {
        symmetry_reduced_map(self)
    }

    /// See [`symmetry_reduced_edges`].
    pub fn symmetry_reduced_edges(&self) -> Vec<Edge<T>> {
        symmetry_reduced_edges(self)
    }
}
