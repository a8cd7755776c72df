//! CLI command implementations.

use crate::graph::traversal::{bfs_traverse, dfs_traverse};
use crate::graph::Graph;
use crate::types::{GraphResult, GraphType, SortOrder};

/// Which traversal algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    Dfs,
    Bfs,
}

impl TraversalKind {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
        }
    }

    /// Parse an algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" => Some(Self::Dfs),
            "bfs" => Some(Self::Bfs),
            _ => None,
        }
    }
}

/// Build a graph over string vertices from the command line's vertex and
/// edge arguments. Edge endpoints are registered before insertion; on a
/// directed graph only the origin is registered, so destinations stay
/// discoverable solely through the edge scan.
pub fn build_graph(
    graph_type: GraphType,
    vertices: &[String],
    edges: &[(String, String)],
) -> GraphResult<Graph<String>> {
    let mut graph = Graph::new(graph_type);
    graph.add_vertices(vertices.iter().cloned());
    for (from, to) in edges {
        graph.add_vertex(from.clone());
        if graph_type == GraphType::Undirected {
            graph.add_vertex(to.clone());
        }
        graph.add_edge(from.clone(), to.clone())?;
    }
    Ok(graph)
}

/// Print the adjacency rendering, one vertex per line.
pub fn cmd_render(graph: &Graph<String>) -> GraphResult<()> {
    print!("{}", graph);
    Ok(())
}

/// Run a traversal and print the visit order.
pub fn cmd_traverse(
    graph: &mut Graph<String>,
    kind: TraversalKind,
    start: Option<&String>,
    order: SortOrder,
    json: bool,
) -> GraphResult<()> {
    let visited = match kind {
        TraversalKind::Dfs => dfs_traverse(graph, start, order)?,
        TraversalKind::Bfs => bfs_traverse(graph, start, order)?,
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "algorithm": kind.name(),
                "visited": visited,
            })
        );
    } else {
        println!("{}", visited.join(" "));
    }
    Ok(())
}

/// Print vertex and edge counts.
pub fn cmd_stats(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    let mode = match graph.graph_type() {
        GraphType::Undirected => "undirected",
        GraphType::Directed => "directed",
    };

    if json {
        let stats = serde_json::json!({
            "mode": mode,
            "vertices": graph.vertex_count(),
            "stored_edges": graph.total_edge_count(),
            "logical_edges": graph.logical_edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("Mode: {}", mode);
        println!("Vertices: {}", graph.vertex_count());
        println!("Stored edges: {}", graph.total_edge_count());
        println!("Logical edges: {}", graph.logical_edge_count());
    }
    Ok(())
}

/// Print the logical edge list with reciprocal duplicates collapsed.
pub fn cmd_edges(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    let edges = graph.symmetry_reduced_edges();

    if json {
        println!("{}", serde_json::json!({ "edges": edges }));
    } else {
        for edge in &edges {
            println!("{}", edge);
        }
    }
    Ok(())
}
