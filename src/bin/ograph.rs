//! CLI entry point for the `ograph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use ordgraph::cli::commands::{self, TraversalKind};
use ordgraph::types::{GraphError, GraphType, SortOrder};

#[derive(Parser)]
#[command(
    name = "ograph",
    about = "ordgraph CLI: build an in-memory graph and inspect it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Treat edges as one-way
    #[arg(long)]
    directed: bool,

    /// Register a vertex (repeatable)
    #[arg(long = "vertex")]
    vertices: Vec<String>,

    /// Add an edge as "from:to" (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency rendering, one vertex per line
    Render,
    /// Visit vertices depth-first or breadth-first
    Traverse {
        /// Algorithm: dfs or bfs
        algorithm: String,
        /// Start vertex (defaults to the smallest)
        #[arg(long)]
        start: Option<String>,
        /// Visit order: asc or desc
        #[arg(long, default_value = "asc")]
        order: String,
    },
    /// Vertex and edge counts
    Stats,
    /// List logical edges with reciprocal duplicates collapsed
    Edges,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let graph_type = if cli.directed {
        GraphType::Directed
    } else {
        GraphType::Undirected
    };

    let mut edges: Vec<(String, String)> = Vec::with_capacity(cli.edges.len());
    for raw in &cli.edges {
        match raw.split_once(':') {
            Some((from, to)) if !from.is_empty() && !to.is_empty() => {
                edges.push((from.to_string(), to.to_string()));
            }
            _ => {
                eprintln!("Invalid edge: {} (expected from:to)", raw);
                process::exit(3);
            }
        }
    }

    let result = commands::build_graph(graph_type, &cli.vertices, &edges).and_then(|mut graph| {
        match cli.command {
            Commands::Render => commands::cmd_render(&graph),
            Commands::Traverse {
                algorithm,
                start,
                order,
            } => {
                let kind = match TraversalKind::from_name(&algorithm) {
                    Some(kind) => kind,
                    None => {
                        eprintln!("Invalid algorithm: {}", algorithm);
                        process::exit(3);
                    }
                };
                let sort_order = match order.as_str() {
                    "asc" => SortOrder::Ascending,
                    "desc" => SortOrder::Descending,
                    _ => {
                        eprintln!("Invalid order: {} (expected asc or desc)", order);
                        process::exit(3);
                    }
                };
                commands::cmd_traverse(&mut graph, kind, start.as_ref(), sort_order, json)
            }
            Commands::Stats => commands::cmd_stats(&graph, json),
            Commands::Edges => commands::cmd_edges(&graph, json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match e {
            GraphError::VertexNotFound | GraphError::EdgeNotFound => 4,
            GraphError::EmptyGraph => 2,
        };
        process::exit(code);
    }
}
