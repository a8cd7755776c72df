//! Criterion benchmarks for ordgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use ordgraph::graph::{bfs_traverse, dfs_traverse, symmetry_reduced_edges};
use ordgraph::types::{GraphType, SortOrder};
use ordgraph::Graph;

/// Build a random graph over u64 vertices. A backbone chain keeps every
/// vertex reachable from the smallest, so traversal benchmarks cover the
/// whole graph.
fn make_graph(graph_type: GraphType, vertex_count: u64, extra_edges_per_vertex: usize) -> Graph<u64> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new(graph_type);
    graph.add_vertices(0..vertex_count);

    for i in 1..vertex_count {
        let _ = graph.add_edge(i - 1, i);
    }
    for from in 0..vertex_count {
        for _ in 0..extra_edges_per_vertex {
            let to = rng.gen_range(0..vertex_count);
            let _ = graph.add_edge(from, to);
        }
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_graph(GraphType::Undirected, 10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let from = rng.gen_range(0..10_000u64);
            let to = rng.gen_range(0..10_000u64);
            let _ = graph.add_edge(from, to);
        })
    });
}

fn bench_bfs_10k(c: &mut Criterion) {
    let mut graph = make_graph(GraphType::Undirected, 10_000, 3);

    c.bench_function("bfs_10k", |b| {
        b.iter(|| {
            let _ = bfs_traverse(&mut graph, None, SortOrder::Ascending);
        })
    });
}

fn bench_dfs_10k(c: &mut Criterion) {
    let mut graph = make_graph(GraphType::Undirected, 10_000, 3);

    c.bench_function("dfs_10k", |b| {
        b.iter(|| {
            let _ = dfs_traverse(&mut graph, None, SortOrder::Ascending);
        })
    });
}

fn bench_symmetry_flat_10k(c: &mut Criterion) {
    let graph = make_graph(GraphType::Undirected, 10_000, 3);

    c.bench_function("symmetry_flat_10k", |b| {
        b.iter(|| {
            let _ = symmetry_reduced_edges(&graph);
        })
    });
}

fn bench_contains_directed_scan(c: &mut Criterion) {
    let graph = make_graph(GraphType::Directed, 10_000, 3);

    c.bench_function("contains_directed_scan_10k", |b| {
        b.iter(|| {
            // Forces the O(total edges) endpoint scan: not a key
            let _ = graph.contains(&10_001);
        })
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_bfs_10k,
    bench_dfs_10k,
    bench_symmetry_flat_10k,
    bench_contains_directed_scan,
);
criterion_main!(benches);
