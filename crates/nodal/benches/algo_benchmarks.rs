// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Algorithm Benchmarks
//!
//! Run with:
//! cargo bench --bench algo_benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nodal::{Graph, Link, Node};
use rand::Rng;
use std::env;

#[derive(Clone, Debug)]
struct AlgoBenchConfig {
    nodes: usize,
    edges_per_node: usize,
    /// Order of the complete graph used for path enumeration
    path_nodes: usize,
}

impl AlgoBenchConfig {
    fn from_env() -> Self {
        let nodes = env::var("BENCH_NODES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000); // Default 1000 nodes for linear-time engines
        let edges_per_node = env::var("BENCH_EDGES_PER_NODE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        let path_nodes = env::var("BENCH_PATH_NODES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7);
        Self {
            nodes,
            edges_per_node,
            path_nodes,
        }
    }

    fn label(&self) -> String {
        format!("{}n_{}deg", self.nodes, self.edges_per_node)
    }
}

/// Random DAG: every link points from a lower to a higher index.
fn random_dag(nodes: usize, edges_per_node: usize) -> Graph {
    let ids: Vec<Node> = (0..nodes as u32).map(Node::new).collect();
    let mut rng = rand::thread_rng();
    let mut links = Vec::with_capacity(nodes * edges_per_node);
    for i in 0..nodes {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..nodes);
            if target > i {
                links.push(Link::directed(ids[i].clone(), ids[target].clone()));
            }
        }
    }
    Graph::with_direction(ids, links, true).unwrap()
}

fn complete_graph(nodes: usize) -> Graph {
    let ids: Vec<Node> = (0..nodes as u32).map(Node::new).collect();
    let mut links = Vec::new();
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            links.push(Link::undirected(ids[i].clone(), ids[j].clone()));
        }
    }
    Graph::new(ids, links).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let config = AlgoBenchConfig::from_env();
    let graph = random_dag(config.nodes, config.edges_per_node);
    let nodes = graph.nodes().to_vec();
    let links = graph.links().to_vec();

    let mut group = c.benchmark_group("construction");
    group.bench_with_input(
        BenchmarkId::new("build", config.label()),
        &config,
        |b, _| b.iter(|| Graph::with_direction(nodes.clone(), links.clone(), true).unwrap()),
    );
    group.finish();
}

fn bench_linear_engines(c: &mut Criterion) {
    let config = AlgoBenchConfig::from_env();
    let graph = random_dag(config.nodes, config.edges_per_node);

    let mut group = c.benchmark_group("linear");
    group.bench_with_input(
        BenchmarkId::new("degree_sequence", config.label()),
        &graph,
        |b, g| b.iter(|| g.degree_sequence()),
    );
    group.bench_with_input(
        BenchmarkId::new("dependency_chain", config.label()),
        &graph,
        |b, g| b.iter(|| g.dependency_chain().unwrap()),
    );
    group.finish();
}

fn bench_connected_components(c: &mut Criterion) {
    let config = AlgoBenchConfig::from_env();
    let graph = random_dag(config.nodes, config.edges_per_node);

    let mut group = c.benchmark_group("connected_components");
    group.sample_size(10);
    group.bench_with_input(
        BenchmarkId::new("directed_merge", config.label()),
        &graph,
        |b, g| b.iter(|| g.connected_components()),
    );
    group.finish();
}

fn bench_paths(c: &mut Criterion) {
    let config = AlgoBenchConfig::from_env();
    let graph = complete_graph(config.path_nodes);
    let (a, b) = (Node::new(0), Node::new(1));

    let mut group = c.benchmark_group("paths");
    group.sample_size(10);
    group.bench_function(BenchmarkId::new("complete", config.path_nodes), |bench| {
        bench.iter(|| graph.get_paths(&a, &b).unwrap())
    });
    group.bench_function(BenchmarkId::new("is_cyclic", config.path_nodes), |bench| {
        bench.iter(|| graph.is_cyclic().unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_linear_engines,
    bench_connected_components,
    bench_paths
);
criterion_main!(benches);
