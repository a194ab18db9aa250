// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use nodal::{AnalysisConfig, CycleSearch, Graph, Link, Node};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Small random graphs: up to 6 nodes so path enumeration stays cheap.
fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1usize..=6)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n as u32, 0..n as u32), 0..12),
                any::<bool>(),
            )
        })
        .prop_map(|(n, edges, directed)| {
            let nodes: Vec<Node> = (0..n as u32).map(Node::new).collect();
            let links: Vec<Link> = edges
                .into_iter()
                .map(|(a, b)| Link::new(nodes[a as usize].clone(), nodes[b as usize].clone(), directed))
                .collect();
            Graph::with_direction(nodes, links, directed).expect("generated graph is valid")
        })
}

/// Undirected graphs whose link list repeats some links reversed and adds
/// self-loops on top of random pairs.
fn undirected_with_duplicates() -> impl Strategy<Value = Graph> {
    (1usize..=6)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n as u32, 0..n as u32), 0..10),
                prop::collection::vec(any::<bool>(), 10),
                prop::collection::vec(0..n as u32, 0..3),
            )
        })
        .prop_map(|(n, edges, mirror, loops)| {
            let nodes: Vec<Node> = (0..n as u32).map(Node::new).collect();
            let link = |a: u32, b: u32| {
                Link::undirected(nodes[a as usize].clone(), nodes[b as usize].clone())
            };
            let mut links: Vec<Link> = edges.iter().map(|&(a, b)| link(a, b)).collect();
            links.extend(
                edges
                    .iter()
                    .zip(&mirror)
                    .filter(|(_, m)| **m)
                    .map(|(&(a, b), _)| link(b, a)),
            );
            links.extend(loops.iter().map(|&v| link(v, v)));
            Graph::with_direction(nodes.clone(), links, false).expect("generated graph is valid")
        })
}

fn non_loop_links(graph: &Graph) -> usize {
    graph.links().iter().filter(|l| !l.is_self_loop()).count()
}

proptest! {
    #[test]
    fn neighbourhood_matches_find_link(graph in graph_strategy()) {
        for a in graph.nodes() {
            let hood = graph.get_neighbourhood(a).unwrap();
            prop_assert!(!hood.contains(a));
            prop_assert_eq!(graph.get_degree(a).unwrap(), hood.len());
            for b in graph.nodes() {
                if a != b {
                    prop_assert_eq!(graph.are_neighbours(a, b), hood.contains(b));
                    if !graph.is_directed() {
                        prop_assert_eq!(graph.are_neighbours(a, b), graph.are_neighbours(b, a));
                    }
                }
            }
        }
    }

    #[test]
    fn components_partition_the_nodes(graph in graph_strategy()) {
        let components = graph.connected_components();
        let mut seen = BTreeSet::new();
        for component in &components {
            prop_assert!(!component.is_empty());
            for node in component {
                prop_assert!(seen.insert(node.clone()), "{:?} in two components", node);
            }
        }
        let all: BTreeSet<Node> = graph.nodes().iter().cloned().collect();
        prop_assert_eq!(seen, all);
        prop_assert_eq!(graph.is_connected(), components.len() == 1);
    }

    #[test]
    fn component_contains_its_closure(graph in graph_strategy()) {
        let components = graph.connected_components();
        for node in graph.nodes() {
            let closure = graph.get_connected_component(node).unwrap();
            prop_assert!(closure.contains(node));
            let home = components.iter().find(|c| c.contains(node)).unwrap();
            prop_assert!(closure.is_subset(home));
        }
    }

    #[test]
    fn paths_are_simple_and_connected(graph in graph_strategy()) {
        for a in graph.nodes() {
            for b in graph.nodes() {
                let report = graph.get_paths(a, b).unwrap();
                prop_assert_eq!(report.is_possible(), !report.paths.is_empty());
                prop_assert_eq!(report.distance(), report.paths.iter().map(Vec::len).min());

                for path in &report.paths {
                    prop_assert_eq!(&path[0].from, a);
                    prop_assert_eq!(&path[path.len() - 1].to, b);

                    let mut visited = BTreeSet::from([a.clone()]);
                    for (i, step) in path.iter().enumerate() {
                        prop_assert!(visited.insert(step.to.clone()));
                        prop_assert_eq!(graph.find_link(&step.from, &step.to), Some(&step.underlying));
                        if i > 0 {
                            prop_assert_eq!(&path[i - 1].to, &step.from);
                        }
                    }
                }

                if !graph.is_directed() && a != b {
                    let same_component = graph
                        .connected_components()
                        .iter()
                        .any(|c| c.contains(a) && c.contains(b));
                    prop_assert_eq!(report.is_possible(), same_component);
                }
            }
        }
    }

    #[test]
    fn cycle_searches_agree(graph in graph_strategy()) {
        let closure = graph
            .clone()
            .with_config(AnalysisConfig::unbounded().with_cycle_search(CycleSearch::PathClosure));
        let depth_first = graph.find_cycle().unwrap();
        prop_assert_eq!(depth_first.is_some(), closure.is_cyclic().unwrap());

        if let Some(cycle) = depth_first {
            prop_assert!(cycle.len() >= 3);
            prop_assert_eq!(cycle.first(), cycle.last());
            for pair in cycle.windows(2) {
                prop_assert!(graph.are_neighbours(&pair[0], &pair[1]));
            }
        }
    }

    #[test]
    fn undirected_cycles_match_forest_bound(graph in graph_strategy()) {
        prop_assume!(!graph.is_directed());
        let forest_edges = graph.order() - graph.connected_components().len();
        prop_assert_eq!(graph.is_cyclic().unwrap(), non_loop_links(&graph) > forest_edges);
    }

    #[test]
    fn directed_dag_has_full_dependency_chain(graph in graph_strategy()) {
        prop_assume!(graph.is_directed());
        let is_dag = graph.is_dag().unwrap();
        prop_assert_eq!(is_dag, !graph.is_cyclic().unwrap());

        let chain = graph.dependency_chain().unwrap();
        prop_assert_eq!(is_dag, chain.len() == graph.order());
        if !is_dag {
            prop_assert!(chain.is_empty());
        }

        if !chain.is_empty() {
            let position = |node: &Node| chain.iter().position(|c| c == node).unwrap();
            for link in graph.links() {
                if !link.is_self_loop() {
                    prop_assert!(position(link.node_1()) < position(link.node_2()));
                }
            }
        }
    }

    #[test]
    fn degree_extrema_bound_the_sequence(graph in graph_strategy()) {
        let seq = graph.degree_sequence();
        let max = graph.maximum_degree().unwrap();
        let min = graph.minimum_degree().unwrap();
        prop_assert!(seq.iter().all(|&d| min <= d && d <= max));
        prop_assert_eq!(graph.is_k_regular(max), min == max);
        prop_assert!(!graph.is_k_regular(max + 1));
        if min != max {
            prop_assert!(!graph.is_k_regular(min));
        }
        prop_assert_eq!(graph.is_eulerian(), seq.iter().all(|d| d % 2 == 0));
    }

    #[test]
    fn undirected_degree_sum_is_even(graph in undirected_with_duplicates()) {
        prop_assert!(!graph.is_directed());
        let total: usize = graph.degree_sequence().iter().sum();
        prop_assert_eq!(total % 2, 0);
        prop_assert_eq!(total, 2 * non_loop_links(&graph));
    }

    #[test]
    fn handshake_holds_on_random_undirected(graph in graph_strategy()) {
        prop_assume!(!graph.is_directed());
        prop_assert_eq!(graph.degree_sequence().iter().sum::<usize>() % 2, 0);
    }
}
