// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Connected Components Algorithm.
//!
//! The component of a node is its forward closure: the node, its
//! neighbourhood, and the neighbourhoods of every member added along the way
//! until nothing new appears.
//!
//! Undirected graphs partition directly into closures. Directed closures
//! follow out-links only and can overlap without being maximal, so every
//! node's closure is computed and overlapping closures are merged
//! (union-find) until no two share a node.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use nodal_common::core::model::Node;
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, instrument};

pub struct ConnectedComponents;

#[derive(Debug, Clone, Default)]
pub struct ConnectedComponentsConfig {}

#[derive(Debug, Clone)]
pub struct ConnectedComponentsResult {
    /// Components ordered by their smallest node
    pub components: Vec<BTreeSet<Node>>,
}

impl ConnectedComponentsResult {
    pub fn is_connected(&self) -> bool {
        self.components.len() == 1
    }
}

impl Algorithm for ConnectedComponents {
    type Config = ConnectedComponentsConfig;
    type Result = ConnectedComponentsResult;

    fn name() -> &'static str {
        "connected_components"
    }

    #[instrument(skip(graph, _config), fields(directed = graph.is_directed()))]
    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        if graph.vertex_count() == 0 {
            return ConnectedComponentsResult {
                components: Vec::new(),
            };
        }

        let groups = if graph.is_directed() {
            merged_closures(graph)
        } else {
            disjoint_closures(graph)
        };

        let mut components: Vec<BTreeSet<Node>> = groups
            .into_iter()
            .map(|slots| slots.into_iter().map(|s| graph.to_node(s).clone()).collect())
            .collect();
        components.sort_by(|a, b| a.first().cmp(&b.first()));

        debug!(
            component_count = components.len(),
            "Computed connected components"
        );

        ConnectedComponentsResult { components }
    }
}

/// Forward closure of `start`, returned as slots in discovery order.
pub fn forward_closure(graph: &GraphProjection, start: u32) -> Vec<u32> {
    let mut member = vec![false; graph.vertex_count()];
    closure_into(graph, start, &mut member)
}

fn closure_into(graph: &GraphProjection, start: u32, member: &mut [bool]) -> Vec<u32> {
    let mut closure = vec![start];
    let mut pending = VecDeque::from([start]);
    member[start as usize] = true;

    while let Some(u) = pending.pop_front() {
        for &v in graph.out_neighbors(u) {
            if !member[v as usize] {
                member[v as usize] = true;
                closure.push(v);
                pending.push_back(v);
            }
        }
    }

    closure
}

/// Undirected: closures of still-unassigned nodes partition the graph.
fn disjoint_closures(graph: &GraphProjection) -> Vec<Vec<u32>> {
    let mut assigned = vec![false; graph.vertex_count()];
    let mut groups = Vec::new();

    for slot in 0..graph.vertex_count() as u32 {
        if !assigned[slot as usize] {
            groups.push(closure_into(graph, slot, &mut assigned));
        }
    }

    groups
}

/// Directed: merge every node's forward closure with any closure it overlaps.
fn merged_closures(graph: &GraphProjection) -> Vec<Vec<u32>> {
    let n = graph.vertex_count();

    // Union-Find with path compression
    let mut parent: Vec<u32> = (0..n as u32).collect();
    let mut rank: Vec<u8> = vec![0; n];

    fn find(parent: &mut [u32], mut x: u32) -> u32 {
        while parent[x as usize] != x {
            parent[x as usize] = parent[parent[x as usize] as usize]; // path compression
            x = parent[x as usize];
        }
        x
    }

    fn union(parent: &mut [u32], rank: &mut [u8], x: u32, y: u32) {
        let px = find(parent, x);
        let py = find(parent, y);
        if px == py {
            return;
        }
        // Union by rank
        match rank[px as usize].cmp(&rank[py as usize]) {
            std::cmp::Ordering::Less => parent[px as usize] = py,
            std::cmp::Ordering::Greater => parent[py as usize] = px,
            std::cmp::Ordering::Equal => {
                parent[py as usize] = px;
                rank[px as usize] += 1;
            }
        }
    }

    // Every member of a closure shares a group with the closure's origin;
    // closures that share any node end up under one root.
    for start in 0..n as u32 {
        for member in forward_closure(graph, start) {
            union(&mut parent, &mut rank, start, member);
        }
    }

    let mut root_group: Vec<Option<usize>> = vec![None; n];
    let mut groups: Vec<Vec<u32>> = Vec::new();
    for slot in 0..n as u32 {
        let root = find(&mut parent, slot) as usize;
        let gid = match root_group[root] {
            Some(gid) => gid,
            None => {
                groups.push(Vec::new());
                root_group[root] = Some(groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[gid].push(slot);
    }

    groups
}
