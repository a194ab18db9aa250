// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::{GraphProjection, ProjectionBuilder};
use nodal_common::core::model::{Link, Node};
use nodal_common::graph::snapshot::Snapshot;

/// Nodes `0..vertex_count` (integer ids), so slot `i` holds `Node::new(i)`.
pub fn test_nodes(vertex_count: usize) -> Vec<Node> {
    (0..vertex_count as i64).map(Node::new).collect()
}

pub fn build_test_graph(
    vertex_count: usize,
    edges: &[(u32, u32)],
    directed: bool,
) -> GraphProjection {
    let nodes = test_nodes(vertex_count);
    let links: Vec<Link> = edges
        .iter()
        .map(|&(u, v)| Link::new(nodes[u as usize].clone(), nodes[v as usize].clone(), directed))
        .collect();

    let snapshot = Snapshot::with_direction(nodes, links, directed)
        .expect("test edges must reference test nodes");
    ProjectionBuilder::new(snapshot).build()
}
