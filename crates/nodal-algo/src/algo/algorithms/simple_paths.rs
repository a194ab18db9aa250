// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! All Simple Paths Algorithm.
//!
//! Enumerates every simple path (no repeated node, no reused link) from a
//! source to a target by breadth-first frontier expansion. Each partial path
//! is extended by every admissible link of its tail that leads to an
//! unvisited node over an unused link, until a pass adds nothing.
//!
//! Paths are consumed by underlying link rather than by node pair so that
//! cycle detection can tell "closing over the link just used" apart from
//! "closing over a different link".
//!
//! The number of simple paths grows combinatorially on dense graphs; the
//! expansion fails with `ResourceExceeded` once it has produced more partial
//! paths than the configured cap.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use nodal_common::api::error::{NodalError, Result};
use nodal_common::core::model::{Link, Node};
use serde::Serialize;
use std::ops::ControlFlow;
use tracing::{debug, instrument, trace};

/// A directed traversal step over a stored link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathLink {
    pub from: Node,
    pub to: Node,
    pub underlying: Link,
}

impl PathLink {
    pub fn new(from: Node, to: Node, underlying: Link) -> Self {
        Self {
            from,
            to,
            underlying,
        }
    }
}

/// Result of a path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub from_node: Node,
    pub to_node: Node,
    /// Every qualifying path, shortest first.
    pub paths: Vec<Vec<PathLink>>,
}

impl PathReport {
    pub fn is_possible(&self) -> bool {
        !self.paths.is_empty()
    }

    /// Link count of the shortest path, `None` when no path exists.
    pub fn distance(&self) -> Option<usize> {
        self.paths.iter().map(Vec::len).min()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }
}

pub struct SimplePaths;

#[derive(Debug, Clone)]
pub struct SimplePathsConfig {
    pub source: Node,
    pub target: Node,
    /// Partial path cap (None = unbounded)
    pub max_explored_paths: Option<usize>,
}

impl SimplePathsConfig {
    pub fn new(source: Node, target: Node) -> Self {
        Self {
            source,
            target,
            max_explored_paths: None,
        }
    }
}

impl Algorithm for SimplePaths {
    type Config = SimplePathsConfig;
    type Result = Result<PathReport>;

    fn name() -> &'static str {
        "all_simple_paths"
    }

    #[instrument(skip(graph, config), fields(source = %config.source, target = %config.target))]
    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let source = graph.require_slot(&config.source)?;
        let target = graph.require_slot(&config.target)?;

        let mut found = Vec::new();
        expand_paths(
            graph,
            source,
            Some(target),
            config.max_explored_paths,
            |path| {
                if path.tail() == target {
                    found.push(materialize(graph, path));
                }
                ControlFlow::Continue(())
            },
        )?;

        debug!(paths = found.len(), "Enumerated simple paths");

        Ok(PathReport {
            from_node: config.source,
            to_node: config.target,
            paths: found,
        })
    }
}

/// A partial path in slot space.
#[derive(Debug, Clone)]
pub(crate) struct SlotPath {
    /// Visited slots, source first
    pub(crate) nodes: Vec<u32>,
    /// Consumed link indices, one per step
    pub(crate) links: Vec<u32>,
}

impl SlotPath {
    #[inline]
    pub(crate) fn tail(&self) -> u32 {
        self.nodes[self.nodes.len() - 1]
    }

    #[inline]
    fn extended(&self, node: u32, link: u32) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        let mut links = Vec::with_capacity(self.links.len() + 1);
        links.extend_from_slice(&self.links);
        links.push(link);
        Self { nodes, links }
    }
}

/// Breadth-first expansion of every simple path leaving `source`.
///
/// `visit` sees each path once, in non-decreasing length order, and may stop
/// the expansion early. Paths whose tail is `stop_at` are visited but not
/// extended (no simple path can return to that tail).
pub(crate) fn expand_paths<F>(
    graph: &GraphProjection,
    source: u32,
    stop_at: Option<u32>,
    limit: Option<usize>,
    mut visit: F,
) -> Result<ControlFlow<()>>
where
    F: FnMut(&SlotPath) -> ControlFlow<()>,
{
    let mut explored = 0usize;

    // 1. Seed one path per admissible link of the source
    let mut frontier = Vec::with_capacity(graph.out_degree(source) as usize);
    let root = SlotPath {
        nodes: vec![source],
        links: Vec::new(),
    };
    for (&next, &link) in graph
        .out_neighbors(source)
        .iter()
        .zip(graph.out_links(source))
    {
        admit(&mut explored, limit)?;
        frontier.push(root.extended(next, link));
    }

    // 2. Expand to a fixed point
    let mut depth = 1usize;
    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();

        for path in &frontier {
            if visit(path).is_break() {
                return Ok(ControlFlow::Break(()));
            }

            let tail = path.tail();
            if stop_at == Some(tail) {
                continue;
            }

            for (&step, &link) in graph.out_neighbors(tail).iter().zip(graph.out_links(tail)) {
                if path.nodes.contains(&step) || path.links.contains(&link) {
                    continue;
                }
                admit(&mut explored, limit)?;
                next_frontier.push(path.extended(step, link));
            }
        }

        trace!(depth, frontier = next_frontier.len(), explored, "Expanded path frontier");
        frontier = next_frontier;
        depth += 1;
    }

    Ok(ControlFlow::Continue(()))
}

#[inline]
fn admit(explored: &mut usize, limit: Option<usize>) -> Result<()> {
    *explored += 1;
    if let Some(limit) = limit
        && *explored > limit
    {
        return Err(NodalError::ResourceExceeded { limit });
    }
    Ok(())
}

fn materialize(graph: &GraphProjection, path: &SlotPath) -> Vec<PathLink> {
    path.nodes
        .windows(2)
        .zip(&path.links)
        .map(|(pair, &link)| {
            PathLink::new(
                graph.to_node(pair[0]).clone(),
                graph.to_node(pair[1]).clone(),
                graph.link(link).clone(),
            )
        })
        .collect()
}
