// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Cycle Detection Algorithm.
//!
//! A graph is cyclic when some simple path `start -> .. -> t` can be closed
//! by a stored link from `t` back to `start` that the path has not already
//! consumed. For undirected graphs this rules out walking a single link
//! there and back; for directed graphs `A -> B` plus `B -> A` is a cycle.
//! Self-loops are not neighbourhood links and never form a cycle.
//!
//! Two searches answer the same question:
//! - `DepthFirst` looks for a link into a node still on the DFS stack,
//!   ignoring (undirected only) the link that discovered the current node.
//! - `PathClosure` expands every simple path leaving each node and tests its
//!   terminal node for a closing link. Exponential on dense graphs, so it
//!   respects the exploration cap.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use crate::algo::algorithms::simple_paths::expand_paths;
use nodal_common::api::error::Result;
use nodal_common::config::CycleSearch;
use nodal_common::core::model::Node;
use std::ops::ControlFlow;
use tracing::{debug, instrument};

pub struct CycleDetection;

#[derive(Debug, Clone, Default)]
pub struct CycleDetectionConfig {
    pub search: CycleSearch,
    /// Partial path cap per start node for `PathClosure` (None = unbounded)
    pub max_explored_paths: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct CycleDetectionResult {
    pub has_cycle: bool,
    /// First cycle found, starting and ending at the same node
    pub cycle: Vec<Node>,
}

impl Algorithm for CycleDetection {
    type Config = CycleDetectionConfig;
    type Result = Result<CycleDetectionResult>;

    fn name() -> &'static str {
        "cycle_detection"
    }

    #[instrument(skip(graph, config), fields(directed = graph.is_directed(), search = ?config.search))]
    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result {
        let witness = match config.search {
            CycleSearch::DepthFirst => depth_first(graph),
            CycleSearch::PathClosure => path_closure(graph, config.max_explored_paths)?,
        };

        let Some(slots) = witness else {
            debug!("No cycle found");
            return Ok(CycleDetectionResult::default());
        };

        let cycle: Vec<Node> = slots.iter().map(|&s| graph.to_node(s).clone()).collect();
        debug!(length = cycle.len() - 1, "Found cycle");
        Ok(CycleDetectionResult {
            has_cycle: true,
            cycle,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    Active,
    Done,
}

/// Iterative DFS; returns the closed walk `v, .., u, v` for the first back link `u -> v`.
fn depth_first(graph: &GraphProjection) -> Option<Vec<u32>> {
    let n = graph.vertex_count();
    let directed = graph.is_directed();
    let mut state = vec![Visit::Unseen; n];
    let mut tree_link: Vec<Option<u32>> = vec![None; n];
    // (slot, next neighbour cursor)
    let mut stack: Vec<(u32, usize)> = Vec::new();

    for root in 0..n as u32 {
        if state[root as usize] != Visit::Unseen {
            continue;
        }
        state[root as usize] = Visit::Active;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (u, cursor) = *top;
            if cursor == graph.out_neighbors(u).len() {
                state[u as usize] = Visit::Done;
                stack.pop();
                continue;
            }
            top.1 += 1;

            let v = graph.out_neighbors(u)[cursor];
            let link = graph.out_links(u)[cursor];
            if !directed && tree_link[u as usize] == Some(link) {
                continue;
            }

            match state[v as usize] {
                Visit::Unseen => {
                    state[v as usize] = Visit::Active;
                    tree_link[v as usize] = Some(link);
                    stack.push((v, 0));
                }
                Visit::Active => {
                    if let Some(start) = stack.iter().position(|&(s, _)| s == v) {
                        let mut cycle: Vec<u32> =
                            stack[start..].iter().map(|&(s, _)| s).collect();
                        cycle.push(v);
                        return Some(cycle);
                    }
                }
                Visit::Done => {}
            }
        }
    }

    None
}

/// Path expansion from every start node; returns `start, .., t, start`.
fn path_closure(graph: &GraphProjection, limit: Option<usize>) -> Result<Option<Vec<u32>>> {
    for start in 0..graph.vertex_count() as u32 {
        // Nothing leaves or enters: no cycle through this node
        if graph.out_degree(start) == 0 || graph.in_degree(start) == 0 {
            continue;
        }

        let mut witness = None;
        expand_paths(graph, start, None, limit, |path| {
            match graph.find_link(path.tail(), start) {
                Some(closing) if !path.links.contains(&closing) => {
                    witness = Some(path.nodes.clone());
                    ControlFlow::Break(())
                }
                _ => ControlFlow::Continue(()),
            }
        })?;

        if let Some(mut cycle) = witness {
            cycle.push(start);
            return Ok(Some(cycle));
        }
    }

    Ok(None)
}
