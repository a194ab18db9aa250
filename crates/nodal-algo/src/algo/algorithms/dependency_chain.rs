// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dependency Chain Algorithm.
//!
//! Layered variant of Kahn's algorithm: each pass takes every unprocessed
//! node whose in-neighbours are all processed, in slot order. Concatenating
//! the layers gives an ordering where every directed link `u -> v` places
//! `u` before `v`.
//!
//! Defined only for directed graphs. When some nodes can never be released
//! (a cycle), the chain is reported incomplete and empty.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use nodal_common::core::model::Node;
use tracing::{debug, instrument};

pub struct DependencyChain;

#[derive(Debug, Clone, Default)]
pub struct DependencyChainConfig {}

#[derive(Debug, Clone, Default)]
pub struct DependencyChainResult {
    /// Nodes released together, one entry per pass
    pub layers: Vec<Vec<Node>>,
    /// Flattened layers
    pub chain: Vec<Node>,
    /// False when the graph is undirected or has a cycle
    pub complete: bool,
}

impl Algorithm for DependencyChain {
    type Config = DependencyChainConfig;
    type Result = DependencyChainResult;

    fn name() -> &'static str {
        "dependency_chain"
    }

    #[instrument(skip(graph, _config))]
    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        if !graph.is_directed() {
            return DependencyChainResult::default();
        }

        let n = graph.vertex_count();

        // 1. Pending in-degrees
        let mut pending: Vec<u32> = (0..n as u32).map(|v| graph.in_degree(v)).collect();

        // 2. First layer: nodes with nothing upstream
        let mut layer: Vec<u32> = (0..n as u32).filter(|&v| pending[v as usize] == 0).collect();

        let mut layers: Vec<Vec<u32>> = Vec::new();
        let mut processed = 0usize;

        // 3. Release layer by layer
        while !layer.is_empty() {
            processed += layer.len();

            let mut next = Vec::new();
            for &u in &layer {
                for &v in graph.out_neighbors(u) {
                    pending[v as usize] -= 1;
                    if pending[v as usize] == 0 {
                        next.push(v);
                    }
                }
            }
            next.sort_unstable();

            layers.push(layer);
            layer = next;
        }

        // 4. Anything left is on or behind a cycle
        if processed != n {
            debug!(processed, total = n, "Dependency chain blocked by a cycle");
            return DependencyChainResult::default();
        }

        let layers: Vec<Vec<Node>> = layers
            .into_iter()
            .map(|l| l.into_iter().map(|s| graph.to_node(s).clone()).collect())
            .collect();
        let chain = layers.iter().flatten().cloned().collect();

        debug!(depth = layers.len(), "Built dependency chain");

        DependencyChainResult {
            layers,
            chain,
            complete: true,
        }
    }
}
