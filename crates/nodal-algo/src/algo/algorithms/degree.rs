// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Degree properties.
//!
//! The degree of a node is the size of its neighbourhood: out-neighbours for
//! directed graphs, every adjacent node for undirected ones. Self-loops do
//! not count.

use crate::algo::GraphProjection;
use crate::algo::algorithms::Algorithm;
use fxhash::FxHashSet;
use nodal_common::api::error::{NodalError, Result};
use nodal_common::core::model::Node;

pub struct Degree;

#[derive(Debug, Clone, Default)]
pub struct DegreeConfig {}

#[derive(Debug, Clone)]
pub struct DegreeResult {
    /// (node, degree) in node enumeration order
    pub degrees: Vec<(Node, usize)>,
}

impl DegreeResult {
    pub fn sequence(&self) -> Vec<usize> {
        self.degrees.iter().map(|(_, d)| *d).collect()
    }

    pub fn maximum(&self) -> Result<usize> {
        self.degrees
            .iter()
            .map(|(_, d)| *d)
            .max()
            .ok_or(NodalError::EmptyGraph {
                operation: "maximum degree",
            })
    }

    pub fn minimum(&self) -> Result<usize> {
        self.degrees
            .iter()
            .map(|(_, d)| *d)
            .min()
            .ok_or(NodalError::EmptyGraph {
                operation: "minimum degree",
            })
    }

    /// True iff the set of distinct degrees is exactly `{k}`.
    pub fn is_k_regular(&self, k: usize) -> bool {
        let distinct: FxHashSet<usize> = self.degrees.iter().map(|(_, d)| *d).collect();
        distinct.len() == 1 && distinct.contains(&k)
    }

    pub fn all_even(&self) -> bool {
        self.degrees.iter().all(|(_, d)| d % 2 == 0)
    }
}

impl Algorithm for Degree {
    type Config = DegreeConfig;
    type Result = DegreeResult;

    fn name() -> &'static str {
        "degree"
    }

    fn run(graph: &GraphProjection, _config: Self::Config) -> Self::Result {
        let degrees = graph
            .vertices()
            .map(|(slot, node)| (node.clone(), graph.out_degree(slot) as usize))
            .collect();
        DegreeResult { degrees }
    }
}
