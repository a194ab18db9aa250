// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and the structural engines.

use crate::algo::GraphProjection;

/// Core trait for all graph algorithms.
pub trait Algorithm: Send + Sync {
    /// Algorithm parameters.
    type Config: Clone + Send + 'static;
    /// Result type.
    type Result: Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute algorithm on a projection.
    fn run(graph: &GraphProjection, config: Self::Config) -> Self::Result;
}

mod degree;
pub use degree::{Degree, DegreeConfig, DegreeResult};

mod simple_paths;
pub use simple_paths::{PathLink, PathReport, SimplePaths, SimplePathsConfig};

mod connectivity;
pub use connectivity::{
    ConnectedComponents, ConnectedComponentsConfig, ConnectedComponentsResult, forward_closure,
};

mod cycle_detection;
pub use cycle_detection::{CycleDetection, CycleDetectionConfig, CycleDetectionResult};

mod dependency_chain;
pub use dependency_chain::{DependencyChain, DependencyChainConfig, DependencyChainResult};
