// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    Algorithm, ConnectedComponents, CycleDetection, Degree, DependencyChain, PathLink, PathReport,
    SimplePaths,
};
pub use algo::projection::{GraphProjection, ProjectionBuilder};
