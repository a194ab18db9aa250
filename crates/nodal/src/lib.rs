// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! # Nodal - Structural Graph Analysis
//!
//! Nodal answers structural questions about a fixed collection of nodes and
//! links: adjacency, degree, simple paths, connected components, cycles, and
//! a dependency order for directed acyclic graphs. Undirected and directed
//! graphs share one model.

pub mod api;

pub use api::Graph;
pub use api::builder::GraphBuilder;
pub use api::layout::{Chord, CircularLayout, Point};

// Re-exports from internal crates
pub use nodal_algo::{PathLink, PathReport};
pub use nodal_common::{
    AnalysisConfig, CycleSearch, IdGenerator, Link, NodalError, Node, NodeId, Result, Snapshot,
};

// Re-export crates
pub use nodal_algo as algo;
pub use nodal_common as common;
