// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Algorithm Engine
//!
//! Structural engines over an immutable node/link snapshot.
//!
//! # Architecture
//!
//! A [`GraphProjection`] is built once per snapshot: dense slots for every
//! node and a CSR index of admissible links. Every engine is a stateless
//! [`algorithms::Algorithm`] run against that projection, so they share
//! one neighbour index and hold no data of their own.
//!
//! # Example
//!
//! ```ignore
//! use nodal_algo::algo::{ProjectionBuilder, algorithms::{Algorithm, ConnectedComponents}};
//!
//! let projection = ProjectionBuilder::new(snapshot).build();
//! let result = ConnectedComponents::run(&projection, Default::default());
//! ```

mod id_map;
pub mod projection;

pub mod algorithms;

pub use id_map::IdMap;
pub use projection::{GraphProjection, ProjectionBuilder};

#[cfg(test)]
pub mod test_utils;
