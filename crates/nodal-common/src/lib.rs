// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod id;
    pub mod model;
}

pub mod graph {
    pub mod snapshot;
}

// Re-exports for convenience
pub use api::error::{NodalError, Result};
pub use config::{AnalysisConfig, CycleSearch};
pub use core::id::{IdGenerator, NodeId};
pub use core::model::{Link, Node};
pub use graph::snapshot::Snapshot;
