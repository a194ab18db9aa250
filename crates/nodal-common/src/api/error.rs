// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::id::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NodalError {
    /// Construction-time invariant violation (mixed direction flags,
    /// dangling link endpoints). No partial graph is produced.
    #[error("Construction error: {message}")]
    Construction { message: String },

    /// Adjacency mapping references targets that are not mapping keys.
    #[error(
        "Found node(s) in dictionary values that is not present in the keys: {}",
        join_ids(missing)
    )]
    InvalidDictionary { missing: Vec<NodeId> },

    #[error("Node '{node}' not found in graph")]
    NodeNotFound { node: NodeId },

    #[error("Cannot compute {operation} of a graph with no nodes")]
    EmptyGraph { operation: &'static str },

    /// Path exploration grew past the configured cap.
    #[error("Path exploration exceeded limit of {limit} partial paths")]
    ResourceExceeded { limit: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, NodalError>;
