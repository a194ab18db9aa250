// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::model::Node;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Node identifier.
///
/// Either generated by an [`IdGenerator`] (`Auto`) or supplied by the caller
/// as an integer or a name. Identifiers of different variants never compare
/// equal, so a generated `#3` and a caller key `3` are distinct nodes.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum NodeId {
    Auto(u64),
    Int(i64),
    Name(String),
}

impl From<i64> for NodeId {
    fn from(val: i64) -> Self {
        NodeId::Int(val)
    }
}

impl From<i32> for NodeId {
    fn from(val: i32) -> Self {
        NodeId::Int(val as i64)
    }
}

impl From<u32> for NodeId {
    fn from(val: u32) -> Self {
        NodeId::Int(val as i64)
    }
}

impl From<&str> for NodeId {
    fn from(val: &str) -> Self {
        NodeId::Name(val.to_string())
    }
}

impl From<String> for NodeId {
    fn from(val: String) -> Self {
        NodeId::Name(val)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Auto(n) => write!(f, "NodeId(#{})", n),
            NodeId::Int(i) => write!(f, "NodeId({})", i),
            NodeId::Name(s) => write!(f, "NodeId({:?})", s),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Auto(n) => write!(f, "#{}", n),
            NodeId::Int(i) => write!(f, "{}", i),
            NodeId::Name(s) => f.write_str(s),
        }
    }
}

/// Monotonic source of generated node identifiers.
///
/// Each generator owns its counter; two generators hand out overlapping
/// ranges, so nodes that end up in the same graph should come from one
/// generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting at `first` instead of zero.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next_id(&self) -> NodeId {
        NodeId::Auto(self.next.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_node(&self) -> Node {
        Node::new(self.next_id())
    }

    /// Generate `count` fresh nodes in identifier order.
    pub fn nodes(&self, count: usize) -> Vec<Node> {
        (0..count).map(|_| self.next_node()).collect()
    }
}
