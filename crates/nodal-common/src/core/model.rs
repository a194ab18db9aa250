// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Node and link value types.
//!
//! Both are immutable once created. A node's identity is its [`NodeId`];
//! a link's identity is the full `(node_1, node_2, directed)` triple, so the
//! stored orientation of an undirected link participates in equality.

use crate::core::id::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }
}

impl From<NodeId> for Node {
    fn from(id: NodeId) -> Self {
        Self { id }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// An edge between two nodes.
#[derive(Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Link {
    node_1: Node,
    node_2: Node,
    directed: bool,
}

impl Link {
    pub fn new(node_1: Node, node_2: Node, directed: bool) -> Self {
        Self {
            node_1,
            node_2,
            directed,
        }
    }

    pub fn undirected(node_1: Node, node_2: Node) -> Self {
        Self::new(node_1, node_2, false)
    }

    pub fn directed(node_1: Node, node_2: Node) -> Self {
        Self::new(node_1, node_2, true)
    }

    pub fn node_1(&self) -> &Node {
        &self.node_1
    }

    pub fn node_2(&self) -> &Node {
        &self.node_2
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Endpoints in stored order.
    pub fn endpoints(&self) -> (&Node, &Node) {
        (&self.node_1, &self.node_2)
    }

    pub fn touches(&self, node: &Node) -> bool {
        self.node_1 == *node || self.node_2 == *node
    }

    pub fn is_self_loop(&self) -> bool {
        self.node_1 == self.node_2
    }

    /// The same link with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            node_1: self.node_2.clone(),
            node_2: self.node_1.clone(),
            directed: self.directed,
        }
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "Link({} {} {})", self.node_1, arrow, self.node_2)
    }
}
