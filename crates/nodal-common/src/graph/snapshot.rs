// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Immutable node/link snapshot.
//!
//! A `Snapshot` is validated once at construction and never changes
//! afterwards; "mutating" a graph means building a new snapshot. It provides:
//! - Set semantics for nodes and links with insertion-ordered enumeration
//! - A single direction flag shared by every link
//! - Endpoint membership for every link
//! - Canonical undirected links: `(a,b)` and `(b,a)` collapse to the first seen

use crate::api::error::{NodalError, Result};
use crate::core::model::{Link, Node};
use fxhash::FxHashSet;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Snapshot {
    nodes: Vec<Node>,
    node_set: FxHashSet<Node>,
    links: Vec<Link>,
    directed: bool,
}

impl Snapshot {
    /// Build a snapshot whose direction is taken from the links.
    ///
    /// A snapshot without links is undirected. Links that disagree on the
    /// direction flag are rejected.
    pub fn new(
        nodes: impl IntoIterator<Item = Node>,
        links: impl IntoIterator<Item = Link>,
    ) -> Result<Self> {
        let links: Vec<Link> = links.into_iter().collect();
        let directed = links.first().is_some_and(Link::is_directed);
        if links.iter().any(|l| l.is_directed() != directed) {
            return Err(NodalError::Construction {
                message: "graph mixes directed and undirected links".to_string(),
            });
        }
        Self::with_direction(nodes, links, directed)
    }

    /// Build a snapshot with an explicit direction flag.
    pub fn with_direction(
        nodes: impl IntoIterator<Item = Node>,
        links: impl IntoIterator<Item = Link>,
        directed: bool,
    ) -> Result<Self> {
        let mut node_set = FxHashSet::default();
        let mut ordered_nodes = Vec::new();
        for node in nodes {
            if node_set.insert(node.clone()) {
                ordered_nodes.push(node);
            }
        }

        let mut link_set: FxHashSet<Link> = FxHashSet::default();
        let mut ordered_links = Vec::new();
        let mut collapsed = 0usize;

        for link in links {
            if link.is_directed() != directed {
                return Err(NodalError::Construction {
                    message: format!(
                        "link {:?} does not match graph direction (directed = {})",
                        link, directed
                    ),
                });
            }
            for endpoint in [link.node_1(), link.node_2()] {
                if !node_set.contains(endpoint) {
                    return Err(NodalError::Construction {
                        message: format!(
                            "link {:?} references node '{}' outside the node set",
                            link, endpoint
                        ),
                    });
                }
            }

            if link_set.contains(&link) {
                continue;
            }
            if !directed && link_set.contains(&link.reversed()) {
                trace!(?link, "collapsing reversed undirected link");
                collapsed += 1;
                continue;
            }
            link_set.insert(link.clone());
            ordered_links.push(link);
        }

        debug!(
            order = ordered_nodes.len(),
            size = ordered_links.len(),
            directed,
            collapsed,
            "Built graph snapshot"
        );

        Ok(Self {
            nodes: ordered_nodes,
            node_set,
            links: ordered_links,
            directed,
        })
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Links in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links.
    pub fn size(&self) -> usize {
        self.links.len()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.node_set.contains(node)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
