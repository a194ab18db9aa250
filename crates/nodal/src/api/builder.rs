// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph construction from an adjacency mapping.

use crate::api::Graph;
use fxhash::{FxHashMap, FxHashSet};
use nodal_common::{AnalysisConfig, Link, NodalError, Node, NodeId, Result, Snapshot};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A fluent builder for graphs described as `key -> [target keys]`.
///
/// Every key becomes a node and every `(key, target)` pair becomes a link
/// with the builder's direction. Targets must themselves be keys.
///
/// # Example
///
/// ```
/// use nodal::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .directed(true)
///     .entry(1, [2])
///     .entry(2, Vec::<i64>::new())
///     .build()?;
/// assert_eq!(graph.size(), 1);
/// # Ok::<(), nodal::NodalError>(())
/// ```
#[derive(Debug, Default, Clone)]
#[must_use = "builders do nothing until .build() is called"]
pub struct GraphBuilder {
    directed: bool,
    config: AnalysisConfig,
    keys: Vec<NodeId>,
    targets: FxHashMap<NodeId, Vec<NodeId>>,
}

impl GraphBuilder {
    /// Create an empty, undirected builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Analysis configuration for the built graph.
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Add one key with its targets. Repeating a key appends to its targets.
    pub fn entry<T>(mut self, key: impl Into<NodeId>, targets: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<NodeId>,
    {
        let key = key.into();
        if !self.targets.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.targets
            .entry(key)
            .or_default()
            .extend(targets.into_iter().map(Into::into));
        self
    }

    /// Add every entry of a mapping, in its iteration order.
    pub fn adjacency<K, I, T>(self, mapping: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<NodeId>,
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        mapping
            .into_iter()
            .fold(self, |builder, (key, targets)| builder.entry(key, targets))
    }

    /// Add the entries of a JSON object such as `{"1": [2, 3], "2": []}`.
    ///
    /// Object keys and string targets written as canonical integers become
    /// integer ids, so `"2"` and `2` name the same node while `"02"` stays a
    /// name. Keys are read in lexical order.
    pub fn json(self, text: &str) -> Result<Self> {
        let mapping: BTreeMap<String, Vec<JsonKey>> = serde_json::from_str(text)?;
        Ok(self.adjacency(
            mapping
                .into_iter()
                .map(|(key, targets)| (parse_key(key), targets.into_iter().map(NodeId::from))),
        ))
    }

    /// Validate the mapping and build the graph.
    ///
    /// Fails with `InvalidDictionary` naming every target that is not a key.
    pub fn build(self) -> Result<Graph> {
        let missing = self.missing_keys();
        if !missing.is_empty() {
            warn!(missing = missing.len(), "Adjacency mapping has dangling targets");
            return Err(NodalError::InvalidDictionary { missing });
        }

        let nodes: Vec<Node> = self.keys.iter().cloned().map(Node::from).collect();
        let links: Vec<Link> = self
            .keys
            .iter()
            .flat_map(|key| {
                self.targets.get(key).into_iter().flatten().map(move |target| {
                    Link::new(Node::from(key.clone()), Node::from(target.clone()), self.directed)
                })
            })
            .collect();

        debug!(
            keys = nodes.len(),
            pairs = links.len(),
            directed = self.directed,
            "Building graph from adjacency mapping"
        );

        let snapshot = Snapshot::with_direction(nodes, links, self.directed)?;
        Ok(Graph::from_snapshot(snapshot).with_config(self.config))
    }

    /// Targets that are not keys, deduplicated in first-seen order.
    fn missing_keys(&self) -> Vec<NodeId> {
        let mut seen = FxHashSet::default();
        self.keys
            .iter()
            .filter_map(|key| self.targets.get(key))
            .flatten()
            .filter(|target| !self.targets.contains_key(*target) && seen.insert(*target))
            .cloned()
            .collect()
    }
}

impl Graph {
    /// Build a graph from `key -> [target keys]`.
    pub fn from_adjacency<K, I, T>(
        mapping: impl IntoIterator<Item = (K, I)>,
        directed: bool,
    ) -> Result<Graph>
    where
        K: Into<NodeId>,
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        GraphBuilder::new()
            .directed(directed)
            .adjacency(mapping)
            .build()
    }

    /// Build a graph from a JSON adjacency object.
    pub fn from_json(text: &str, directed: bool) -> Result<Graph> {
        GraphBuilder::new().directed(directed).json(text)?.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonKey {
    Int(i64),
    Name(String),
}

impl From<JsonKey> for NodeId {
    fn from(key: JsonKey) -> Self {
        match key {
            JsonKey::Int(i) => NodeId::Int(i),
            JsonKey::Name(name) => parse_key(name),
        }
    }
}

/// Integer-looking keys become `Int` only when they are the canonical
/// spelling of that integer, so `"01"` and `"1"` stay distinct nodes.
fn parse_key(key: String) -> NodeId {
    match key.parse::<i64>() {
        Ok(i) if i.to_string() == key => NodeId::Int(i),
        _ => NodeId::Name(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_in_first_seen_order() {
        let builder = GraphBuilder::new()
            .entry(1, [2, 3])
            .entry(2, [9, 3, 1]);
        assert_eq!(
            builder.missing_keys(),
            vec![NodeId::from(3), NodeId::from(9)]
        );
    }

    #[test]
    fn test_repeated_key_appends_targets() {
        let graph = GraphBuilder::new()
            .directed(true)
            .entry(1, [2])
            .entry(2, Vec::<i64>::new())
            .entry(1, [3])
            .entry(3, Vec::<i64>::new())
            .build()
            .unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.nodes()[0], Node::new(1));
    }

    #[test]
    fn test_json_keys_normalise_to_integers() {
        let builder = GraphBuilder::new()
            .json(r#"{"1": [2, "3"], "2": [], "3": ["name"], "name": []}"#)
            .unwrap();
        assert!(builder.missing_keys().is_empty());
        assert_eq!(builder.keys.len(), 4);
        assert!(builder.keys.contains(&NodeId::Name("name".into())));
        assert!(builder.keys.contains(&NodeId::Int(3)));
    }

    #[test]
    fn test_json_padded_keys_stay_distinct() {
        let graph = Graph::from_json(r#"{"1": ["01"], "01": ["+1"], "+1": [1]}"#, true).unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 3);
        assert!(graph.is_in_graph(&Node::new(1)));
        assert!(graph.is_in_graph(&Node::new("01")));
        assert!(graph.is_in_graph(&Node::new("+1")));
        assert_eq!(parse_key("-7".into()), NodeId::Int(-7));
    }

    #[test]
    fn test_json_rejects_non_object() {
        let err = GraphBuilder::new().json("[1, 2]").unwrap_err();
        assert!(matches!(err, NodalError::Json(_)));
    }

    #[test]
    fn test_config_is_carried() {
        let config = AnalysisConfig::default().with_max_explored_paths(5);
        let graph = GraphBuilder::new()
            .config(config.clone())
            .entry("a", ["b"])
            .entry("b", ["a"])
            .build()
            .unwrap();
        assert_eq!(graph.config(), &config);
        assert_eq!(graph.size(), 1);
    }
}
