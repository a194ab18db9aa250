// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use std::collections::BTreeSet;
use std::sync::Arc;

pub mod builder;
pub mod layout;

use nodal_algo::algo::algorithms::{
    Algorithm, ConnectedComponents, ConnectedComponentsConfig, CycleDetection,
    CycleDetectionConfig, Degree, DegreeConfig, DegreeResult, DependencyChain,
    DependencyChainConfig, DependencyChainResult, PathReport, SimplePaths, SimplePathsConfig,
    forward_closure,
};
use nodal_algo::algo::{GraphProjection, ProjectionBuilder};
use nodal_common::{AnalysisConfig, Link, Node, Result, Snapshot};
use tracing::debug;

/// Structural view over one immutable set of nodes and links.
///
/// A `Graph` is built once and never mutated; every query is a pure function
/// of the snapshot it was built from. Adjacency is indexed once at
/// construction and shared by every engine.
///
/// # Examples
///
/// ```
/// use nodal::{Graph, Link, Node};
///
/// let nodes: Vec<Node> = (1..=3).map(Node::new).collect();
/// let links = vec![
///     Link::directed(nodes[0].clone(), nodes[1].clone()),
///     Link::directed(nodes[1].clone(), nodes[2].clone()),
/// ];
/// let graph = Graph::new(nodes.clone(), links)?;
///
/// assert!(graph.is_dag()?);
/// assert_eq!(graph.get_paths(&nodes[0], &nodes[2])?.distance(), Some(2));
/// # Ok::<(), nodal::NodalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    projection: Arc<GraphProjection>,
    config: AnalysisConfig,
}

impl Graph {
    /// Build a graph, taking the direction from the links.
    ///
    /// Links that disagree on direction, or reference a node outside
    /// `nodes`, fail with `Construction`.
    pub fn new(
        nodes: impl IntoIterator<Item = Node>,
        links: impl IntoIterator<Item = Link>,
    ) -> Result<Self> {
        Ok(Self::from_snapshot(Snapshot::new(nodes, links)?))
    }

    /// Build a graph with an explicit direction flag.
    pub fn with_direction(
        nodes: impl IntoIterator<Item = Node>,
        links: impl IntoIterator<Item = Link>,
        directed: bool,
    ) -> Result<Self> {
        Ok(Self::from_snapshot(Snapshot::with_direction(
            nodes, links, directed,
        )?))
    }

    pub fn from_snapshot(snapshot: impl Into<Arc<Snapshot>>) -> Self {
        Self {
            projection: Arc::new(ProjectionBuilder::new(snapshot).build()),
            config: AnalysisConfig::default(),
        }
    }

    /// Replace the analysis configuration. The snapshot is shared, not copied.
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.projection.snapshot()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        self.snapshot().nodes()
    }

    /// Links in insertion order.
    pub fn links(&self) -> &[Link] {
        self.snapshot().links()
    }

    pub fn is_directed(&self) -> bool {
        self.projection.is_directed()
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.projection.vertex_count()
    }

    /// Number of links.
    pub fn size(&self) -> usize {
        self.projection.edge_count()
    }

    pub fn is_in_graph(&self, node: &Node) -> bool {
        self.snapshot().contains(node)
    }

    // --- Neighbour access ---

    /// Stored link from `a` to `b`.
    ///
    /// Undirected graphs also match a link stored as `(b, a)`. Unknown
    /// nodes simply have no link.
    pub fn find_link(&self, a: &Node, b: &Node) -> Option<&Link> {
        let u = self.projection.to_slot(a)?;
        let v = self.projection.to_slot(b)?;
        self.projection
            .find_link(u, v)
            .map(|idx| self.projection.link(idx))
    }

    pub fn are_neighbours(&self, a: &Node, b: &Node) -> bool {
        self.find_link(a, b).is_some()
    }

    /// Nodes one admissible link away from `node`, excluding `node` itself.
    pub fn get_neighbourhood(&self, node: &Node) -> Result<BTreeSet<Node>> {
        let slot = self.projection.require_slot(node)?;
        Ok(self
            .projection
            .out_neighbors(slot)
            .iter()
            .map(|&s| self.projection.to_node(s).clone())
            .collect())
    }

    // --- Degree ---

    pub fn get_degree(&self, node: &Node) -> Result<usize> {
        let slot = self.projection.require_slot(node)?;
        Ok(self.projection.out_degree(slot) as usize)
    }

    fn degrees(&self) -> DegreeResult {
        Degree::run(&self.projection, DegreeConfig::default())
    }

    /// One degree per node, in node enumeration order.
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.degrees().sequence()
    }

    pub fn maximum_degree(&self) -> Result<usize> {
        self.degrees().maximum()
    }

    pub fn minimum_degree(&self) -> Result<usize> {
        self.degrees().minimum()
    }

    pub fn is_k_regular(&self, k: usize) -> bool {
        self.degrees().is_k_regular(k)
    }

    /// Every node has even degree. Connectivity is not required.
    pub fn is_eulerian(&self) -> bool {
        self.degrees().all_even()
    }

    // --- Paths ---

    /// Every simple path from `a` to `b`, shortest first.
    ///
    /// `get_paths(a, a)` is never possible. Fails with `NodeNotFound` for an
    /// unknown endpoint and `ResourceExceeded` past the exploration cap.
    pub fn get_paths(&self, a: &Node, b: &Node) -> Result<PathReport> {
        let config = SimplePathsConfig {
            max_explored_paths: self.config.max_explored_paths,
            ..SimplePathsConfig::new(a.clone(), b.clone())
        };
        SimplePaths::run(&self.projection, config)
    }

    // --- Connectivity ---

    /// Forward closure of `node` (out-links only on directed graphs).
    pub fn get_connected_component(&self, node: &Node) -> Result<BTreeSet<Node>> {
        let slot = self.projection.require_slot(node)?;
        Ok(forward_closure(&self.projection, slot)
            .into_iter()
            .map(|s| self.projection.to_node(s).clone())
            .collect())
    }

    /// Maximal components, ordered by their smallest node.
    pub fn connected_components(&self) -> Vec<BTreeSet<Node>> {
        ConnectedComponents::run(&self.projection, ConnectedComponentsConfig::default())
            .components
    }

    pub fn is_connected(&self) -> bool {
        ConnectedComponents::run(&self.projection, ConnectedComponentsConfig::default())
            .is_connected()
    }

    // --- Cycles ---

    /// A closed walk `start, .., start` if one exists.
    pub fn find_cycle(&self) -> Result<Option<Vec<Node>>> {
        let config = CycleDetectionConfig {
            search: self.config.cycle_search,
            max_explored_paths: self.config.max_explored_paths,
        };
        let result = CycleDetection::run(&self.projection, config)?;
        Ok(result.has_cycle.then_some(result.cycle))
    }

    pub fn is_cyclic(&self) -> Result<bool> {
        Ok(self.find_cycle()?.is_some())
    }

    pub fn is_dag(&self) -> Result<bool> {
        Ok(self.is_directed() && !self.is_cyclic()?)
    }

    // --- Dependency chain ---

    fn chain(&self) -> Result<DependencyChainResult> {
        if !self.is_dag()? {
            debug!("Dependency chain requested on a graph that is not a DAG");
            return Ok(DependencyChainResult::default());
        }
        Ok(DependencyChain::run(
            &self.projection,
            DependencyChainConfig::default(),
        ))
    }

    /// A topological order of a DAG; empty for any other graph.
    pub fn dependency_chain(&self) -> Result<Vec<Node>> {
        Ok(self.chain()?.chain)
    }

    /// Nodes grouped by the pass that released them; empty unless a DAG.
    pub fn dependency_layers(&self) -> Result<Vec<Vec<Node>>> {
        Ok(self.chain()?.layers)
    }

    // --- Rendering ---

    pub fn layout(&self) -> layout::CircularLayout {
        layout::CircularLayout::new(self)
    }
}
