// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Projection - dense CSR adjacency index over a snapshot.
//!
//! A `GraphProjection` is the precomputed form of neighbour access. It provides:
//! - Dense vertex indexing (0..V) for array-based engine state
//! - CSR format for admissible-link iteration (out-links for directed
//!   graphs, every incident link for undirected ones)
//! - Reverse edges for in-degree based layering
//! - O(1) stored-link lookup by endpoint pair
//!
//! The index answers exactly what a per-query scan over every node would:
//! the neighbourhood of `u` is `{ v != u | find_link(u, v) is some }`.

use crate::algo::IdMap;
use fxhash::FxHashMap;
use nodal_common::api::error::{NodalError, Result};
use nodal_common::core::model::{Link, Node};
use nodal_common::graph::snapshot::Snapshot;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Edge list for CSR construction: (source_slot, destination_slot, link_index).
type LinkEdgeList = Vec<(u32, u32, u32)>;

/// Dense CSR adjacency over an immutable snapshot.
#[derive(Debug, Clone)]
pub struct GraphProjection {
    pub(crate) snapshot: Arc<Snapshot>,

    pub(crate) vertex_count: usize,

    /// Admissible edges: CSR format
    pub(crate) out_offsets: Vec<u32>, // [V+1] vertex slot -> edge start
    pub(crate) out_neighbors: Vec<u32>, // neighbour slots
    pub(crate) out_links: Vec<u32>,     // link index per neighbour entry

    /// Inbound edges: CSR format (mirrors outbound for undirected graphs)
    pub(crate) in_offsets: Vec<u32>,
    pub(crate) in_neighbors: Vec<u32>,

    /// Stored (node_1, node_2) slots per link index
    pub(crate) link_slots: Vec<(u32, u32)>,
    /// Stored endpoint pair -> link index
    pub(crate) link_lookup: FxHashMap<(u32, u32), u32>,

    pub(crate) id_map: IdMap,
}

impl GraphProjection {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of stored links.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.link_slots.len()
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.snapshot.is_directed()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Neighbour slots of a vertex.
    #[inline]
    pub fn out_neighbors(&self, slot: u32) -> &[u32] {
        let start = self.out_offsets[slot as usize] as usize;
        let end = self.out_offsets[slot as usize + 1] as usize;
        &self.out_neighbors[start..end]
    }

    /// Link indices parallel to [`Self::out_neighbors`].
    #[inline]
    pub fn out_links(&self, slot: u32) -> &[u32] {
        let start = self.out_offsets[slot as usize] as usize;
        let end = self.out_offsets[slot as usize + 1] as usize;
        &self.out_links[start..end]
    }

    /// Number of distinct neighbours.
    #[inline]
    pub fn out_degree(&self, slot: u32) -> u32 {
        self.out_offsets[slot as usize + 1] - self.out_offsets[slot as usize]
    }

    /// Slots with an admissible link into `slot`.
    #[inline]
    pub fn in_neighbors(&self, slot: u32) -> &[u32] {
        let start = self.in_offsets[slot as usize] as usize;
        let end = self.in_offsets[slot as usize + 1] as usize;
        &self.in_neighbors[start..end]
    }

    #[inline]
    pub fn in_degree(&self, slot: u32) -> u32 {
        self.in_offsets[slot as usize + 1] - self.in_offsets[slot as usize]
    }

    /// Index of the stored link from `u` to `v`.
    ///
    /// Undirected graphs fall back to the stored `(v, u)` orientation.
    /// Directed graphs only match the forward form.
    #[inline]
    pub fn find_link(&self, u: u32, v: u32) -> Option<u32> {
        if let Some(&idx) = self.link_lookup.get(&(u, v)) {
            return Some(idx);
        }
        if self.is_directed() {
            return None;
        }
        self.link_lookup.get(&(v, u)).copied()
    }

    #[inline]
    pub fn link(&self, idx: u32) -> &Link {
        &self.snapshot.links()[idx as usize]
    }

    #[inline]
    pub fn to_node(&self, slot: u32) -> &Node {
        self.id_map.to_node_unchecked(slot)
    }

    #[inline]
    pub fn to_slot(&self, node: &Node) -> Option<u32> {
        self.id_map.to_slot(node)
    }

    /// Map a node to its slot, failing with `NodeNotFound` when absent.
    pub fn require_slot(&self, node: &Node) -> Result<u32> {
        self.to_slot(node).ok_or_else(|| NodalError::NodeNotFound {
            node: node.id().clone(),
        })
    }

    /// Iterate over all vertices as (slot, node).
    pub fn vertices(&self) -> impl Iterator<Item = (u32, &Node)> + '_ {
        self.id_map.iter()
    }
}

/// Builder for constructing a `GraphProjection` from a snapshot.
pub struct ProjectionBuilder {
    snapshot: Arc<Snapshot>,
}

impl ProjectionBuilder {
    pub fn new(snapshot: impl Into<Arc<Snapshot>>) -> Self {
        Self {
            snapshot: snapshot.into(),
        }
    }

    /// Build the projection.
    #[instrument(skip(self), fields(order = self.snapshot.order(), size = self.snapshot.size()))]
    pub fn build(self) -> GraphProjection {
        let snapshot = self.snapshot;
        let directed = snapshot.is_directed();

        // 1. Dense slots in snapshot order
        let id_map: IdMap = snapshot.nodes().iter().cloned().collect();
        let vertex_count = id_map.len();

        // 2. Resolve link endpoints; snapshot guarantees membership
        let mut link_slots = Vec::with_capacity(snapshot.size());
        let mut link_lookup =
            FxHashMap::with_capacity_and_hasher(snapshot.size(), Default::default());
        for (idx, link) in snapshot.links().iter().enumerate() {
            let (Some(u), Some(v)) = (id_map.to_slot(link.node_1()), id_map.to_slot(link.node_2()))
            else {
                continue;
            };
            link_slots.push((u, v));
            link_lookup.insert((u, v), idx as u32);
        }

        // 3. Admissible edges, self-loops excluded from neighbourhoods
        let (out_edges, in_edges) = collect_edges(&link_slots, directed);

        let (out_offsets, out_neighbors, out_links) = build_csr(vertex_count, &out_edges);
        let (in_offsets, in_neighbors, _) = build_csr(vertex_count, &in_edges);

        debug!(
            vertex_count,
            admissible_edges = out_neighbors.len(),
            "Built graph projection"
        );

        GraphProjection {
            snapshot,
            vertex_count,
            out_offsets,
            out_neighbors,
            out_links,
            in_offsets,
            in_neighbors,
            link_slots,
            link_lookup,
            id_map,
        }
    }
}

/// Expand stored links into admissible (src, dst, link) triples.
fn collect_edges(link_slots: &[(u32, u32)], directed: bool) -> (LinkEdgeList, LinkEdgeList) {
    let mut out_edges = Vec::with_capacity(link_slots.len() * 2);
    let mut in_edges = Vec::with_capacity(link_slots.len() * 2);

    for (idx, &(u, v)) in link_slots.iter().enumerate() {
        if u == v {
            continue;
        }
        let idx = idx as u32;
        out_edges.push((u, v, idx));
        in_edges.push((v, u, idx));
        if !directed {
            out_edges.push((v, u, idx));
            in_edges.push((u, v, idx));
        }
    }

    (out_edges, in_edges)
}

/// Build CSR from edge list.
fn build_csr(vertex_count: usize, edges: &[(u32, u32, u32)]) -> (Vec<u32>, Vec<u32>, Vec<u32>) {
    if vertex_count == 0 {
        return (vec![0], Vec::new(), Vec::new());
    }

    // Count degrees
    let mut degrees = vec![0u32; vertex_count];
    for &(src, _, _) in edges {
        degrees[src as usize] += 1;
    }

    // Build offsets (prefix sum)
    let mut offsets = vec![0u32; vertex_count + 1];
    for i in 0..vertex_count {
        offsets[i + 1] = offsets[i] + degrees[i];
    }

    // Fill neighbours and their links
    let mut neighbors = vec![0u32; edges.len()];
    let mut links = vec![0u32; edges.len()];
    let mut current = offsets.clone();

    for &(src, dst, link) in edges {
        let idx = current[src as usize] as usize;
        neighbors[idx] = dst;
        links[idx] = link;
        current[src as usize] += 1;
    }

    (offsets, neighbors, links)
}
