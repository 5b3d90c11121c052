//! Shared utilities for graph algorithms
//!
//! Provides a read-only, index-based view of an undirected multigraph for algorithm execution.

use rustc_hash::FxHashSet;
use std::collections::HashMap;

/// Node identifier as known to the caller
pub type NodeId = String;

/// A dense, integer-indexed view of an undirected multigraph using Compressed Sparse Row (CSR) format.
///
/// Every edge `{u, v}` is stored as two incidences, one in the row of `u` and one in the
/// row of `v`. Parallel edges are kept as separate incidences and a self-loop appears
/// twice in its own row.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Number of logical edges (parallel edges counted individually)
    pub edge_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices, one entry per incidence
    pub targets: Vec<usize>,
    /// Edge weights: aligned with `targets`
    pub weights: Vec<f64>,
}

impl GraphView {
    /// An empty view
    pub fn empty() -> Self {
        GraphView {
            node_count: 0,
            edge_count: 0,
            index_to_node: Vec::new(),
            node_to_index: HashMap::new(),
            offsets: vec![0],
            targets: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Number of incidences recorded for a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Neighbor multiset of a node, in insertion order
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Weights aligned with [`GraphView::neighbors`]
    pub fn weights(&self, idx: usize) -> &[f64] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Distinct neighbor identities of a node, in first-seen order
    pub fn distinct_neighbors(&self, idx: usize) -> Vec<usize> {
        let mut seen = FxHashSet::default();
        self.neighbors(idx)
            .iter()
            .copied()
            .filter(|n| seen.insert(*n))
            .collect()
    }

    /// Distinct neighbor sets for every node, indexed like the view
    pub fn neighbor_sets(&self) -> Vec<FxHashSet<usize>> {
        (0..self.node_count)
            .map(|idx| self.neighbors(idx).iter().copied().collect())
            .collect()
    }

    /// Dense index of a node id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.node_to_index.get(id).copied()
    }

    /// Build a view from per-node incidence lists `(neighbor_index, weight)`.
    ///
    /// The lists are taken as-is; callers are responsible for recording both
    /// directions of every edge.
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        adjacency: Vec<Vec<(usize, f64)>>,
        edge_count: usize,
    ) -> Self {
        let node_count = index_to_node.len();
        let mut node_to_index = HashMap::with_capacity(node_count);
        for (idx, id) in index_to_node.iter().enumerate() {
            node_to_index.insert(id.clone(), idx);
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();
        let mut weights = Vec::new();

        offsets.push(0);
        for row in adjacency.into_iter().take(node_count) {
            for (target, weight) in row {
                targets.push(target);
                weights.push(weight);
            }
            offsets.push(targets.len());
        }
        // Rows missing from `adjacency` are empty
        while offsets.len() < node_count + 1 {
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            edge_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
            weights,
        }
    }

    /// Build a view from an undirected edge list over dense indices.
    pub fn from_edges(index_to_node: Vec<NodeId>, edges: &[(usize, usize, f64)]) -> Self {
        let mut adjacency = vec![Vec::new(); index_to_node.len()];
        for &(u, v, w) in edges {
            adjacency[u].push((v, w));
            adjacency[v].push((u, w));
        }
        Self::from_adjacency_list(index_to_node, adjacency, edges.len())
    }
}

/// Node ids `"0".."n"`, handy for views built in tests and benches
pub fn numbered_nodes(n: usize) -> Vec<NodeId> {
    (0..n).map(|i| i.to_string()).collect()
}
