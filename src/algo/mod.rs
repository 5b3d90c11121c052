//! Graph analytics module
//!
//! Algorithms are implemented in the `ragno-graph-algorithms` crate.
//! This module provides the integration/adapter layer: it projects a
//! [`GraphBuilder`] onto a dense [`GraphView`], runs the algorithms, and writes
//! the results back onto the node records.

pub mod centrality;
pub mod clustering;
pub mod community;
pub mod pagerank;
pub mod ppr_graph;
pub mod topology;

use crate::graph::{GraphBuilder, NodeKind};
use serde::Serialize;

// Re-export algorithms
pub use ragno_graph_algorithms::{
    approximate_closeness, bfs_distances, bridging_betweenness, connected_components,
    degree_centrality, density, local_clustering, network_density, personalized_page_rank,
    score_distribution, top_k_indices, ClusteringResult, ComponentResult, GraphView,
    PageRankConfig, PageRankResult, ScoreDistribution,
};

pub use centrality::{CentralityEngine, CentralityScores};
pub use clustering::{ClusteringAnalyzer, ClusteringSummary};
pub use community::{Community, CommunityDetector, CommunityKind};
pub use pagerank::{EntityMeta, InfluenceStats, PageRankEngine, PprRun, RankedEntity, WeightedNeighbor};
pub use ppr_graph::{group_by_kind, tokenize_label, EdgePolicy, PprGraphBuilder};
pub use topology::{TopologyAnalyzer, TopologySummary};

/// Build a GraphView from the builder for algorithm execution.
///
/// Dense indices follow node insertion order, so index ties resolve the same
/// way as insertion-order ties.
pub fn build_view(graph: &GraphBuilder) -> GraphView {
    GraphView::from_adjacency_list(
        graph.node_ids(),
        graph.indexed_adjacency(),
        graph.edge_count(),
    )
}

/// A node in a ranked list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub score: f64,
}

/// Top `k` nodes by `scores` (indexed like `view`), ties in insertion order
pub fn rank_nodes(graph: &GraphBuilder, view: &GraphView, scores: &[f64], k: usize) -> Vec<RankedNode> {
    top_k_indices(scores, k)
        .into_iter()
        .filter_map(|idx| {
            let node = graph.node(&view.index_to_node[idx])?;
            Some(RankedNode {
                id: node.id.clone(),
                label: node.label.clone(),
                kind: node.kind,
                score: scores[idx],
            })
        })
        .collect()
}
