//! Local clustering coefficient and connectivity index

use super::GraphView;
use crate::graph::GraphBuilder;
use ragno_graph_algorithms::{density, local_clustering};
use serde::Serialize;
use tracing::info;

/// Aggregate clustering figures
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringSummary {
    /// Mean coefficient over nodes with at least two distinct neighbors
    pub average_clustering: f64,
    /// `|E| / (n(n-1)/2)`, reported separately from density
    pub connectivity_index: f64,
    /// Nodes that entered the average
    pub eligible_nodes: usize,
}

pub struct ClusteringAnalyzer<'a> {
    view: &'a GraphView,
}

impl<'a> ClusteringAnalyzer<'a> {
    pub fn new(view: &'a GraphView) -> Self {
        ClusteringAnalyzer { view }
    }

    /// Edges over possible edges. Same formula as density, kept as its own figure.
    pub fn connectivity_index(&self) -> f64 {
        density(self.view.edge_count, self.view.node_count)
    }

    /// Write coefficients onto the nodes and summarize
    pub fn apply(&self, graph: &mut GraphBuilder) -> ClusteringSummary {
        let result = local_clustering(self.view);

        for (idx, id) in self.view.index_to_node.iter().enumerate() {
            if let Some(node) = graph.node_mut(id) {
                node.clustering_coefficient = result.coefficients[idx];
            }
        }

        let summary = ClusteringSummary {
            average_clustering: result.average,
            connectivity_index: self.connectivity_index(),
            eligible_nodes: result.eligible_nodes,
        };
        info!(
            "Clustering: average {:.4} over {} nodes",
            summary.average_clustering, summary.eligible_nodes
        );
        summary
    }
}
