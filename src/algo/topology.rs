//! Degree centrality and network density

use super::{rank_nodes, GraphView, RankedNode};
use crate::graph::GraphBuilder;
use ragno_graph_algorithms::{degree_centrality, network_density};
use serde::Serialize;
use tracing::info;

/// Graph-wide topology figures
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologySummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub average_degree: f64,
}

/// Degree per node and density of the whole graph
pub struct TopologyAnalyzer<'a> {
    view: &'a GraphView,
}

impl<'a> TopologyAnalyzer<'a> {
    pub fn new(view: &'a GraphView) -> Self {
        TopologyAnalyzer { view }
    }

    /// Incidence count per node index
    pub fn degrees(&self) -> Vec<usize> {
        degree_centrality(self.view)
    }

    /// `|E| / (n(n-1)/2)`, 0 below two nodes
    pub fn density(&self) -> f64 {
        network_density(self.view)
    }

    /// Write degrees onto the nodes and summarize
    pub fn apply(&self, graph: &mut GraphBuilder) -> TopologySummary {
        let degrees = self.degrees();
        for (idx, &degree) in degrees.iter().enumerate() {
            if let Some(node) = graph.node_mut(&self.view.index_to_node[idx]) {
                node.degree = degree;
            }
        }

        let node_count = self.view.node_count;
        let average_degree = if node_count > 0 {
            degrees.iter().sum::<usize>() as f64 / node_count as f64
        } else {
            0.0
        };
        let summary = TopologySummary {
            node_count,
            edge_count: self.view.edge_count,
            density: self.density(),
            average_degree,
        };

        info!(
            "Topology: {} nodes, {} edges, density {:.4}",
            summary.node_count, summary.edge_count, summary.density
        );
        summary
    }

    /// Top `k` nodes by degree, ties in insertion order
    pub fn top_by_degree(&self, graph: &GraphBuilder, k: usize) -> Vec<RankedNode> {
        let scores: Vec<f64> = self.degrees().into_iter().map(|d| d as f64).collect();
        rank_nodes(graph, self.view, &scores, k)
    }
}
