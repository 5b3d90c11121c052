//! Betweenness and closeness approximations
//!
//! Betweenness here is the local bridging count and closeness averages BFS
//! hop distances over the full node count. Both are cheap stand-ins for the
//! exact shortest-path measures and are reported as such.

use super::{rank_nodes, GraphView, RankedNode};
use crate::graph::GraphBuilder;
use ragno_graph_algorithms::{approximate_closeness, bridging_betweenness};
use tracing::info;

/// Centrality per node index
#[derive(Debug, Clone, PartialEq)]
pub struct CentralityScores {
    pub betweenness: Vec<f64>,
    pub closeness: Vec<f64>,
}

pub struct CentralityEngine<'a> {
    view: &'a GraphView,
}

impl<'a> CentralityEngine<'a> {
    pub fn new(view: &'a GraphView) -> Self {
        CentralityEngine { view }
    }

    /// Unconnected neighbor pairs per node
    pub fn betweenness(&self) -> Vec<f64> {
        bridging_betweenness(self.view)
    }

    /// Inverse mean hop distance, unreachable nodes left out of the sum
    pub fn closeness(&self) -> Vec<f64> {
        approximate_closeness(self.view)
    }

    /// Compute both measures and write them onto the nodes
    pub fn apply(&self, graph: &mut GraphBuilder) -> CentralityScores {
        let scores = CentralityScores {
            betweenness: self.betweenness(),
            closeness: self.closeness(),
        };

        for (idx, id) in self.view.index_to_node.iter().enumerate() {
            if let Some(node) = graph.node_mut(id) {
                node.betweenness = scores.betweenness[idx];
                node.closeness = scores.closeness[idx];
            }
        }

        info!("Centrality computed for {} nodes", self.view.node_count);
        scores
    }

    pub fn top_by_betweenness(
        &self,
        graph: &GraphBuilder,
        scores: &CentralityScores,
        k: usize,
    ) -> Vec<RankedNode> {
        rank_nodes(graph, self.view, &scores.betweenness, k)
    }

    pub fn top_by_closeness(
        &self,
        graph: &GraphBuilder,
        scores: &CentralityScores,
        k: usize,
    ) -> Vec<RankedNode> {
        rank_nodes(graph, self.view, &scores.closeness, k)
    }
}
