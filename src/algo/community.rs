//! Community detection
//!
//! Communities are the multi-node connected components of the graph, found
//! by an explicit-stack walk that ignores edge weight and kind. Each one is
//! labelled by its document/entity composition.

use super::GraphView;
use crate::graph::{GraphBuilder, NodeKind};
use ragno_graph_algorithms::connected_components;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Composition label of a community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommunityKind {
    #[serde(rename = "Document-centric")]
    DocumentCentric,
    #[serde(rename = "Entity-centric")]
    EntityCentric,
    Mixed,
}

impl CommunityKind {
    /// More documents than entities, more entities than documents, or neither
    pub fn from_counts(documents: usize, entities: usize) -> Self {
        if documents > entities {
            CommunityKind::DocumentCentric
        } else if entities > documents {
            CommunityKind::EntityCentric
        } else {
            CommunityKind::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommunityKind::DocumentCentric => "Document-centric",
            CommunityKind::EntityCentric => "Entity-centric",
            CommunityKind::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for CommunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multi-node connected component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Community {
    /// Sequential id in discovery order, starting at 0
    pub id: usize,
    /// Member ids in visit order
    pub nodes: Vec<String>,
    pub size: usize,
    pub kind: CommunityKind,
}

/// Connected-component community detection
pub struct CommunityDetector<'a> {
    view: &'a GraphView,
}

impl<'a> CommunityDetector<'a> {
    pub fn new(view: &'a GraphView) -> Self {
        CommunityDetector { view }
    }

    /// Find communities and set each member's `community` field.
    ///
    /// Singleton components get no id and are not reported; their nodes end
    /// up with `community = None`.
    pub fn detect(&self, graph: &mut GraphBuilder) -> Vec<Community> {
        let result = connected_components(self.view);
        let mut communities = Vec::new();

        for node in graph.nodes_mut() {
            node.community = None;
        }

        for members in result.non_trivial() {
            let id = communities.len();
            let mut documents = 0;
            let mut entities = 0;
            let mut nodes = Vec::with_capacity(members.len());

            for &idx in members {
                let node_id = &self.view.index_to_node[idx];
                if let Some(node) = graph.node_mut(node_id) {
                    match node.kind {
                        NodeKind::Document => documents += 1,
                        NodeKind::Entity => entities += 1,
                    }
                    node.community = Some(id);
                }
                nodes.push(node_id.clone());
            }

            communities.push(Community {
                id,
                size: nodes.len(),
                nodes,
                kind: CommunityKind::from_counts(documents, entities),
            });
        }

        info!(
            "Communities: {} detected from {} components",
            communities.len(),
            result.components.len()
        );
        communities
    }
}
