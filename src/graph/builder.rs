//! In-memory construction of the document/entity multigraph
//!
//! Nodes and adjacency rows are kept in insertion order so every ranking that
//! breaks ties by "first added" is reproducible. Edges live in an arena and
//! each adjacency row lists edge ids, so repeated additions between the same
//! pair are all kept.

use super::edge::Edge;
use super::node::{Node, NodeMetadata};
use super::record::{validate_weight, GraphSnapshot};
use super::types::{EdgeId, EdgeKind};
use crate::error::{RagnoResult, ValidationError};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Builder and owner of the analysis graph
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Node records, insertion ordered
    nodes: IndexMap<String, Node>,

    /// Edge arena
    edges: Vec<Edge>,

    /// Incident edge ids per node, parallel aligned with `nodes`
    adjacency: IndexMap<String, Vec<EdgeId>>,

    /// Reject edges whose endpoints were never added
    strict: bool,
}

impl GraphBuilder {
    /// Tolerant builder: unknown edge endpoints are materialized
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict builder: unknown edge endpoints are a validation error
    pub fn strict() -> Self {
        GraphBuilder {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_strict_endpoints(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Build a graph from a record snapshot
    pub fn from_snapshot(snapshot: GraphSnapshot, strict: bool) -> RagnoResult<Self> {
        let mut builder = GraphBuilder::new().with_strict_endpoints(strict);
        builder.load_snapshot(snapshot)?;
        Ok(builder)
    }

    /// Add all nodes, then all edges, of a snapshot
    pub fn load_snapshot(&mut self, snapshot: GraphSnapshot) -> RagnoResult<()> {
        let (node_count, edge_count) = (snapshot.nodes.len(), snapshot.edges.len());

        for record in snapshot.nodes {
            let (id, metadata) = record.into_parts();
            self.add_node(id, metadata);
        }
        for record in snapshot.edges {
            self.add_edge(record.source, record.target, record.weight, record.kind)?;
        }

        info!(
            "Loaded snapshot: {} node records, {} edge records -> {} nodes",
            node_count,
            edge_count,
            self.node_count()
        );
        Ok(())
    }

    /// Insert a node or overwrite its metadata; computed metrics are kept
    pub fn add_node(&mut self, id: impl Into<String>, metadata: NodeMetadata) {
        let id = id.into();
        match self.nodes.get_mut(&id) {
            Some(node) => node.apply_metadata(metadata),
            None => {
                self.nodes.insert(id.clone(), Node::new(id.clone(), metadata));
            }
        }
        self.adjacency.entry(id).or_default();
    }

    /// Append an undirected edge to both endpoints' adjacency rows.
    ///
    /// No deduplication and no self-loop rejection. Endpoints missing from the
    /// node set are created with placeholder metadata unless the builder is
    /// strict.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
        kind: EdgeKind,
    ) -> RagnoResult<EdgeId> {
        let source = source.into();
        let target = target.into();
        validate_weight(&source, &target, weight)?;

        for endpoint in [&source, &target] {
            if self.nodes.contains_key(endpoint.as_str()) {
                continue;
            }
            if self.strict {
                warn!("Rejected edge {} -> {}: unknown endpoint {}", source, target, endpoint);
                return Err(ValidationError::UnknownEndpoint(endpoint.clone()).into());
            }
            debug!("Materializing unknown edge endpoint {}", endpoint);
            self.nodes.insert(endpoint.clone(), Node::placeholder(endpoint.clone()));
            self.adjacency.entry(endpoint.clone()).or_default();
        }

        let id = EdgeId::new(self.edges.len());
        self.adjacency.entry(source.clone()).or_default().push(id);
        self.adjacency.entry(target.clone()).or_default().push(id);
        self.edges.push(Edge::new(id, source, target, weight, kind));
        Ok(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// Node at an insertion position
    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get_index(index).map(|(_, node)| node)
    }

    pub fn node_at_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_index_mut(index).map(|(_, node)| node)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Incident edges of a node, one entry per incidence (a self-loop twice)
    pub fn incident_edges(&self, id: &str) -> Vec<&Edge> {
        self.adjacency
            .get(id)
            .map(|ids| ids.iter().map(|e| &self.edges[e.index()]).collect())
            .unwrap_or_default()
    }

    /// Neighbor multiset of a node, in insertion order
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.incident_edges(id)
            .into_iter()
            .filter_map(|edge| edge.other_end(id))
            .collect()
    }

    /// Incidence count
    pub fn degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map(Vec::len).unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Stored edges, parallel edges included
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Zero every node's computed metrics
    pub fn reset_metrics(&mut self) {
        for node in self.nodes.values_mut() {
            node.reset_metrics();
        }
    }

    /// Adjacency rows as `(neighbor position, weight)`, aligned with node order
    pub fn indexed_adjacency(&self) -> Vec<Vec<(usize, f64)>> {
        self.nodes
            .keys()
            .map(|id| {
                self.incident_edges(id)
                    .into_iter()
                    .filter_map(|edge| {
                        let other = edge.other_end(id)?;
                        let idx = self.nodes.get_index_of(other)?;
                        Some((idx, edge.weight))
                    })
                    .collect()
            })
            .collect()
    }

    /// Node ids in insertion order
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RagnoError;
    use crate::graph::types::NodeKind;

    #[test]
    fn test_add_node_overwrites_metadata() {
        let mut graph = GraphBuilder::new();
        graph.add_node("d1", NodeMetadata::document("Draft"));
        graph.add_node("d1", NodeMetadata::document("Final"));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node("d1").unwrap().label, "Final");
        assert_eq!(graph.degree("d1"), 0);
    }

    #[test]
    fn test_unknown_endpoints_are_materialized() {
        let mut graph = GraphBuilder::new();
        graph.add_node("d1", NodeMetadata::document("Doc"));
        graph.add_edge("d1", "e1", 1.0, EdgeKind::Contains).unwrap();

        let lazy = graph.node("e1").unwrap();
        assert_eq!(lazy.label, "e1");
        assert_eq!(lazy.kind, NodeKind::Entity);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_ids(), vec!["d1", "e1"]);
    }

    #[test]
    fn test_strict_rejects_unknown_endpoints() {
        let mut graph = GraphBuilder::strict();
        graph.add_node("d1", NodeMetadata::document("Doc"));

        let err = graph.add_edge("d1", "e1", 1.0, EdgeKind::Contains).unwrap_err();
        assert!(matches!(
            err,
            RagnoError::Validation(ValidationError::UnknownEndpoint(ref id)) if id == "e1"
        ));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_node("e1"));
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut graph = GraphBuilder::new();
        graph.add_edge("a", "b", 0.8, EdgeKind::Cooccurrence).unwrap();
        graph.add_edge("a", "b", 0.6, EdgeKind::SemanticSimilarity).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree("a"), 2);
        assert_eq!(graph.neighbors("b"), vec!["a", "a"]);
        assert_eq!(graph.indexed_adjacency(), vec![vec![(1, 0.8), (1, 0.6)], vec![(0, 0.8), (0, 0.6)]]);
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let mut graph = GraphBuilder::new();
        graph.add_edge("a", "a", 1.0, EdgeKind::Related).unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.degree("a"), 2);
        assert_eq!(graph.neighbors("a"), vec!["a", "a"]);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let mut graph = GraphBuilder::new();
        assert!(graph.add_edge("a", "b", f64::NAN, EdgeKind::Related).is_err());
        assert!(graph.add_edge("a", "b", -1.0, EdgeKind::Related).is_err());
        assert!(graph.is_empty());
    }
}
