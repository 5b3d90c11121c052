//! Node records of the analysis graph
//!
//! A node carries caller-supplied metadata plus the metric fields the
//! analyzers write back after each run.

use super::property::{PropertyMap, PropertyValue};
use super::types::NodeKind;
use serde::{Deserialize, Serialize};

/// Caller-supplied part of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    pub label: String,
    pub kind: NodeKind,
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
}

fn default_size() -> f64 {
    1.0
}

impl NodeMetadata {
    pub fn new(label: impl Into<String>, kind: NodeKind) -> Self {
        NodeMetadata {
            label: label.into(),
            kind,
            size: default_size(),
            source_document: None,
            content: None,
            properties: PropertyMap::new(),
        }
    }

    pub fn document(label: impl Into<String>) -> Self {
        Self::new(label, NodeKind::Document)
    }

    pub fn entity(label: impl Into<String>) -> Self {
        Self::new(label, NodeKind::Entity)
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_source_document(mut self, source: impl Into<String>) -> Self {
        self.source_document = Some(source.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A node in the analysis graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier within a run
    pub id: String,

    pub label: String,
    pub kind: NodeKind,
    pub size: f64,

    /// Incidence count, parallel edges included
    pub degree: usize,
    pub betweenness: f64,
    pub closeness: f64,
    pub clustering_coefficient: f64,
    /// Community id, `None` for nodes outside any multi-node component
    pub community: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
}

impl Node {
    /// Create a node from metadata with all metrics zeroed
    pub fn new(id: impl Into<String>, metadata: NodeMetadata) -> Self {
        let mut node = Node {
            id: id.into(),
            label: String::new(),
            kind: NodeKind::default(),
            size: default_size(),
            degree: 0,
            betweenness: 0.0,
            closeness: 0.0,
            clustering_coefficient: 0.0,
            community: None,
            source_document: None,
            content: None,
            properties: PropertyMap::new(),
        };
        node.apply_metadata(metadata);
        node
    }

    /// Node materialized for an edge endpoint nobody declared.
    ///
    /// The id doubles as the label and the kind defaults to entity.
    pub fn placeholder(id: impl Into<String>) -> Self {
        let id = id.into();
        let metadata = NodeMetadata::entity(id.clone());
        Node::new(id, metadata)
    }

    /// Overwrite caller-supplied fields, keeping computed metrics
    pub fn apply_metadata(&mut self, metadata: NodeMetadata) {
        self.label = metadata.label;
        self.kind = metadata.kind;
        self.size = metadata.size;
        self.source_document = metadata.source_document;
        self.content = metadata.content;
        self.properties = metadata.properties;
    }

    pub fn is_document(&self) -> bool {
        self.kind == NodeKind::Document
    }

    pub fn is_entity(&self) -> bool {
        self.kind == NodeKind::Entity
    }

    /// Set a property value
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Zero every computed metric
    pub fn reset_metrics(&mut self) {
        self.degree = 0;
        self.betweenness = 0.0;
        self.closeness = 0.0;
        self.clustering_coefficient = 0.0;
        self.community = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_defaults() {
        let node = Node::placeholder("e:quantum");
        assert_eq!(node.label, "e:quantum");
        assert!(node.is_entity());
        assert_eq!(node.size, 1.0);
        assert_eq!(node.degree, 0);
        assert_eq!(node.community, None);
    }

    #[test]
    fn test_apply_metadata_keeps_metrics() {
        let mut node = Node::new("d1", NodeMetadata::document("Paper"));
        node.degree = 3;
        node.community = Some(1);

        node.apply_metadata(NodeMetadata::document("Paper v2").with_content("abstract"));

        assert_eq!(node.label, "Paper v2");
        assert_eq!(node.content.as_deref(), Some("abstract"));
        assert_eq!(node.degree, 3);
        assert_eq!(node.community, Some(1));
    }

    #[test]
    fn test_properties() {
        let mut node = Node::new("e1", NodeMetadata::entity("Graph").with_property("domain", "math"));
        assert_eq!(
            node.get_property("domain").and_then(|v| v.as_string()),
            Some("math")
        );
        let old = node.set_property("domain", "cs");
        assert_eq!(old, Some(PropertyValue::from("math")));
    }

    #[test]
    fn test_serialized_field_names() {
        let node = Node::new("e1", NodeMetadata::entity("Graph"));
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("clusteringCoefficient").is_some());
        assert_eq!(json["kind"], "entity");
        assert!(json.get("content").is_none());
    }
}
