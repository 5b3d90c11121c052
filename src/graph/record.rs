//! Input records supplied by the data-access layer
//!
//! Records arrive as loosely typed JSON. `from_json` validates the fields the
//! analytics depend on (ids must be strings, weights must be non-negative
//! numbers) before handing the record to serde.

use super::node::NodeMetadata;
use super::property::PropertyMap;
use super::types::{EdgeKind, NodeKind};
use crate::error::{RagnoResult, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node as delivered by the query layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: String,
    /// Falls back to the id when absent
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub source_document: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Any other fields
    #[serde(flatten)]
    pub attributes: PropertyMap,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        NodeRecord {
            id: id.into(),
            label: Some(label.into()),
            kind,
            size: None,
            source_document: None,
            content: None,
            attributes: PropertyMap::new(),
        }
    }

    /// Validate and decode a loosely typed record
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        require_string(value, "id")?;
        serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::MalformedRecord(e.to_string()))
    }

    /// Split into id and builder metadata
    pub fn into_parts(self) -> (String, NodeMetadata) {
        let label = self.label.unwrap_or_else(|| self.id.clone());
        let mut metadata = NodeMetadata::new(label, self.kind);
        if let Some(size) = self.size {
            metadata.size = size;
        }
        metadata.source_document = self.source_document;
        metadata.content = self.content;
        metadata.properties = self.attributes;
        (self.id, metadata)
    }
}

/// An edge as delivered by the query layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(alias = "sourceId")]
    pub source: String,
    #[serde(alias = "targetId")]
    pub target: String,
    pub weight: f64,
    pub kind: EdgeKind,
}

impl EdgeRecord {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
        kind: EdgeKind,
    ) -> Self {
        EdgeRecord {
            source: source.into(),
            target: target.into(),
            weight,
            kind,
        }
    }

    /// Validate and decode a loosely typed record
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let source = require_string_any(value, &["source", "sourceId"])?;
        let target = require_string_any(value, &["target", "targetId"])?;

        let weight = match value.get("weight") {
            Some(Value::Number(n)) => n.as_f64(),
            _ => None,
        };
        let weight = weight.ok_or_else(|| ValidationError::InvalidWeight {
            source_id: source.to_string(),
            target_id: target.to_string(),
            found: value
                .get("weight")
                .map(|w| w.to_string())
                .unwrap_or_else(|| "missing".to_string()),
        })?;
        validate_weight(source, target, weight)?;

        serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::MalformedRecord(e.to_string()))
    }
}

/// Reject weights the analytics cannot use
pub fn validate_weight(source: &str, target: &str, weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() {
        return Err(ValidationError::InvalidWeight {
            source_id: source.to_string(),
            target_id: target.to_string(),
            found: weight.to_string(),
        });
    }
    if weight < 0.0 {
        return Err(ValidationError::NegativeWeight {
            source_id: source.to_string(),
            target_id: target.to_string(),
            weight,
        });
    }
    Ok(())
}

fn require_string<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, ValidationError> {
    match value.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        other => Err(ValidationError::InvalidId {
            field,
            found: other
                .map(|v| v.to_string())
                .unwrap_or_else(|| "missing".to_string()),
        }),
    }
}

fn require_string_any<'a>(
    value: &'a Value,
    fields: &[&'static str],
) -> Result<&'a str, ValidationError> {
    let present = fields
        .iter()
        .copied()
        .find(|f| value.get(*f).is_some())
        .unwrap_or(fields[0]);
    require_string(value, present)
}

/// A full set of records for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    /// Parse `{"nodes": [...], "edges": [...]}`, validating every record
    pub fn from_json_str(text: &str) -> RagnoResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&value)?)
    }

    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let nodes = records(value, "nodes")?
            .iter()
            .map(NodeRecord::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = records(value, "edges")?
            .iter()
            .map(EdgeRecord::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GraphSnapshot { nodes, edges })
    }
}

fn records<'a>(value: &'a Value, field: &str) -> Result<&'a [Value], ValidationError> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(ValidationError::MalformedRecord(format!(
            "{} must be an array, got {}",
            field, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_record_extra_attributes() {
        let record = NodeRecord::from_json(&json!({
            "id": "doc1",
            "label": "Attention Is All You Need",
            "kind": "document",
            "sourceDocument": "papers/attention.pdf",
            "year": 2017
        }))
        .unwrap();

        let (id, metadata) = record.into_parts();
        assert_eq!(id, "doc1");
        assert_eq!(metadata.kind, NodeKind::Document);
        assert_eq!(metadata.source_document.as_deref(), Some("papers/attention.pdf"));
        assert_eq!(metadata.properties["year"].as_integer(), Some(2017));
        assert_eq!(metadata.size, 1.0);
    }

    #[test]
    fn test_node_record_label_defaults_to_id() {
        let record = NodeRecord::from_json(&json!({"id": "e1"})).unwrap();
        let (_, metadata) = record.into_parts();
        assert_eq!(metadata.label, "e1");
        assert_eq!(metadata.kind, NodeKind::Entity);
    }

    #[test]
    fn test_non_string_id_rejected() {
        let err = NodeRecord::from_json(&json!({"id": 42})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidId { field: "id", .. }));

        let err = EdgeRecord::from_json(&json!({
            "source": "a", "target": ["b"], "weight": 1.0, "kind": "related"
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidId { field: "target", .. }));
    }

    #[test]
    fn test_edge_weight_validation() {
        let err = EdgeRecord::from_json(&json!({
            "source": "a", "target": "b", "weight": "heavy", "kind": "related"
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidWeight { .. }));

        let err = EdgeRecord::from_json(&json!({
            "source": "a", "target": "b", "weight": -0.5, "kind": "related"
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::NegativeWeight { .. }));
    }

    #[test]
    fn test_edge_record_aliases() {
        let record = EdgeRecord::from_json(&json!({
            "sourceId": "d1", "targetId": "e1", "weight": 1, "kind": "contains"
        }))
        .unwrap();
        assert_eq!(record, EdgeRecord::new("d1", "e1", 1.0, EdgeKind::Contains));
    }

    #[test]
    fn test_unknown_edge_kind_is_malformed() {
        let err = EdgeRecord::from_json(&json!({
            "source": "a", "target": "b", "weight": 0.2, "kind": "knows"
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::MalformedRecord(_)));
    }

    #[test]
    fn test_snapshot_from_json_str() {
        let snapshot = GraphSnapshot::from_json_str(
            r#"{
                "nodes": [{"id": "d1", "label": "Doc", "kind": "document"}],
                "edges": [{"source": "d1", "target": "e1", "weight": 1.0, "kind": "contains"}]
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.nodes.len(), 1);
        assert_eq!(snapshot.edges.len(), 1);

        assert!(GraphSnapshot::from_json_str(r#"{"nodes": 3}"#).is_err());
        assert_eq!(GraphSnapshot::from_json_str("{}").unwrap(), GraphSnapshot::default());
    }
}
