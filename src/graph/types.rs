//! Core type definitions for the document/entity graph

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of an edge in the builder's edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        EdgeId(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    #[default]
    Entity,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Entity => "entity",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(NodeKind::Document),
            "entity" => Ok(NodeKind::Entity),
            other => Err(ValidationError::UnknownNodeKind(other.to_string())),
        }
    }
}

/// Which construction pass produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Contains,
    Cooccurrence,
    SemanticSimilarity,
    CrossDomain,
    Related,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Contains => "contains",
            EdgeKind::Cooccurrence => "cooccurrence",
            EdgeKind::SemanticSimilarity => "semantic_similarity",
            EdgeKind::CrossDomain => "cross_domain",
            EdgeKind::Related => "related",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(EdgeKind::Contains),
            "cooccurrence" => Ok(EdgeKind::Cooccurrence),
            "semantic_similarity" => Ok(EdgeKind::SemanticSimilarity),
            "cross_domain" => Ok(EdgeKind::CrossDomain),
            "related" => Ok(EdgeKind::Related),
            other => Err(ValidationError::UnknownEdgeKind(other.to_string())),
        }
    }
}
