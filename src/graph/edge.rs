//! Undirected, weighted, typed edges
//!
//! Several construction passes may each add an edge between the same pair;
//! every addition is a separate `Edge`.

use super::types::{EdgeId, EdgeKind};
use serde::{Deserialize, Serialize};

/// An undirected edge of the analysis graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Position in the builder's edge arena
    pub id: EdgeId,

    /// Endpoint as given by the caller; traversable from either side
    pub source: String,

    pub target: String,

    /// Non-negative weight, nominally in [0, 1]
    pub weight: f64,

    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(
        id: EdgeId,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
        kind: EdgeKind,
    ) -> Self {
        Edge {
            id,
            source: source.into(),
            target: target.into(),
            weight,
            kind,
        }
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint
    pub fn other_end(&self, node: &str) -> Option<&str> {
        if self.source == node {
            Some(&self.target)
        } else if self.target == node {
            Some(&self.source)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_end() {
        let edge = Edge::new(EdgeId::new(0), "doc1", "e1", 1.0, EdgeKind::Contains);
        assert_eq!(edge.other_end("doc1"), Some("e1"));
        assert_eq!(edge.other_end("e1"), Some("doc1"));
        assert_eq!(edge.other_end("e2"), None);
    }

    #[test]
    fn test_self_loop() {
        let edge = Edge::new(EdgeId::new(3), "e1", "e1", 0.4, EdgeKind::Related);
        assert_eq!(edge.other_end("e1"), Some("e1"));
    }
}
