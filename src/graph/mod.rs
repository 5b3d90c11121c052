//! Document/entity graph model
//!
//! This module implements the analysis graph:
//! - Typed nodes (documents and entities) carrying computed metrics
//! - Undirected, weighted, typed edges; parallel edges and self-loops allowed
//! - An insertion-ordered builder that tolerates unknown edge endpoints
//! - Loosely typed input records with validation

pub mod builder;
pub mod edge;
pub mod node;
pub mod property;
pub mod record;
pub mod types;

// Re-export main types
pub use builder::GraphBuilder;
pub use edge::Edge;
pub use node::{Node, NodeMetadata};
pub use property::{PropertyMap, PropertyValue};
pub use record::{validate_weight, EdgeRecord, GraphSnapshot, NodeRecord};
pub use types::{EdgeId, EdgeKind, NodeKind};
