//! Ragno Graph Analytics
//!
//! Structural analysis and personalized ranking for document/entity knowledge
//! graphs.
//!
//! # Components
//!
//! - [`GraphBuilder`]: undirected weighted multigraph of documents and entities
//! - [`TopologyAnalyzer`](algo::TopologyAnalyzer): degree, density
//! - [`CommunityDetector`](algo::CommunityDetector): connected components
//! - [`CentralityEngine`](algo::CentralityEngine): bridging betweenness, closeness
//! - [`ClusteringAnalyzer`](algo::ClusteringAnalyzer): local clustering, connectivity index
//! - [`PageRankEngine`](algo::PageRankEngine): personalized PageRank over an entity graph
//!
//! The pure algorithms live in the `ragno-graph-algorithms` crate and operate
//! on a dense [`GraphView`](algo::GraphView); this crate owns the data model,
//! validation, configuration and report assembly.
//!
//! ## Example Usage
//!
//! ```rust
//! use ragno::graph::{EdgeKind, GraphBuilder, NodeMetadata};
//! use ragno::GraphAnalyzer;
//!
//! let mut graph = GraphBuilder::new();
//! graph.add_node("doc1", NodeMetadata::document("Paper"));
//! graph.add_node("ent1", NodeMetadata::entity("Graph Theory"));
//! graph.add_edge("doc1", "ent1", 1.0, EdgeKind::Contains).unwrap();
//!
//! let report = GraphAnalyzer::default().analyze(&mut graph);
//! assert_eq!(report.topology.density, 1.0);
//! assert_eq!(graph.node("doc1").unwrap().degree, 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod analysis;
pub mod config;
pub mod error;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, EdgeKind, EdgeRecord, GraphBuilder, GraphSnapshot, Node, NodeKind,
    NodeMetadata, NodeRecord, PropertyMap, PropertyValue,
};

pub use algo::{
    CentralityEngine, ClusteringAnalyzer, CommunityDetector, EdgePolicy, EntityMeta,
    PageRankEngine, PprGraphBuilder, TopologyAnalyzer,
};

pub use analysis::{
    entities_from_graph, AnalysisReport, GraphAnalyzer, NodeMetrics, PprRanking, RankingReport,
    TopicQuery,
};

pub use config::{AnalysisConfig, PageRankSettings, PprGraphSettings};

pub use error::{RagnoError, RagnoResult, ValidationError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
