//! Analysis pipeline
//!
//! Runs the four structural analyzers over one view of the document/entity
//! graph, and the PageRank engine over its own graph, collecting results into
//! serializable reports for an external renderer.

use crate::algo::{
    build_view, group_by_kind, CentralityEngine, ClusteringAnalyzer, ClusteringSummary,
    Community, CommunityDetector, EntityMeta, InfluenceStats, PageRankEngine, PprGraphBuilder,
    RankedEntity, RankedNode, TopologyAnalyzer, TopologySummary,
};
use crate::config::AnalysisConfig;
use crate::error::RagnoResult;
use crate::graph::{GraphBuilder, GraphSnapshot, Node, NodeKind, PropertyValue};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Computed metrics of one node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetrics {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub degree: usize,
    pub betweenness: f64,
    pub closeness: f64,
    pub clustering_coefficient: f64,
    pub community: Option<usize>,
}

impl From<&Node> for NodeMetrics {
    fn from(node: &Node) -> Self {
        NodeMetrics {
            id: node.id.clone(),
            label: node.label.clone(),
            kind: node.kind,
            degree: node.degree,
            betweenness: node.betweenness,
            closeness: node.closeness,
            clustering_coefficient: node.clustering_coefficient,
            community: node.community,
        }
    }
}

/// Structural analysis of the document/entity graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub topology: TopologySummary,
    pub clustering: ClusteringSummary,
    pub communities: Vec<Community>,
    pub top_by_degree: Vec<RankedNode>,
    pub top_by_betweenness: Vec<RankedNode>,
    pub top_by_closeness: Vec<RankedNode>,
    /// Per-node metrics in insertion order
    pub nodes: Vec<NodeMetrics>,
}

/// A named set of entities to personalize a run on
#[derive(Debug, Clone, PartialEq)]
pub struct TopicQuery {
    pub name: String,
    pub entity_ids: Vec<String>,
}

impl TopicQuery {
    pub fn new<S: Into<String>>(name: impl Into<String>, entity_ids: impl IntoIterator<Item = S>) -> Self {
        TopicQuery {
            name: name.into(),
            entity_ids: entity_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of one PageRank run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PprRanking {
    pub name: String,
    /// Ids that received restart mass (0 for the global run)
    pub personalized_entities: usize,
    pub top_entities: Vec<RankedEntity>,
    pub influence: InfluenceStats,
    pub iterations: usize,
    pub converged: bool,
}

/// Global, per-topic and per-kind PageRank results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub global: PprRanking,
    pub topics: Vec<PprRanking>,
    pub kind_groups: Vec<PprRanking>,
}

/// Entry point for a full analysis run
#[derive(Debug, Clone, Default)]
pub struct GraphAnalyzer {
    config: AnalysisConfig,
}

impl GraphAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        GraphAnalyzer { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Build the document/entity graph from records, honoring `strict_endpoints`
    pub fn build_graph(&self, snapshot: GraphSnapshot) -> RagnoResult<GraphBuilder> {
        GraphBuilder::from_snapshot(snapshot, self.config.strict_endpoints)
    }

    /// Compute every structural metric, writing results onto the nodes
    pub fn analyze(&self, graph: &mut GraphBuilder) -> AnalysisReport {
        let k = self.config.top_k;
        graph.reset_metrics();
        let view = build_view(graph);

        let topology_analyzer = TopologyAnalyzer::new(&view);
        let topology = topology_analyzer.apply(graph);
        let communities = CommunityDetector::new(&view).detect(graph);
        let centrality_engine = CentralityEngine::new(&view);
        let centrality = centrality_engine.apply(graph);
        let clustering = ClusteringAnalyzer::new(&view).apply(graph);

        let report = AnalysisReport {
            top_by_degree: topology_analyzer.top_by_degree(graph, k),
            top_by_betweenness: centrality_engine.top_by_betweenness(graph, &centrality, k),
            top_by_closeness: centrality_engine.top_by_closeness(graph, &centrality, k),
            nodes: graph.nodes().map(NodeMetrics::from).collect(),
            topology,
            clustering,
            communities,
        };

        info!(
            "Analysis complete: {} nodes, {} communities",
            report.nodes.len(),
            report.communities.len()
        );
        report
    }

    /// Build a PageRank engine over `entities` using the configured policy.
    ///
    /// Fails on out-of-range PageRank settings or edge weights.
    pub fn build_ppr_engine(
        &self,
        entities: &IndexMap<String, EntityMeta>,
        cooccurrences: &[(String, String, f64)],
    ) -> RagnoResult<PageRankEngine> {
        self.config.pagerank.validate()?;
        let engine = PprGraphBuilder::new(&self.config.ppr_graph).build(
            entities,
            cooccurrences,
            self.config.pagerank_config(),
        )?;
        Ok(engine)
    }

    /// Global run, one run per topic and one per entity kind.
    ///
    /// Topic and kind runs are independent and execute in parallel; results
    /// keep input order.
    pub fn rank(&self, engine: &PageRankEngine, topics: &[TopicQuery]) -> RankingReport {
        let global = self.run(engine, "global", None);

        let topics: Vec<PprRanking> = topics
            .par_iter()
            .map(|topic| {
                let p = engine.create_topic_personalization(&topic.entity_ids);
                self.run(engine, &topic.name, Some(&p))
            })
            .collect();

        let groups: Vec<(String, Vec<String>)> = group_by_kind(engine.entities()).into_iter().collect();
        let kind_groups: Vec<PprRanking> = groups
            .par_iter()
            .map(|(kind, members)| {
                let p = engine.create_topic_personalization(members);
                self.run(engine, kind, Some(&p))
            })
            .collect();

        info!(
            "Ranking complete: {} topic runs, {} kind runs",
            topics.len(),
            kind_groups.len()
        );
        RankingReport {
            global,
            topics,
            kind_groups,
        }
    }

    fn run(
        &self,
        engine: &PageRankEngine,
        name: &str,
        personalization: Option<&IndexMap<String, f64>>,
    ) -> PprRanking {
        let run = engine.calculate_ppr(personalization);
        PprRanking {
            name: name.to_string(),
            personalized_entities: personalization.map(IndexMap::len).unwrap_or(0),
            top_entities: engine.get_top_entities(&run.scores, self.config.top_k),
            influence: engine.analyze_influence(&run.scores),
            iterations: run.iterations,
            converged: run.converged,
        }
    }
}

/// PageRank entities from the entity nodes of a document/entity graph.
///
/// The entity kind comes from a string `type` property, falling back to the
/// node kind.
pub fn entities_from_graph(graph: &GraphBuilder) -> IndexMap<String, EntityMeta> {
    graph
        .nodes()
        .filter(|node| node.is_entity())
        .map(|node| {
            let kind = node
                .get_property("type")
                .and_then(PropertyValue::as_string)
                .unwrap_or(node.kind.as_str());
            let mut meta = EntityMeta::new(node.label.clone(), kind);
            meta.properties = node.properties.clone();
            (node.id.clone(), meta)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeKind, NodeMetadata};

    fn sample_graph() -> GraphBuilder {
        let mut graph = GraphBuilder::new();
        graph.add_node("d1", NodeMetadata::document("Paper A"));
        graph.add_node("e1", NodeMetadata::entity("Neural Network").with_property("type", "concept"));
        graph.add_node("e2", NodeMetadata::entity("Neural Coding").with_property("type", "concept"));
        graph.add_node("e3", NodeMetadata::entity("Hebb").with_property("type", "person"));
        graph.add_edge("d1", "e1", 1.0, EdgeKind::Contains).unwrap();
        graph.add_edge("d1", "e2", 1.0, EdgeKind::Contains).unwrap();
        graph.add_edge("e1", "e2", 0.5, EdgeKind::Cooccurrence).unwrap();
        graph.add_edge("d1", "e3", 1.0, EdgeKind::Contains).unwrap();
        graph
    }

    #[test]
    fn test_analyze_writes_metrics() {
        let mut graph = sample_graph();
        let report = GraphAnalyzer::default().analyze(&mut graph);

        assert_eq!(report.topology.node_count, 4);
        assert_eq!(report.topology.edge_count, 4);
        assert_eq!(report.communities.len(), 1);
        assert_eq!(report.top_by_degree[0].id, "d1");
        assert_eq!(report.nodes.len(), 4);

        let d1 = graph.node("d1").unwrap();
        assert_eq!(d1.degree, 3);
        assert_eq!(d1.community, Some(0));
        // e1-e2 connected, e3 bridged to both
        assert_eq!(d1.betweenness, 2.0);
        assert!((d1.clustering_coefficient - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(report.clustering.connectivity_index, report.topology.density);
    }

    #[test]
    fn test_analyze_is_repeatable() {
        let mut graph = sample_graph();
        let analyzer = GraphAnalyzer::default();
        let first = analyzer.analyze(&mut graph);
        let second = analyzer.analyze(&mut graph);
        assert_eq!(first, second);
    }

    #[test]
    fn test_entities_from_graph() {
        let entities = entities_from_graph(&sample_graph());
        assert_eq!(entities.len(), 3);
        assert_eq!(entities["e1"].kind, "concept");
        assert_eq!(entities["e3"].kind, "person");
    }

    #[test]
    fn test_rank_runs_topics_and_groups() {
        let graph = sample_graph();
        let analyzer = GraphAnalyzer::default();
        let engine = analyzer
            .build_ppr_engine(&entities_from_graph(&graph), &[])
            .unwrap();

        let report = analyzer.rank(&engine, &[TopicQuery::new("coding", ["e2"])]);

        assert_eq!(report.global.name, "global");
        assert_eq!(report.topics.len(), 1);
        assert_eq!(report.topics[0].top_entities[0].id, "e2");
        assert_eq!(report.topics[0].personalized_entities, 1);
        let kinds: Vec<_> = report.kind_groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(kinds, vec!["concept", "person"]);
    }

    #[test]
    fn test_empty_graph_report() {
        let mut graph = GraphBuilder::new();
        let report = GraphAnalyzer::default().analyze(&mut graph);
        assert_eq!(report.topology.density, 0.0);
        assert_eq!(report.clustering.average_clustering, 0.0);
        assert!(report.communities.is_empty());
        assert!(report.top_by_degree.is_empty());

        let ranking = GraphAnalyzer::default().rank(&PageRankEngine::default(), &[]);
        assert!(ranking.global.top_entities.is_empty());
        assert!(ranking.kind_groups.is_empty());
    }
}
