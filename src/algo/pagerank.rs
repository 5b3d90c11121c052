//! Personalized PageRank engine
//!
//! The engine owns its own adjacency map and entity metadata; it is fed by a
//! graph built separately from the document/entity graph (see
//! [`super::ppr_graph`]). Runs only read the adjacency, so any number of runs
//! can share one engine.

use super::GraphView;
use crate::error::ValidationError;
use crate::graph::{validate_weight, PropertyMap};
use indexmap::IndexMap;
use ragno_graph_algorithms::{
    personalized_page_rank, score_distribution, top_k_indices, PageRankConfig, ScoreDistribution,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Mean, spread, extremes and entropy of a score map
pub type InfluenceStats = ScoreDistribution;

/// One adjacency entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedNeighbor {
    pub neighbor: String,
    pub weight: f64,
}

/// Metadata of an entity known to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMeta {
    pub label: String,
    /// Free-form type tag, used for type grouping
    pub kind: String,
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
}

impl EntityMeta {
    pub fn new(label: impl Into<String>, kind: impl Into<String>) -> Self {
        EntityMeta {
            label: label.into(),
            kind: kind.into(),
            properties: PropertyMap::new(),
        }
    }
}

/// Result of one PPR run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PprRun {
    /// Score per node, in node insertion order
    pub scores: IndexMap<String, f64>,
    pub iterations: usize,
    pub converged: bool,
    pub max_delta: f64,
}

/// An entry of a ranked entity list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntity {
    pub id: String,
    pub score: f64,
    /// `None` for nodes that only appear as edge endpoints
    pub metadata: Option<EntityMeta>,
}

/// Personalized PageRank over a symmetric weighted adjacency map
#[derive(Debug, Clone, Default)]
pub struct PageRankEngine {
    config: PageRankConfig,
    adjacency: IndexMap<String, Vec<WeightedNeighbor>>,
    entities: IndexMap<String, EntityMeta>,
    edge_count: usize,
}

impl PageRankEngine {
    pub fn new(config: PageRankConfig) -> Self {
        PageRankEngine {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> PageRankConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PageRankConfig) {
        self.config = config;
    }

    /// Register entity metadata; the entity becomes a node even without edges
    pub fn add_entity(&mut self, id: impl Into<String>, meta: EntityMeta) {
        let id = id.into();
        self.adjacency.entry(id.clone()).or_default();
        self.entities.insert(id, meta);
    }

    /// Add `u -> v` and `v -> u` with the same weight. Repeats are kept.
    ///
    /// Negative and non-finite weights are rejected and leave the graph
    /// unchanged.
    pub fn add_edge(
        &mut self,
        u: impl Into<String>,
        v: impl Into<String>,
        weight: f64,
    ) -> Result<(), ValidationError> {
        let u = u.into();
        let v = v.into();
        validate_weight(&u, &v, weight)?;
        self.adjacency.entry(u.clone()).or_default().push(WeightedNeighbor {
            neighbor: v.clone(),
            weight,
        });
        self.adjacency.entry(v).or_default().push(WeightedNeighbor {
            neighbor: u,
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }

    pub fn neighbors(&self, id: &str) -> &[WeightedNeighbor] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entity(&self, id: &str) -> Option<&EntityMeta> {
        self.entities.get(id)
    }

    pub fn entities(&self) -> &IndexMap<String, EntityMeta> {
        &self.entities
    }

    /// Node ids in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &String> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Dense view of the adjacency map
    pub fn view(&self) -> GraphView {
        let rows = self
            .adjacency
            .values()
            .map(|row| {
                row.iter()
                    .filter_map(|n| {
                        let idx = self.adjacency.get_index_of(n.neighbor.as_str())?;
                        Some((idx, n.weight))
                    })
                    .collect()
            })
            .collect();
        GraphView::from_adjacency_list(self.adjacency.keys().cloned().collect(), rows, self.edge_count)
    }

    /// Run personalized PageRank.
    ///
    /// Without a personalization vector the restart mass is uniform. A given
    /// vector is normalized to sum 1 unless its sum is 0; ids it names that
    /// are not in the graph keep their share of the normalization but receive
    /// no score. Running out of iterations is not an error: the last scores
    /// are returned with `converged = false`.
    pub fn calculate_ppr(&self, personalization: Option<&IndexMap<String, f64>>) -> PprRun {
        let view = self.view();
        if view.node_count == 0 {
            return PprRun {
                scores: IndexMap::new(),
                iterations: 0,
                converged: true,
                max_delta: 0.0,
            };
        }

        let restart = personalization.map(|p| {
            let sum: f64 = p.values().sum();
            let scale = if sum != 0.0 { 1.0 / sum } else { 1.0 };
            view.index_to_node
                .iter()
                .map(|id| p.get(id.as_str()).copied().unwrap_or(0.0) * scale)
                .collect::<Vec<f64>>()
        });

        let result = personalized_page_rank(&view, restart.as_deref(), self.config);

        if result.converged {
            debug!(
                "PPR converged after {} iterations (delta {:.2e})",
                result.iterations, result.max_delta
            );
        } else {
            info!(
                "PPR stopped at {} iterations without converging (delta {:.2e}); using last scores",
                result.iterations, result.max_delta
            );
        }

        PprRun {
            scores: view.index_to_node.into_iter().zip(result.scores).collect(),
            iterations: result.iterations,
            converged: result.converged,
            max_delta: result.max_delta,
        }
    }

    /// Top `k` ids by score; ties keep the order of `scores`
    pub fn get_top_entities(&self, scores: &IndexMap<String, f64>, k: usize) -> Vec<RankedEntity> {
        let values: Vec<f64> = scores.values().copied().collect();
        top_k_indices(&values, k)
            .into_iter()
            .filter_map(|idx| scores.get_index(idx))
            .map(|(id, &score)| RankedEntity {
                id: id.clone(),
                score,
                metadata: self.entities.get(id).cloned(),
            })
            .collect()
    }

    /// Uniform `1/|topic|` mass on every topic id with known metadata.
    ///
    /// Unknown ids are skipped but still count in the denominator, so the
    /// result may sum to less than 1 until [`PageRankEngine::calculate_ppr`]
    /// normalizes it.
    pub fn create_topic_personalization<S: AsRef<str>>(&self, topic_ids: &[S]) -> IndexMap<String, f64> {
        let mut personalization = IndexMap::new();
        if topic_ids.is_empty() {
            return personalization;
        }
        let mass = 1.0 / topic_ids.len() as f64;
        for id in topic_ids {
            let id = id.as_ref();
            if self.entities.contains_key(id) {
                personalization.insert(id.to_string(), mass);
            }
        }
        personalization
    }

    /// Distribution statistics of a score map
    pub fn analyze_influence(&self, scores: &IndexMap<String, f64>) -> InfluenceStats {
        let values: Vec<f64> = scores.values().copied().collect();
        score_distribution(&values)
    }
}
