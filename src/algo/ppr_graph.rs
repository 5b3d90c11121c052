//! Edge construction for the PageRank graph
//!
//! The PageRank graph is independent of the document/entity graph. It is
//! assembled from entity metadata under one of several policies, all feeding
//! the same [`PageRankEngine`].

use super::pagerank::{EntityMeta, PageRankEngine};
use crate::config::PprGraphSettings;
use crate::error::ValidationError;
use indexmap::IndexMap;
use ragno_graph_algorithms::PageRankConfig;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How PageRank edges are derived from entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Label token overlap plus curated cross-domain pairs
    #[default]
    LabelSimilarity,
    /// Weak edges between entities of the same kind
    TypeGrouping,
    /// Externally counted co-occurrences, count used as weight
    Cooccurrence,
    /// Label similarity followed by type grouping
    Combined,
}

/// Lowercased alphanumeric tokens of at least `min_len` characters
pub fn tokenize_label(label: &str, min_len: usize) -> FxHashSet<String> {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= min_len)
        .map(str::to_lowercase)
        .collect()
}

/// Entity ids grouped by kind, groups and members in insertion order
pub fn group_by_kind(entities: &IndexMap<String, EntityMeta>) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for (id, meta) in entities {
        groups.entry(meta.kind.clone()).or_default().push(id.clone());
    }
    groups
}

/// Populates a [`PageRankEngine`] according to [`PprGraphSettings`]
pub struct PprGraphBuilder<'a> {
    settings: &'a PprGraphSettings,
}

impl<'a> PprGraphBuilder<'a> {
    pub fn new(settings: &'a PprGraphSettings) -> Self {
        PprGraphBuilder { settings }
    }

    /// Build an engine holding `entities` and the edges the policy derives.
    ///
    /// `cooccurrences` is only read by the co-occurrence policy. Fails when a
    /// configured weight is negative or non-finite.
    pub fn build(
        &self,
        entities: &IndexMap<String, EntityMeta>,
        cooccurrences: &[(String, String, f64)],
        config: PageRankConfig,
    ) -> Result<PageRankEngine, ValidationError> {
        self.settings.validate()?;
        let mut engine = PageRankEngine::new(config);
        for (id, meta) in entities {
            engine.add_entity(id.clone(), meta.clone());
        }

        match self.settings.policy {
            EdgePolicy::LabelSimilarity => {
                self.add_label_similarity_edges(&mut engine, entities)?;
                self.add_cross_domain_edges(&mut engine, entities)?;
            }
            EdgePolicy::TypeGrouping => {
                self.add_type_group_edges(&mut engine, entities)?;
            }
            EdgePolicy::Cooccurrence => {
                self.add_cooccurrence_edges(&mut engine, cooccurrences)?;
            }
            EdgePolicy::Combined => {
                self.add_label_similarity_edges(&mut engine, entities)?;
                self.add_cross_domain_edges(&mut engine, entities)?;
                self.add_type_group_edges(&mut engine, entities)?;
            }
        }

        info!(
            "PPR graph ({:?}): {} nodes, {} edges",
            self.settings.policy,
            engine.node_count(),
            engine.edge_count()
        );
        Ok(engine)
    }

    /// Link every entity pair whose labels share a token.
    ///
    /// Weight is `similarity_weight * |A∩B| / |A∪B|` over the token sets.
    pub fn add_label_similarity_edges(
        &self,
        engine: &mut PageRankEngine,
        entities: &IndexMap<String, EntityMeta>,
    ) -> Result<usize, ValidationError> {
        let tokens: Vec<(&String, FxHashSet<String>)> = entities
            .iter()
            .map(|(id, meta)| (id, tokenize_label(&meta.label, self.settings.min_token_len)))
            .collect();

        let mut added = 0;
        for (i, (a, a_tokens)) in tokens.iter().enumerate() {
            for (b, b_tokens) in &tokens[i + 1..] {
                let shared = a_tokens.intersection(b_tokens).count();
                if shared == 0 {
                    continue;
                }
                let union = a_tokens.len() + b_tokens.len() - shared;
                let weight = self.settings.similarity_weight * shared as f64 / union as f64;
                engine.add_edge(a.as_str(), b.as_str(), weight)?;
                added += 1;
            }
        }
        debug!("Label similarity added {} edges", added);
        Ok(added)
    }

    /// Link entities matching both sides of a curated concept pair.
    ///
    /// A side matches every entity whose label contains it, case-insensitively.
    pub fn add_cross_domain_edges(
        &self,
        engine: &mut PageRankEngine,
        entities: &IndexMap<String, EntityMeta>,
    ) -> Result<usize, ValidationError> {
        let matching = |concept: &str| -> Vec<&String> {
            let concept = concept.to_lowercase();
            entities
                .iter()
                .filter(|(_, meta)| meta.label.to_lowercase().contains(&concept))
                .map(|(id, _)| id)
                .collect()
        };

        let mut added = 0;
        for (left, right) in &self.settings.cross_domain_pairs {
            let lefts = matching(left);
            let rights = matching(right);
            for a in &lefts {
                for b in &rights {
                    if a == b {
                        continue;
                    }
                    engine.add_edge(a.as_str(), b.as_str(), self.settings.cross_domain_weight)?;
                    added += 1;
                }
            }
        }
        debug!("Cross-domain pairs added {} edges", added);
        Ok(added)
    }

    /// Link every pair of entities that share a kind
    pub fn add_type_group_edges(
        &self,
        engine: &mut PageRankEngine,
        entities: &IndexMap<String, EntityMeta>,
    ) -> Result<usize, ValidationError> {
        let mut added = 0;
        for members in group_by_kind(entities).values() {
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    engine.add_edge(a.as_str(), b.as_str(), self.settings.type_group_weight)?;
                    added += 1;
                }
            }
        }
        debug!("Type grouping added {} edges", added);
        Ok(added)
    }

    /// One edge per counted pair, weighted by the raw count
    pub fn add_cooccurrence_edges(
        &self,
        engine: &mut PageRankEngine,
        cooccurrences: &[(String, String, f64)],
    ) -> Result<usize, ValidationError> {
        let mut added = 0;
        for (a, b, count) in cooccurrences {
            if !count.is_finite() || *count <= 0.0 {
                debug!("Skipping co-occurrence {} - {} with count {}", a, b, count);
                continue;
            }
            engine.add_edge(a.as_str(), b.as_str(), *count)?;
            added += 1;
        }
        debug!("Co-occurrence added {} edges", added);
        Ok(added)
    }
}
