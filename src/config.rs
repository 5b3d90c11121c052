//! Analysis configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes. YAML and JSON are both accepted.

use crate::algo::EdgePolicy;
use crate::error::{RagnoResult, ValidationError};
use ragno_graph_algorithms::PageRankConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Top-level configuration for an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Length of every ranked list in the report
    pub top_k: usize,
    /// Reject edges whose endpoints were never added as nodes
    pub strict_endpoints: bool,
    pub pagerank: PageRankSettings,
    pub ppr_graph: PprGraphSettings,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            top_k: 10,
            strict_endpoints: false,
            pagerank: PageRankSettings::default(),
            ppr_graph: PprGraphSettings::default(),
        }
    }
}

/// Power-iteration parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankSettings {
    /// Damping factor
    pub alpha: f64,
    /// Convergence threshold on the largest per-node change
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for PageRankSettings {
    fn default() -> Self {
        PageRankSettings {
            alpha: 0.85,
            epsilon: 1e-6,
            max_iterations: 100,
        }
    }
}

impl PageRankSettings {
    /// `alpha` must lie in `[0, 1]` and `epsilon` must be positive
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ValidationError::InvalidConfig(format!(
                "pagerank.alpha must be within [0, 1], got {}",
                self.alpha
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ValidationError::InvalidConfig(format!(
                "pagerank.epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

impl From<PageRankSettings> for PageRankConfig {
    fn from(settings: PageRankSettings) -> Self {
        PageRankConfig {
            damping_factor: settings.alpha,
            max_iterations: settings.max_iterations,
            tolerance: settings.epsilon,
        }
    }
}

/// How the PageRank graph is built from entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PprGraphSettings {
    pub policy: EdgePolicy,
    /// Scale applied to the label-token Jaccard score
    pub similarity_weight: f64,
    /// Shorter label tokens are ignored
    pub min_token_len: usize,
    pub cross_domain_weight: f64,
    /// Curated concept pairs linked across domains
    pub cross_domain_pairs: Vec<(String, String)>,
    /// Weight of same-kind edges
    pub type_group_weight: f64,
}

impl Default for PprGraphSettings {
    fn default() -> Self {
        PprGraphSettings {
            policy: EdgePolicy::default(),
            similarity_weight: 0.5,
            min_token_len: 3,
            cross_domain_weight: 0.7,
            cross_domain_pairs: Vec::new(),
            type_group_weight: 0.1,
        }
    }
}

impl PprGraphSettings {
    /// Every edge weight must be finite and non-negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = [
            ("similarity_weight", self.similarity_weight),
            ("cross_domain_weight", self.cross_domain_weight),
            ("type_group_weight", self.type_group_weight),
        ];
        for (name, weight) in weights {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(ValidationError::InvalidConfig(format!(
                    "ppr_graph.{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}

impl AnalysisConfig {
    pub fn from_yaml_str(text: &str) -> RagnoResult<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> RagnoResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pagerank.validate()?;
        self.ppr_graph.validate()
    }

    /// Load from a file; `.json` is read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> RagnoResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_yaml_str(&text)?,
        };
        info!("Loaded analysis config from {:?}", path);
        Ok(config)
    }

    pub fn pagerank_config(&self) -> PageRankConfig {
        self.pagerank.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RagnoError;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_k, 10);
        assert!(!config.strict_endpoints);
        assert_eq!(config.pagerank_config(), PageRankConfig::default());
        assert_eq!(config.ppr_graph.policy, EdgePolicy::LabelSimilarity);
    }

    #[test]
    fn test_partial_yaml() {
        let config = AnalysisConfig::from_yaml_str(
            "top_k: 5\npagerank:\n  alpha: 0.9\nppr_graph:\n  policy: combined\n  cross_domain_pairs:\n    - [neuron, graph]\n",
        )
        .unwrap();

        assert_eq!(config.top_k, 5);
        assert_eq!(config.pagerank.alpha, 0.9);
        assert_eq!(config.pagerank.max_iterations, 100);
        assert_eq!(config.ppr_graph.policy, EdgePolicy::Combined);
        assert_eq!(
            config.ppr_graph.cross_domain_pairs,
            vec![("neuron".to_string(), "graph".to_string())]
        );
    }

    #[test]
    fn test_json() {
        let config = AnalysisConfig::from_json_str(r#"{"strict_endpoints": true}"#).unwrap();
        assert!(config.strict_endpoints);
        assert_eq!(config.top_k, 10);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        for text in [
            "pagerank:\n  alpha: 1.5\n",
            "pagerank:\n  alpha: -0.1\n",
            "pagerank:\n  epsilon: 0.0\n",
            "ppr_graph:\n  type_group_weight: -2.0\n",
            "ppr_graph:\n  similarity_weight: -0.5\n",
            "ppr_graph:\n  cross_domain_weight: .nan\n",
        ] {
            assert!(
                matches!(
                    AnalysisConfig::from_yaml_str(text),
                    Err(RagnoError::Validation(ValidationError::InvalidConfig(_)))
                ),
                "accepted {:?}",
                text
            );
        }
        assert!(AnalysisConfig::from_json_str(r#"{"pagerank": {"alpha": 2.0}}"#).is_err());
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_policy() {
        assert!(AnalysisConfig::from_yaml_str("ppr_graph:\n  policy: random\n").is_err());
    }
}
