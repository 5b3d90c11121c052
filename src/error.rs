//! Error types
//!
//! Analytics never fail on well-typed input; only malformed records and
//! configuration problems surface as errors.

use thiserror::Error;

/// Malformed node or edge input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid id in {field}: expected a string, got {found}")]
    InvalidId { field: &'static str, found: String },

    #[error("Invalid weight for edge {source_id} -> {target_id}: {found}")]
    InvalidWeight {
        source_id: String,
        target_id: String,
        found: String,
    },

    #[error("Negative weight {weight} for edge {source_id} -> {target_id}")]
    NegativeWeight {
        source_id: String,
        target_id: String,
        weight: f64,
    },

    #[error("Unknown node kind: {0}")]
    UnknownNodeKind(String),

    #[error("Unknown edge kind: {0}")]
    UnknownEdgeKind(String),

    #[error("Invalid edge: endpoint {0} does not exist")]
    UnknownEndpoint(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-level error
#[derive(Error, Debug)]
pub enum RagnoError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RagnoResult<T> = Result<T, RagnoError>;
