//! Validation error types
//!
//! Defines all validation error variants for run specifications.

use crate::optim::ConfigurationError;

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid learning rate: {0} (must be finite and > 0.0)")]
    InvalidLearningRate(f64),

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(i64),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid schedule: {0}")]
    Schedule(#[from] ConfigurationError),

    #[error("Invalid optimizer: {0} (must be one of: adam)")]
    InvalidOptimizer(String),

    #[error("Invalid optimizer parameter {name}: {value}")]
    InvalidOptimizerParam { name: String, value: String },

    #[error("Invalid global clip norm: {0} (must be > 0.0)")]
    InvalidGlobalClipnorm(f64),

    #[error("Invalid label smoothing: {0} (must be in [0.0, 1.0))")]
    LabelSmoothing(f64),

    #[error("Early stopping monitor cannot be empty")]
    EmptyMonitor,

    #[error("Invalid early stopping min_delta: {0} (must be >= 0.0)")]
    InvalidMinDelta(f64),

    #[error("Invalid model {field}: {value} (must be > 0)")]
    InvalidModelSize { field: &'static str, value: usize },

    #[error("Embedding size {embed} is not divisible by {heads} attention heads")]
    HeadsDoNotDivideEmbedding { embed: usize, heads: usize },

    #[error("Invalid {field}: {value} (must be in [0.0, 1.0))")]
    InvalidDropout { field: &'static str, value: f64 },

    #[error("Class labels cannot be empty")]
    EmptyClassLabels,

    #[error("Duplicate class label: {0}")]
    DuplicateClassLabel(String),
}
