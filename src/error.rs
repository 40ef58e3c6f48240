//! Crate-level error type

use crate::config::ValidationError;
use crate::optim::ConfigurationError;
use thiserror::Error;

/// Result type alias for warmcos operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced before or while setting up a training run
#[derive(Debug, Error)]
pub enum Error {
    /// Learning rate schedule parameters are inconsistent
    #[error("Invalid schedule: {0}")]
    Schedule(#[from] ConfigurationError),

    /// Run specification failed validation
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Optimizer name is not one this crate can build
    #[error("The optimizer '{name}' is not in the list of available optimizers: {available}")]
    UnknownOptimizer { name: String, available: String },

    /// Logits and labels do not line up
    #[error("Shape mismatch: {0}")]
    Shape(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
