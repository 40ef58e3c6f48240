//! Run specification validation logic
//!
//! Validates run specifications for correctness before any training starts.

use super::error::ValidationError;
use crate::config::schema::{EarlyStoppingSpec, ModelSpec, RunSpec};
use crate::optim::ScheduleConfig;
use std::collections::HashSet;

/// Optimizers `build_optimizer` can construct
pub const AVAILABLE_OPTIMIZERS: [&str; 1] = ["adam"];

/// Optimizer parameters read from `optimizer_params`
pub(crate) const PARAM_BETA1: &str = "beta1";
pub(crate) const PARAM_BETA2: &str = "beta2";
pub(crate) const PARAM_EPSILON: &str = "epsilon";

/// Validate a run specification
///
/// Checks:
/// - Numeric values are in valid ranges
/// - The schedule parameters form a valid warmup + cosine schedule
/// - The optimizer is one that can be built
/// - Model and class label settings are consistent
pub fn validate_config(spec: &RunSpec) -> Result<(), ValidationError> {
    if !spec.learning_rate.is_finite() || spec.learning_rate <= 0.0 {
        return Err(ValidationError::InvalidLearningRate(spec.learning_rate));
    }

    if spec.epochs <= 0 {
        return Err(ValidationError::InvalidEpochs(spec.epochs));
    }

    // Warmup must end before the last epoch
    ScheduleConfig::from_signed(spec.learning_rate, spec.epochs, spec.warmup_steps)?;

    if spec.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(spec.batch_size));
    }

    if !AVAILABLE_OPTIMIZERS.contains(&spec.optimizer.to_lowercase().as_str()) {
        return Err(ValidationError::InvalidOptimizer(spec.optimizer.clone()));
    }

    validate_optimizer_params(spec)?;

    if let Some(clipnorm) = spec.global_clipnorm {
        if !clipnorm.is_finite() || clipnorm <= 0.0 {
            return Err(ValidationError::InvalidGlobalClipnorm(clipnorm));
        }
    }

    if !(0.0..1.0).contains(&spec.label_smoothing) {
        return Err(ValidationError::LabelSmoothing(spec.label_smoothing));
    }

    validate_early_stopping(&spec.early_stopping)?;
    validate_model(&spec.model)?;
    validate_class_labels(&spec.class_labels)?;

    Ok(())
}

fn validate_optimizer_params(spec: &RunSpec) -> Result<(), ValidationError> {
    for (name, value) in &spec.optimizer_params {
        let ok = match name.as_str() {
            PARAM_BETA1 | PARAM_BETA2 => value.as_f64().is_some_and(|b| (0.0..1.0).contains(&b)),
            PARAM_EPSILON => value.as_f64().is_some_and(|e| e.is_finite() && e > 0.0),
            _ => false,
        };
        if !ok {
            return Err(ValidationError::InvalidOptimizerParam {
                name: name.clone(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_early_stopping(es: &EarlyStoppingSpec) -> Result<(), ValidationError> {
    if es.monitor.trim().is_empty() {
        return Err(ValidationError::EmptyMonitor);
    }
    if !es.min_delta.is_finite() || es.min_delta < 0.0 {
        return Err(ValidationError::InvalidMinDelta(es.min_delta));
    }
    Ok(())
}

fn validate_model(model: &ModelSpec) -> Result<(), ValidationError> {
    let sizes = [
        ("num_layers", model.num_layers),
        ("embed_layer_size", model.embed_layer_size),
        ("fc_layer_size", model.fc_layer_size),
        ("num_heads", model.num_heads),
    ];
    for (field, value) in sizes {
        if value == 0 {
            return Err(ValidationError::InvalidModelSize { field, value });
        }
    }

    if model.embed_layer_size % model.num_heads != 0 {
        return Err(ValidationError::HeadsDoNotDivideEmbedding {
            embed: model.embed_layer_size,
            heads: model.num_heads,
        });
    }

    for (field, value) in [("dropout", model.dropout), ("attention_dropout", model.attention_dropout)] {
        if !(0.0..1.0).contains(&value) {
            return Err(ValidationError::InvalidDropout { field, value });
        }
    }

    Ok(())
}

fn validate_class_labels(labels: &[String]) -> Result<(), ValidationError> {
    if labels.is_empty() {
        return Err(ValidationError::EmptyClassLabels);
    }
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ValidationError::DuplicateClassLabel(label.clone()));
        }
    }
    Ok(())
}
