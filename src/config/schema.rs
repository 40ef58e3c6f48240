//! YAML schema for a training run specification

use crate::train::MonitorMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Activity classes recognised by the sequence classifier, in label-index order
pub const CLASS_LABELS: [&str; 18] = [
    "Stand",
    "Sit",
    "Talk-sit",
    "Talk-stand",
    "Stand-sit",
    "Lay",
    "Lay-stand",
    "Pick",
    "Jump",
    "Push-up",
    "Sit-up",
    "Walk",
    "Walk-backward",
    "Walk-circle",
    "Run",
    "Stair-up",
    "Stair-down",
    "Table-tennis",
];

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

/// Hyperparameters of one training run
///
/// Step counts are signed so that negative values from hand-edited files
/// reach validation and get a precise error instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    /// Peak learning rate of the warmup + cosine schedule
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// Number of epochs; also the length of the schedule
    #[serde(default = "default_epochs")]
    pub epochs: i64,

    /// Epochs of linear warmup
    #[serde(default)]
    pub warmup_steps: i64,

    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Optimizer name (only "adam" is available)
    #[serde(default = "default_optimizer")]
    pub optimizer: String,

    /// Extra optimizer parameters (beta1, beta2, epsilon)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub optimizer_params: HashMap<String, serde_json::Value>,

    /// Clip all gradients to this joint L2 norm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_clipnorm: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub amsgrad: bool,

    /// Label smoothing for the cross-entropy loss, in [0, 1)
    #[serde(default)]
    pub label_smoothing: f64,

    #[serde(default)]
    pub early_stopping: EarlyStoppingSpec,

    #[serde(default)]
    pub model: ModelSpec,

    /// Class names in label-index order
    #[serde(default = "default_class_labels")]
    pub class_labels: Vec<String>,
}

/// Early stopping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarlyStoppingSpec {
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub enabled: bool,

    /// Metric to monitor
    #[serde(default = "default_monitor")]
    pub monitor: String,

    #[serde(default = "default_mode")]
    pub mode: MonitorMode,

    /// Minimum change that counts as an improvement
    #[serde(default = "default_min_delta")]
    pub min_delta: f64,

    /// Epochs without improvement before stopping
    #[serde(default = "default_patience")]
    pub patience: usize,
}

/// Sequence classifier architecture, carried through to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    #[serde(default = "default_num_layers")]
    pub num_layers: usize,

    /// Width of the token embedding
    #[serde(default = "default_embed_layer_size")]
    pub embed_layer_size: usize,

    /// Hidden width of the feed-forward block
    #[serde(default = "default_fc_layer_size")]
    pub fc_layer_size: usize,

    #[serde(default = "default_num_heads")]
    pub num_heads: usize,

    #[serde(default = "default_dropout")]
    pub dropout: f64,

    #[serde(default = "default_dropout")]
    pub attention_dropout: f64,
}

fn default_learning_rate() -> f64 {
    0.001
}

fn default_epochs() -> i64 {
    100
}

fn default_batch_size() -> usize {
    64
}

fn default_optimizer() -> String {
    "adam".to_string()
}

fn default_class_labels() -> Vec<String> {
    CLASS_LABELS.iter().map(ToString::to_string).collect()
}

fn default_true() -> bool {
    true
}

fn default_monitor() -> String {
    crate::train::VAL_ACCURACY.to_string()
}

fn default_mode() -> MonitorMode {
    MonitorMode::Max
}

fn default_min_delta() -> f64 {
    0.001
}

fn default_patience() -> usize {
    5
}

fn default_num_layers() -> usize {
    4
}

fn default_embed_layer_size() -> usize {
    128
}

fn default_fc_layer_size() -> usize {
    256
}

fn default_num_heads() -> usize {
    8
}

fn default_dropout() -> f64 {
    0.1
}

impl Default for RunSpec {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            epochs: default_epochs(),
            warmup_steps: 0,
            batch_size: default_batch_size(),
            optimizer: default_optimizer(),
            optimizer_params: HashMap::new(),
            global_clipnorm: None,
            amsgrad: false,
            label_smoothing: 0.0,
            early_stopping: EarlyStoppingSpec::default(),
            model: ModelSpec::default(),
            class_labels: default_class_labels(),
        }
    }
}

impl Default for EarlyStoppingSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            monitor: default_monitor(),
            mode: default_mode(),
            min_delta: default_min_delta(),
            patience: default_patience(),
        }
    }
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            num_layers: default_num_layers(),
            embed_layer_size: default_embed_layer_size(),
            fc_layer_size: default_fc_layer_size(),
            num_heads: default_num_heads(),
            dropout: default_dropout(),
            attention_dropout: default_dropout(),
        }
    }
}

impl RunSpec {
    /// Number of output classes
    pub fn num_classes(&self) -> usize {
        self.class_labels.len()
    }
}
