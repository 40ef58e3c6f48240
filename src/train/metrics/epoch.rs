//! Named scalar metrics for one epoch

use serde::Serialize;
use std::collections::BTreeMap;

/// Training loss
pub const LOSS: &str = "loss";
/// Training accuracy
pub const ACCURACY: &str = "accuracy";
/// Validation loss
pub const VAL_LOSS: &str = "val_loss";
/// Validation accuracy
pub const VAL_ACCURACY: &str = "val_accuracy";

/// Metrics the model reports at the end of an epoch, keyed by name
///
/// # Example
///
/// ```
/// use warmcos::train::EpochMetrics;
///
/// let metrics = EpochMetrics::new().with("loss", 0.42).with("val_accuracy", 0.91);
/// assert_eq!(metrics.get("val_accuracy"), Some(0.91));
/// assert_eq!(metrics.get("accuracy"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EpochMetrics {
    values: BTreeMap<String, f64>,
}

impl EpochMetrics {
    /// Empty metric set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or overwrite a metric
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Look up a metric by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Training loss, if reported
    pub fn loss(&self) -> Option<f64> {
        self.get(LOSS)
    }

    /// Metrics in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for EpochMetrics {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}
