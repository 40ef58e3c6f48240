//! Training loop configuration

use crate::train::callback::MonitorMode;
use crate::train::metrics::VAL_ACCURACY;

/// Configuration for [`Trainer`](crate::train::Trainer)
///
/// `monitor` and `mode` select the metric used to report the best epoch in
/// the [`TrainResult`](crate::train::TrainResult).
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Maximum number of epochs to run
    pub max_epochs: usize,
    /// Metric used to pick the best epoch
    pub monitor: String,
    /// Whether `monitor` improves upwards or downwards
    pub mode: MonitorMode,
}

impl TrainConfig {
    /// Configuration for `max_epochs` epochs, tracking validation accuracy
    pub fn new(max_epochs: usize) -> Self {
        Self { max_epochs, ..Self::default() }
    }

    /// Track a different metric for the best epoch
    pub fn with_monitor(mut self, metric: impl Into<String>, mode: MonitorMode) -> Self {
        self.monitor = metric.into();
        self.mode = mode;
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self { max_epochs: 100, monitor: VAL_ACCURACY.to_string(), mode: MonitorMode::Max }
    }
}
