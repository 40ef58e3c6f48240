//! Training result types

use crate::train::callback::MonitorMode;
use crate::train::metrics::EpochMetrics;
use serde::Serialize;

/// Epoch with the best value of the monitored metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestEpoch {
    pub epoch: usize,
    pub value: f64,
}

/// Result of a training run
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrainResult {
    /// Number of epochs the runner was asked to train
    pub epochs_run: usize,
    /// Whether a callback stopped training before `max_epochs`
    pub stopped_early: bool,
    /// Learning rate each epoch ran with
    pub lr_history: Vec<(usize, f64)>,
    /// Metrics reported for each epoch that ran, in order
    pub history: Vec<(usize, EpochMetrics)>,
    /// Best epoch for the configured monitor metric
    pub best: Option<BestEpoch>,
    /// Optimizer learning rate when training ended
    pub final_lr: f64,
    /// Total training time in seconds
    pub elapsed_secs: f64,
}

impl TrainResult {
    /// Record an epoch that ran at `lr`, updating the best epoch for `monitor`
    pub(crate) fn record_epoch(
        &mut self,
        epoch: usize,
        lr: f64,
        metrics: EpochMetrics,
        monitor: &str,
        mode: MonitorMode,
    ) {
        if let Some(value) = metrics.get(monitor) {
            let best = self.best.map_or(mode.worst(), |b| b.value);
            if mode.improves(value, best, 0.0) {
                self.best = Some(BestEpoch { epoch, value });
            }
        }
        self.epochs_run += 1;
        self.lr_history.push((epoch, lr));
        self.history.push((epoch, metrics));
    }

    /// Metrics of the last epoch that ran
    pub fn last_metrics(&self) -> Option<&EpochMetrics> {
        self.history.last().map(|(_, m)| m)
    }
}
