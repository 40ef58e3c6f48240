//! Early stopping callback to halt training when a monitored metric plateaus

use super::traits::{CallbackAction, CallbackContext, TrainerCallback};
use crate::train::metrics::LOSS;
use serde::{Deserialize, Serialize};

/// Direction in which a monitored metric improves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorMode {
    /// Lower is better (losses)
    #[default]
    Min,
    /// Higher is better (accuracies)
    Max,
}

impl MonitorMode {
    /// Whether `value` beats `best` by more than `min_delta`
    pub fn improves(self, value: f64, best: f64, min_delta: f64) -> bool {
        match self {
            MonitorMode::Min => value < best - min_delta,
            MonitorMode::Max => value > best + min_delta,
        }
    }

    /// Starting value that any finite metric improves on
    pub fn worst(self) -> f64 {
        match self {
            MonitorMode::Min => f64::INFINITY,
            MonitorMode::Max => f64::NEG_INFINITY,
        }
    }
}

impl std::fmt::Display for MonitorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorMode::Min => write!(f, "min"),
            MonitorMode::Max => write!(f, "max"),
        }
    }
}

/// Early stopping callback to halt training when a metric plateaus
///
/// Monitors a named metric and stops training once `patience` consecutive
/// epochs pass without an improvement larger than `min_delta`. Epochs that do
/// not report the metric are ignored.
///
/// # Example
///
/// ```rust
/// use warmcos::train::callback::{EarlyStopping, MonitorMode};
///
/// // Stop if validation accuracy does not rise by 0.001 for 5 epochs
/// let early_stop = EarlyStopping::new(5, 0.001).monitor("val_accuracy", MonitorMode::Max);
/// assert_eq!(early_stop.monitored(), "val_accuracy");
/// ```
#[derive(Clone, Debug)]
pub struct EarlyStopping {
    /// Number of epochs to wait for improvement
    patience: usize,
    /// Minimum improvement to reset patience
    min_delta: f64,
    /// Metric name to monitor
    monitor: String,
    mode: MonitorMode,
    /// Best value seen so far
    best: f64,
    best_epoch: Option<usize>,
    /// Epochs without improvement
    pub(crate) wait: usize,
    stopped_epoch: Option<usize>,
}

impl EarlyStopping {
    /// Create early stopping on training loss
    pub fn new(patience: usize, min_delta: f64) -> Self {
        let mode = MonitorMode::Min;
        Self {
            patience,
            min_delta: min_delta.abs(),
            monitor: LOSS.to_string(),
            mode,
            best: mode.worst(),
            best_epoch: None,
            wait: 0,
            stopped_epoch: None,
        }
    }

    /// Monitor a different metric
    pub fn monitor(mut self, metric: impl Into<String>, mode: MonitorMode) -> Self {
        self.monitor = metric.into();
        self.mode = mode;
        self.best = mode.worst();
        self
    }

    /// Name of the monitored metric
    pub fn monitored(&self) -> &str {
        &self.monitor
    }

    pub fn mode(&self) -> MonitorMode {
        self.mode
    }

    pub fn patience(&self) -> usize {
        self.patience
    }

    pub fn min_delta(&self) -> f64 {
        self.min_delta
    }

    /// Best monitored value and the epoch it was seen
    pub fn best(&self) -> Option<(usize, f64)> {
        self.best_epoch.map(|epoch| (epoch, self.best))
    }

    /// Epoch at which training was stopped, if it was
    pub fn stopped_epoch(&self) -> Option<usize> {
        self.stopped_epoch
    }

    /// Reset internal state
    pub fn reset(&mut self) {
        self.best = self.mode.worst();
        self.best_epoch = None;
        self.wait = 0;
        self.stopped_epoch = None;
    }

    /// Record `value` for `epoch`; returns whether it improved
    fn check_improvement(&mut self, epoch: usize, value: f64) -> bool {
        if self.mode.improves(value, self.best, self.min_delta) {
            self.best = value;
            self.best_epoch = Some(epoch);
            self.wait = 0;
            true
        } else {
            self.wait += 1;
            false
        }
    }
}

impl TrainerCallback for EarlyStopping {
    fn on_train_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        self.reset();
        CallbackAction::Continue
    }

    fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        let Some(value) = ctx.metric(&self.monitor) else {
            let available: Vec<&str> = ctx.metrics.iter().map(|(k, _)| k).collect();
            tracing::warn!(
                monitor = %self.monitor,
                ?available,
                "early stopping conditioned on a metric that is not available, skipping epoch"
            );
            return CallbackAction::Continue;
        };

        self.check_improvement(ctx.epoch, value);

        if self.wait >= self.patience {
            self.stopped_epoch = Some(ctx.epoch);
            tracing::info!(
                epoch = ctx.epoch,
                monitor = %self.monitor,
                best = self.best,
                patience = self.patience,
                "early stopping: no improvement"
            );
            CallbackAction::Stop
        } else {
            CallbackAction::Continue
        }
    }

    fn name(&self) -> &'static str {
        "EarlyStopping"
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::train::metrics::EpochMetrics;
    use proptest::prelude::*;

    fn ctx(epoch: usize, value: f64) -> CallbackContext {
        CallbackContext {
            epoch,
            metrics: EpochMetrics::new().with("score", value),
            ..Default::default()
        }
    }

    proptest! {
        /// Early stopping should always stop after patience epochs without improvement
        #[test]
        fn early_stopping_respects_patience(
            patience in 1usize..10,
            min_delta in 0.0001f64..0.1,
            initial in 0.1f64..10.0,
            max_mode in any::<bool>(),
        ) {
            let mode = if max_mode { MonitorMode::Max } else { MonitorMode::Min };
            let mut es = EarlyStopping::new(patience, min_delta).monitor("score", mode);

            es.on_epoch_end(&ctx(0, initial));

            for epoch in 1..=patience {
                let action = es.on_epoch_end(&ctx(epoch, initial));
                if epoch < patience {
                    prop_assert_eq!(action, CallbackAction::Continue);
                } else {
                    prop_assert_eq!(action, CallbackAction::Stop);
                }
            }
        }

        /// Early stopping counter should reset on improvement
        #[test]
        fn early_stopping_resets_on_improvement(
            patience in 2usize..10,
            min_delta in 0.001f64..0.1,
            initial in 1.0f64..10.0,
            improvement in 0.2f64..0.5,
        ) {
            let mut es = EarlyStopping::new(patience, min_delta).monitor("score", MonitorMode::Max);

            es.on_epoch_end(&ctx(0, initial));
            es.on_epoch_end(&ctx(1, initial));
            prop_assert!(es.wait >= 1);

            es.on_epoch_end(&ctx(2, initial + improvement));
            prop_assert_eq!(es.wait, 0);
            prop_assert_eq!(es.best(), Some((2, initial + improvement)));
        }
    }
}
