//! Epoch-level training loop
//!
//! This module provides the plumbing around a model that trains itself one
//! epoch at a time:
//! - Callbacks (learning rate scheduling, learning rate monitoring, early stopping)
//! - Trainer abstraction driving an [`EpochRunner`]
//! - Label-smoothed cross-entropy loss and accuracy
//! - Per-epoch metrics and training results
//!
//! # Example
//!
//! ```
//! use warmcos::optim::{cosine_schedule, Adam, Optimizer, ScheduleConfig};
//! use warmcos::train::{EarlyStopping, EpochMetrics, LRSchedulerCallback, MonitorMode, TrainConfig, Trainer};
//!
//! let schedule = cosine_schedule(ScheduleConfig::new(0.001, 50, 5).unwrap());
//!
//! let mut trainer = Trainer::new(Box::new(Adam::default_params(0.001)), TrainConfig::new(50));
//! trainer.add_callback(LRSchedulerCallback::new(schedule));
//! trainer.add_callback(EarlyStopping::new(5, 0.001).monitor("val_accuracy", MonitorMode::Max));
//!
//! // A model that stops improving after epoch 3
//! let mut runner = |epoch: usize, _opt: &mut dyn Optimizer| {
//!     Ok::<_, warmcos::Error>(EpochMetrics::new().with("val_accuracy", (epoch.min(3) as f64) / 10.0))
//! };
//! let result = trainer.fit(&mut runner).unwrap();
//! assert!(result.stopped_early);
//! ```

pub mod callback;
mod config;
mod loss;
mod metrics;
mod trainer;

#[cfg(test)]
mod tests;

pub use callback::{
    CallbackAction, CallbackContext, CallbackManager, EarlyStopping, LRSchedulerCallback,
    LrHistory, LrMonitor, MonitorMode, TrainerCallback,
};
pub use config::TrainConfig;
pub use loss::{LossFn, SmoothedCrossEntropy};
pub use metrics::{accuracy, EpochMetrics, ACCURACY, LOSS, VAL_ACCURACY, VAL_LOSS};
pub use trainer::{BestEpoch, EpochRunner, TrainResult, Trainer};
