//! Trainer abstraction for epoch-level training loops
//!
//! The [`Trainer`] owns the optimizer and callbacks and sequences epochs.
//! The model itself stays outside: an [`EpochRunner`] trains one epoch with
//! the optimizer it is handed and reports that epoch's metrics.
//!
//! # Example
//!
//! ```
//! use warmcos::optim::{cosine_schedule, Adam, Optimizer, ScheduleConfig};
//! use warmcos::train::{EpochMetrics, LRSchedulerCallback, LrMonitor, TrainConfig, Trainer};
//!
//! let schedule = cosine_schedule(ScheduleConfig::new(0.01, 5, 1).unwrap());
//! let monitor = LrMonitor::new();
//! let lrs = monitor.history();
//!
//! let mut trainer = Trainer::new(Box::new(Adam::default_params(0.001)), TrainConfig::new(5));
//! trainer.add_callback(LRSchedulerCallback::new(schedule));
//! trainer.add_callback(monitor);
//!
//! let mut runner = |epoch: usize, _opt: &mut dyn Optimizer| {
//!     Ok::<_, warmcos::Error>(EpochMetrics::new().with("val_accuracy", 0.5 + epoch as f64 * 0.1))
//! };
//! let result = trainer.fit(&mut runner).unwrap();
//!
//! assert_eq!(result.epochs_run, 5);
//! assert_eq!(lrs.len(), 5);
//! assert_eq!(result.best.unwrap().epoch, 4);
//! ```

mod core;
mod result;
mod runner;
mod train_loop;


pub use core::Trainer;
pub use result::{BestEpoch, TrainResult};
pub use runner::EpochRunner;
