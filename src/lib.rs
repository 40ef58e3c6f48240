//! warmcos: warmup + cosine learning rate schedules
//!
//! The core of the crate is a learning rate schedule that ramps linearly
//! from zero to a peak over a number of warmup steps and then follows a
//! cosine curve down to zero:
//!
//! ```
//! use warmcos::optim::{cosine_schedule, ScheduleConfig};
//!
//! let config = ScheduleConfig::new(0.1, 100, 10)?;
//! let lr = cosine_schedule(config);
//!
//! assert_eq!(lr(0), 0.0);
//! assert!((lr(10) - 0.1).abs() < 1e-12);
//! assert!((lr(55) - 0.05).abs() < 1e-12);
//! assert!(lr(100).abs() < 1e-12);
//! # Ok::<(), warmcos::optim::ConfigurationError>(())
//! ```
//!
//! Around it sit the pieces of an epoch-level training loop:
//!
//! - [`optim`]: the schedule, the `Optimizer` trait, Adam with AMSGrad and
//!   global-norm clipping
//! - [`train`]: callbacks (scheduler, learning rate monitor, early stopping),
//!   the `Trainer` that drives an external model epoch by epoch, and a
//!   label-smoothed cross-entropy loss
//! - [`config`]: YAML run specifications, validation and component builders
//! - [`cli`]: the `warmcos` command line

pub mod cli;
pub mod config;
pub mod error;
pub mod optim;
pub mod train;

pub use error::{Error, Result};
