//! Learning rate schedulers
//!
//! Linear warmup followed by cosine decay:
//! - `ScheduleConfig` - validated schedule parameters and the pure `lr_at` function
//! - `cosine_schedule` - closure factory for per-step callers
//! - `WarmupCosineDecayLR` - stepping wrapper implementing `LRScheduler`

mod config;
mod error;
mod warmup_cosine_decay;

#[cfg(test)]
mod proptests;

pub use config::{cosine_schedule, try_cosine_schedule, ScheduleConfig};
pub use error::ConfigurationError;
pub use warmup_cosine_decay::WarmupCosineDecayLR;

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f64;

    /// Step the scheduler (typically called after each epoch or batch)
    fn step(&mut self);
}
