//! Schedule configuration errors

use thiserror::Error;

/// Invalid learning rate schedule configuration
///
/// Returned when a [`ScheduleConfig`](super::ScheduleConfig) is built, never
/// while the schedule is being evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Invalid base learning rate: {0} (must be finite and > 0.0)")]
    InvalidBaseLr(f64),

    #[error("Invalid total steps: {0} (must be > 0)")]
    NonPositiveTotalSteps(i64),

    #[error("Invalid warmup steps: {0} (must be >= 0)")]
    NegativeWarmupSteps(i64),

    #[error("Warmup steps ({warmup_steps}) must be less than total steps ({total_steps})")]
    WarmupNotBeforeEnd { warmup_steps: usize, total_steps: usize },

    #[error("Step count {0} does not fit in this platform's usize")]
    StepsOutOfRange(i64),
}

/// Result type for schedule construction
pub type Result<T> = std::result::Result<T, ConfigurationError>;
