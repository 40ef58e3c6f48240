//! Validated warmup + cosine schedule parameters

use super::error::{ConfigurationError, Result};
use serde::Serialize;
use std::f64::consts::PI;

/// Parameters of a linear-warmup, cosine-decay learning rate schedule
///
/// Invariant: `base_lr` is finite and positive, and
/// `0 <= warmup_steps < total_steps`. The only way to obtain a value is
/// through [`ScheduleConfig::new`] or [`ScheduleConfig::from_signed`], so
/// [`ScheduleConfig::lr_at`] never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleConfig {
    base_lr: f64,
    total_steps: usize,
    warmup_steps: usize,
}

impl ScheduleConfig {
    /// Build a schedule configuration
    ///
    /// # Arguments
    /// * `base_lr` - Peak learning rate, reached at the end of warmup
    /// * `total_steps` - Steps (usually epochs) over which the rate decays to zero
    /// * `warmup_steps` - Initial steps spent ramping linearly up from zero
    pub fn new(base_lr: f64, total_steps: usize, warmup_steps: usize) -> Result<Self> {
        check_base_lr(base_lr)?;
        if total_steps == 0 {
            return Err(ConfigurationError::NonPositiveTotalSteps(0));
        }
        if warmup_steps >= total_steps {
            return Err(ConfigurationError::WarmupNotBeforeEnd { warmup_steps, total_steps });
        }
        Ok(Self { base_lr, total_steps, warmup_steps })
    }

    /// Build a schedule configuration from signed step counts
    ///
    /// Used where step counts come straight from user input and may be negative.
    pub fn from_signed(base_lr: f64, total_steps: i64, warmup_steps: i64) -> Result<Self> {
        check_base_lr(base_lr)?;
        if total_steps <= 0 {
            return Err(ConfigurationError::NonPositiveTotalSteps(total_steps));
        }
        if warmup_steps < 0 {
            return Err(ConfigurationError::NegativeWarmupSteps(warmup_steps));
        }
        let total = usize::try_from(total_steps)
            .map_err(|_| ConfigurationError::StepsOutOfRange(total_steps))?;
        let warmup = usize::try_from(warmup_steps)
            .map_err(|_| ConfigurationError::StepsOutOfRange(warmup_steps))?;
        Self::new(base_lr, total, warmup)
    }

    /// Peak learning rate
    pub fn base_lr(&self) -> f64 {
        self.base_lr
    }

    /// Total number of scheduled steps
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Number of warmup steps
    pub fn warmup_steps(&self) -> usize {
        self.warmup_steps
    }

    /// Number of steps spent in cosine decay (always > 0)
    pub fn decay_steps(&self) -> usize {
        self.total_steps - self.warmup_steps
    }

    /// Learning rate for `step`
    ///
    /// Formula:
    /// - progress = clamp((t - warmup) / (total - warmup), 0, 1)
    /// - lr = base_lr * 0.5 * (1 + cos(pi * progress)) * min(1, t / warmup)
    ///
    /// The warmup factor is omitted when `warmup_steps == 0`. Steps past
    /// `total_steps` saturate at zero.
    pub fn lr_at(&self, step: usize) -> f64 {
        let t = step as f64;
        let warmup = self.warmup_steps as f64;

        let progress = ((t - warmup) / self.decay_steps() as f64).clamp(0.0, 1.0);
        let decayed = self.base_lr * 0.5 * (1.0 + (PI * progress).cos());

        if self.warmup_steps == 0 {
            return decayed;
        }
        decayed * (t / warmup).min(1.0)
    }

    /// `(step, lr)` for every step from 0 through `total_steps` inclusive
    pub fn curve(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..=self.total_steps).map(move |step| (step, self.lr_at(step)))
    }
}

fn check_base_lr(base_lr: f64) -> Result<()> {
    if base_lr.is_finite() && base_lr > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidBaseLr(base_lr))
    }
}

/// Turn a schedule configuration into a plain function of the step
///
/// The returned closure is what a training loop calls once per step (or
/// epoch) to obtain the learning rate to apply.
///
/// # Example
///
/// ```
/// use warmcos::optim::{cosine_schedule, ScheduleConfig};
///
/// let config = ScheduleConfig::new(0.1, 100, 10)?;
/// let schedule = cosine_schedule(config);
/// assert!((schedule(10) - 0.1).abs() < 1e-12);
/// assert!((schedule(55) - 0.05).abs() < 1e-12);
/// # Ok::<(), warmcos::optim::ConfigurationError>(())
/// ```
pub fn cosine_schedule(config: ScheduleConfig) -> impl Fn(usize) -> f64 + Copy + Send + Sync {
    move |step| config.lr_at(step)
}

/// Validate raw hyperparameters and return the schedule function
pub fn try_cosine_schedule(
    base_lr: f64,
    total_steps: usize,
    warmup_steps: usize,
) -> Result<impl Fn(usize) -> f64 + Copy + Send + Sync> {
    ScheduleConfig::new(base_lr, total_steps, warmup_steps).map(cosine_schedule)
}
