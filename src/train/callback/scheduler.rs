//! Learning rate scheduler callback

use super::traits::{CallbackContext, TrainerCallback};

/// Callback that sets the learning rate from a schedule at the start of each epoch
///
/// The schedule is any function of the epoch index, typically the closure
/// returned by [`cosine_schedule`](crate::optim::cosine_schedule). It is
/// evaluated at the epoch about to run.
///
/// # Example
///
/// ```
/// use warmcos::optim::{cosine_schedule, ScheduleConfig};
/// use warmcos::train::callback::{CallbackContext, LRSchedulerCallback, TrainerCallback};
///
/// let config = ScheduleConfig::new(0.1, 100, 10).unwrap();
/// let mut callback = LRSchedulerCallback::new(cosine_schedule(config));
///
/// let ctx = CallbackContext { epoch: 10, ..Default::default() };
/// assert!((callback.schedule_lr(&ctx).unwrap() - 0.1).abs() < 1e-12);
/// ```
pub struct LRSchedulerCallback<F>
where
    F: Fn(usize) -> f64 + Send,
{
    schedule: F,
    step_offset: usize,
    last_lr: Option<f64>,
}

impl<F> LRSchedulerCallback<F>
where
    F: Fn(usize) -> f64 + Send,
{
    /// Create a callback evaluating `schedule` at each epoch index
    pub fn new(schedule: F) -> Self {
        Self { schedule, step_offset: 0, last_lr: None }
    }

    /// Shift the step passed to the schedule, e.g. `1` for 1-based epochs
    pub fn with_step_offset(mut self, offset: usize) -> Self {
        self.step_offset = offset;
        self
    }

    /// Learning rate the callback last produced
    pub fn last_lr(&self) -> Option<f64> {
        self.last_lr
    }
}

impl<F> TrainerCallback for LRSchedulerCallback<F>
where
    F: Fn(usize) -> f64 + Send,
{
    fn schedule_lr(&mut self, ctx: &CallbackContext) -> Option<f64> {
        let step = ctx.epoch.saturating_add(self.step_offset);
        let lr = (self.schedule)(step);
        if !lr.is_finite() || lr < 0.0 {
            tracing::warn!(epoch = ctx.epoch, step, lr, "schedule produced an invalid learning rate, keeping current");
            return None;
        }
        tracing::debug!(epoch = ctx.epoch, step, lr, "scheduled learning rate");
        self.last_lr = Some(lr);
        Some(lr)
    }

    fn name(&self) -> &'static str {
        "LRSchedulerCallback"
    }
}
