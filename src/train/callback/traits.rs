//! Hook points of the training loop and the state they see

use crate::train::metrics::EpochMetrics;

/// Snapshot of the run handed to every hook
#[derive(Clone, Debug, Default)]
pub struct CallbackContext {
    /// Epoch the event belongs to, counted from 0
    pub epoch: usize,
    /// Epoch budget of the run
    pub max_epochs: usize,
    /// Learning rate currently set on the optimizer
    pub lr: f64,
    /// Metrics reported for the epoch (empty before the epoch has run)
    pub metrics: EpochMetrics,
    /// Seconds since `fit` started
    pub elapsed_secs: f64,
}

impl CallbackContext {
    /// Look up a metric reported for this epoch
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name)
    }
}

/// What a hook asks the training loop to do next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Keep going
    Continue,
    /// End the run after this event
    Stop,
    /// Skip the epoch about to run
    SkipEpoch,
}

/// A participant in the training loop
///
/// Every hook defaults to a no-op, so implementors override only the
/// events they react to. Per epoch the loop calls `schedule_lr`, then
/// `on_epoch_begin`, runs the epoch and calls `on_epoch_end`.
pub trait TrainerCallback: Send {
    /// Before the first epoch
    fn on_train_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// After the last epoch, including runs that stopped early
    fn on_train_end(&mut self, _ctx: &CallbackContext) {}

    /// Learning rate to use for the epoch about to start
    ///
    /// `ctx.lr` holds the rate currently set on the optimizer. Returning
    /// `None` leaves it unchanged.
    fn schedule_lr(&mut self, _ctx: &CallbackContext) -> Option<f64> {
        None
    }

    /// Before the epoch runs, after its learning rate is set
    fn on_epoch_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// After the epoch ran, with its metrics in `ctx.metrics`
    fn on_epoch_end(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        CallbackAction::Continue
    }

    /// Name used in logs
    fn name(&self) -> &'static str {
        "TrainerCallback"
    }
}
