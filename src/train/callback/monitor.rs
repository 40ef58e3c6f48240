//! Learning rate monitor callback

use super::traits::{CallbackAction, CallbackContext, TrainerCallback};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared record of `(epoch, learning rate)` pairs
///
/// Cloning yields another handle to the same history, so a caller can keep a
/// handle while the monitor itself is owned by the trainer.
#[derive(Clone, Debug, Default)]
pub struct LrHistory {
    entries: Arc<Mutex<Vec<(usize, f64)>>>,
}

impl LrHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(usize, f64)>> {
        // Entries are plain values; a panic mid-push cannot leave them inconsistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, epoch: usize, lr: f64) {
        self.lock().push((epoch, lr));
    }

    /// Copy of all recorded entries
    pub fn snapshot(&self) -> Vec<(usize, f64)> {
        self.lock().clone()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<(usize, f64)> {
        self.lock().last().copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Callback that records the optimizer learning rate at the end of every epoch
#[derive(Debug, Default)]
pub struct LrMonitor {
    history: LrHistory,
}

impl LrMonitor {
    /// Create a monitor with a fresh history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a monitor writing into an existing history
    pub fn with_history(history: LrHistory) -> Self {
        Self { history }
    }

    /// Handle to the recorded history
    pub fn history(&self) -> LrHistory {
        self.history.clone()
    }
}

impl TrainerCallback for LrMonitor {
    fn on_train_begin(&mut self, _ctx: &CallbackContext) -> CallbackAction {
        self.history.clear();
        CallbackAction::Continue
    }

    fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
        tracing::info!(epoch = ctx.epoch, lr = ctx.lr, "learning rate for epoch");
        self.history.push(ctx.epoch, ctx.lr);
        CallbackAction::Continue
    }

    fn name(&self) -> &'static str {
        "LrMonitor"
    }
}
