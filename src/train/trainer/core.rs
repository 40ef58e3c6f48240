//! Trainer state and accessors

use crate::optim::Optimizer;
use crate::train::callback::{CallbackContext, CallbackManager, TrainerCallback};
use crate::train::metrics::EpochMetrics;
use crate::train::TrainConfig;
use std::time::Instant;

/// Epoch-level trainer that owns the optimizer and dispatches callbacks
pub struct Trainer {
    pub(crate) optimizer: Box<dyn Optimizer>,

    pub(crate) config: TrainConfig,

    pub(crate) callbacks: CallbackManager,

    /// Set when `fit` starts
    pub(crate) start_time: Option<Instant>,
}

impl Trainer {
    /// Trainer with no callbacks; the optimizer's current rate is used until a scheduler sets one
    pub fn new(optimizer: Box<dyn Optimizer>, config: TrainConfig) -> Self {
        Self { optimizer, config, callbacks: CallbackManager::new(), start_time: None }
    }

    /// Register a callback; callbacks run in the order they were added
    pub fn add_callback<C: TrainerCallback + 'static>(&mut self, callback: C) {
        self.callbacks.add(callback);
    }

    /// Add an already boxed callback
    pub fn add_boxed_callback(&mut self, callback: Box<dyn TrainerCallback>) {
        self.callbacks.add_boxed(callback);
    }

    /// Learning rate currently set on the optimizer
    pub fn lr(&self) -> f64 {
        self.optimizer.lr()
    }

    /// Override the optimizer's learning rate
    pub fn set_lr(&mut self, lr: f64) {
        self.optimizer.set_lr(lr);
    }

    /// The optimizer being trained with
    pub fn optimizer(&self) -> &dyn Optimizer {
        self.optimizer.as_ref()
    }

    /// Epoch budget and monitored metric
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Registered callbacks
    pub fn callbacks(&self) -> &CallbackManager {
        &self.callbacks
    }

    /// Registered callbacks, mutably
    pub fn callbacks_mut(&mut self) -> &mut CallbackManager {
        &mut self.callbacks
    }

    /// Seconds since `fit` started
    pub(crate) fn elapsed_secs(&self) -> f64 {
        self.start_time.map_or(0.0, |t| t.elapsed().as_secs_f64())
    }

    /// Context for a hook of `epoch`
    pub(crate) fn build_context(&self, epoch: usize, metrics: EpochMetrics) -> CallbackContext {
        CallbackContext {
            epoch,
            max_epochs: self.config.max_epochs,
            lr: self.optimizer.lr(),
            metrics,
            elapsed_secs: self.elapsed_secs(),
        }
    }
}

impl std::fmt::Debug for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("optimizer", &self.optimizer.name())
            .field("lr", &self.optimizer.lr())
            .field("config", &self.config)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
