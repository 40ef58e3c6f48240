//! Warmup + cosine decay learning rate scheduler

use super::{LRScheduler, ScheduleConfig};
use crate::optim::Optimizer;

/// Warmup + Cosine Decay Learning Rate Scheduler
///
/// Stepping wrapper around [`ScheduleConfig::lr_at`] for loops that prefer
/// to call `step()` rather than track the step index themselves.
/// - Phase 1 (warmup): linear increase from 0 to `base_lr`
/// - Phase 2 (decay): cosine decay from `base_lr` to 0, then held at 0
#[derive(Debug, Clone)]
pub struct WarmupCosineDecayLR {
    config: ScheduleConfig,
    current_step: usize,
}

impl WarmupCosineDecayLR {
    /// Create a new warmup + cosine decay scheduler positioned at step 0
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config, current_step: 0 }
    }

    /// Schedule parameters
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Step the scheduler is positioned at
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Rewind to step 0
    pub fn reset(&mut self) {
        self.current_step = 0;
    }

    /// Learning rate at an arbitrary step, independent of the current position
    pub fn lr_at(&self, step: usize) -> f64 {
        self.config.lr_at(step)
    }

    /// Apply the current learning rate to an optimizer
    pub fn apply<O: Optimizer + ?Sized>(&self, optimizer: &mut O) {
        optimizer.set_lr(self.get_lr());
    }
}

impl LRScheduler for WarmupCosineDecayLR {
    fn get_lr(&self) -> f64 {
        self.config.lr_at(self.current_step)
    }

    fn step(&mut self) {
        self.current_step = self.current_step.saturating_add(1);
    }
}
