//! The model side of the training loop

use crate::error::Result;
use crate::optim::Optimizer;
use crate::train::metrics::EpochMetrics;

/// Trains a model for one epoch
///
/// Implementors run every batch of the epoch, stepping `optimizer` at its
/// current learning rate, and return the metrics observed for the epoch.
/// Any `FnMut(usize, &mut dyn Optimizer) -> Result<EpochMetrics>` is a runner.
pub trait EpochRunner {
    fn run_epoch(&mut self, epoch: usize, optimizer: &mut dyn Optimizer) -> Result<EpochMetrics>;
}

impl<F> EpochRunner for F
where
    F: FnMut(usize, &mut dyn Optimizer) -> Result<EpochMetrics>,
{
    fn run_epoch(&mut self, epoch: usize, optimizer: &mut dyn Optimizer) -> Result<EpochMetrics> {
        self(epoch, optimizer)
    }
}
