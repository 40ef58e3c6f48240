//! Optimizer trait

use super::Parameter;

/// Trait for optimization algorithms
///
/// The learning rate is the knob the schedule turns: training loops call
/// [`Optimizer::set_lr`] once per epoch and [`Optimizer::step`] once per batch.
pub trait Optimizer {
    /// Perform a single optimization step using each parameter's gradient
    fn step(&mut self, params: &mut [Parameter]);

    /// Zero out all gradients
    fn zero_grad(&mut self, params: &mut [Parameter]) {
        for param in params {
            param.zero_grad();
        }
    }

    /// Get learning rate
    fn lr(&self) -> f64;

    /// Set learning rate
    fn set_lr(&mut self, lr: f64);

    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;
}
