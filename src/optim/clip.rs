//! Gradient clipping utilities

use super::Parameter;

/// Clip gradients by global norm
///
/// Computes the joint L2 norm of every gradient and, if it exceeds
/// `max_norm`, scales all gradients by `max_norm / global_norm`. Relative
/// magnitudes across parameters are preserved.
///
/// # Returns
/// The global norm before clipping
pub fn clip_grad_norm(params: &mut [Parameter], max_norm: f64) -> f64 {
    let total_norm_sq: f64 = params
        .iter()
        .filter_map(Parameter::grad)
        .map(|grad| grad.iter().map(|&g| g * g).sum::<f64>())
        .sum();

    let global_norm = total_norm_sq.sqrt();

    if global_norm > max_norm {
        let clip_coef = max_norm / global_norm;
        for param in params.iter_mut() {
            if let Some(grad) = param.grad() {
                let clipped = grad * clip_coef;
                param.set_grad(clipped);
            }
        }
    }

    global_norm
}
