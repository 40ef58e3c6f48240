//! Loss function trait

use crate::error::Result;
use ndarray::ArrayView2;

/// Trait for classification losses over a batch of logits
pub trait LossFn {
    /// Mean loss over the batch
    ///
    /// `logits` is `(batch, num_classes)`; `labels` holds one class index per row.
    fn forward(&self, logits: ArrayView2<'_, f64>, labels: &[usize]) -> Result<f64>;

    /// Name of the loss function
    fn name(&self) -> &str;
}
