//! Loss functions for training
//!
//! - [`SmoothedCrossEntropy`] - Sparse categorical cross-entropy with label smoothing

mod cross_entropy;
mod traits;

pub use cross_entropy::SmoothedCrossEntropy;
pub use traits::LossFn;
