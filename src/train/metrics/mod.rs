//! Metrics reported by the model for each epoch

mod classification;
mod epoch;

pub use classification::accuracy;
pub use epoch::{EpochMetrics, ACCURACY, LOSS, VAL_ACCURACY, VAL_LOSS};
