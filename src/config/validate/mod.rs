//! Configuration validation
//!
//! Validates run specifications for correctness before execution.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_config, AVAILABLE_OPTIMIZERS};
pub(crate) use validator::{PARAM_BETA1, PARAM_BETA2, PARAM_EPSILON};
