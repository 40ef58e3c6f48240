//! Run configuration
//!
//! A run is described by a YAML [`RunSpec`]: schedule, optimizer, loss,
//! early stopping and model hyperparameters. Specifications are validated
//! up front so that a bad value fails before any epoch runs.

mod builder;
mod cli;
mod loader;
mod schema;
mod validate;

pub use builder::{
    build_early_stopping, build_loss, build_optimizer, build_schedule, build_trainer,
};
pub use cli::{
    apply_overrides, parse_args, Cli, Command, InitArgs, OutputFormat, ScheduleArgs, ValidateArgs,
};
pub use loader::{load_and_validate, load_config, save_config};
pub use schema::{EarlyStoppingSpec, ModelSpec, RunSpec, CLASS_LABELS};
pub use validate::{validate_config, ValidationError, AVAILABLE_OPTIMIZERS};
