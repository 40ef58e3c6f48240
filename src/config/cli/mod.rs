//! Command-line argument types

mod core;
mod types;


pub use core::{apply_overrides, parse_args, Cli, Command, InitArgs, ScheduleArgs, ValidateArgs};
pub use types::OutputFormat;
