//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::RunSpec;

/// warmcos: warmup + cosine learning rate schedules for training runs
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "warmcos")]
#[command(version)]
#[command(about = "Warmup + cosine learning rate schedules and training run configuration")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the learning rate for every epoch of a run
    Schedule(ScheduleArgs),

    /// Validate a run specification file
    Validate(ValidateArgs),

    /// Write a default run specification
    Init(InitArgs),
}

/// Arguments for the schedule command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScheduleArgs {
    /// Run specification to read schedule parameters from
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the peak learning rate
    #[arg(short, long, allow_negative_numbers = true)]
    pub lr: Option<f64>,

    /// Override the number of epochs
    #[arg(short, long, allow_negative_numbers = true)]
    pub epochs: Option<i64>,

    /// Override the number of warmup epochs
    #[arg(short, long, allow_negative_numbers = true)]
    pub warmup: Option<i64>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML run specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show the full specification
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the init command
///
/// Without `--output` the specification is written to stdout regardless of
/// `--quiet`, since it is the command's result rather than a log message.
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a RunSpec
pub fn apply_overrides(spec: &mut RunSpec, args: &ScheduleArgs) {
    if let Some(lr) = args.lr {
        spec.learning_rate = lr;
    }
    if let Some(epochs) = args.epochs {
        spec.epochs = epochs;
    }
    if let Some(warmup) = args.warmup {
        spec.warmup_steps = warmup;
    }
}
