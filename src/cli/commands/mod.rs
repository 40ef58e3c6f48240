//! CLI command implementations

mod init;
mod schedule;
mod validate;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Schedule(args) => schedule::run_schedule(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
    }
}
