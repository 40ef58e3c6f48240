//! warmcos CLI
//!
//! # Usage
//!
//! ```bash
//! # Print the learning rate for every epoch of the default run
//! warmcos schedule
//!
//! # Schedule with overrides, as JSON
//! warmcos schedule --lr 0.1 --epochs 100 --warmup 10 --format json
//!
//! # Schedule from a run specification
//! warmcos schedule --config run.yaml
//!
//! # Validate a run specification
//! warmcos validate run.yaml --detailed
//!
//! # Write a default run specification
//! warmcos init --output run.yaml
//! ```
//!
//! Library diagnostics go to stderr and are controlled with `RUST_LOG`.

use clap::Parser;
use std::process::ExitCode;
use warmcos::cli::{run_command, Cli};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
