//! Pyboot: bootstrap a Python project.
//!
//! This is the main entry point for the `pyboot` CLI. It parses arguments,
//! sets up diagnostic logging, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod project;
pub mod toolchain;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err @ error::PyBootError::AlreadyExists(_)) => {
            // Reported next to the "Created" line, on stdout
            println!("{}", err);

            ExitCode::from(err.exit_code() as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
