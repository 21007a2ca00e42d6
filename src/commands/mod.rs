//! Command implementations for pyboot.
//!
//! This module resolves the configuration and routes CLI commands to their
//! implementations.

mod ensure_tool;
mod generate;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{PyBootError, Result};

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        PyBootError::UserError(format!("failed to determine current directory: {}", e))
    })?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::EnsureTool(args) => ensure_tool::cmd_ensure_tool(&config, args),
        Command::Generate(args) => generate::cmd_generate(&config, args),
        Command::ShowConfig => cmd_show_config(&config),
    }
}

fn cmd_show_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
