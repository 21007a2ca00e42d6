//! CLI argument parsing for pyboot.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::project::{DEFAULT_PYTHON_VERSION, DEFAULT_VERSION};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pyboot: bootstrap a Python project.
///
/// Makes sure the package tool is installed and generates a starter
/// pyproject.toml.
#[derive(Parser, Debug)]
#[command(name = "pyboot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file. Defaults to ./pyboot.yaml when it exists.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pyboot.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Make sure the package tool is installed.
    ///
    /// Runs `<tool> --version`; if that fails, installs the tool with the
    /// configured install command (by default `python -m pip install <tool>`).
    /// Installation failures are reported but exit 0 unless --strict is set.
    EnsureTool(EnsureToolArgs),

    /// Generate a pyproject.toml.
    ///
    /// Refuses to touch an existing file: exits 1 and writes nothing if the
    /// output path is already occupied.
    Generate(GenerateArgs),

    /// Print the effective configuration as YAML.
    ///
    /// Shows the defaults merged with ./pyboot.yaml or --config.
    ShowConfig,
}

/// Arguments for the `ensure-tool` command.
#[derive(Parser, Debug)]
pub struct EnsureToolArgs {
    /// Tool to check for (default: `tool` from config, "uv").
    #[arg(long)]
    pub tool: Option<String>,

    /// Exit with a nonzero code if the tool could not be installed.
    #[arg(long)]
    pub strict: bool,

    /// How to report the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Report format for `ensure-tool`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable status lines.
    Text,
    /// A single JSON object.
    Json,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Project name.
    #[arg(long)]
    pub name: String,

    /// Project version.
    #[arg(long = "version", value_name = "VERSION", default_value = DEFAULT_VERSION)]
    pub project_version: String,

    /// Minimum supported Python version.
    #[arg(long, default_value = DEFAULT_PYTHON_VERSION)]
    pub python_version: String,

    /// One-line project description.
    #[arg(long, default_value_t)]
    pub description: String,

    /// Destination file (default: `default_output` from config, "pyproject.toml").
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the rendered file instead of writing it.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
