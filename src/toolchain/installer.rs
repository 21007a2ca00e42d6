//! Check for a tool and install it when missing.

use super::resolver::{ExecutableResolver, first_resolvable};
use super::runner::{CommandRunner, OutputMode};
use super::template::{self, TemplateError};
use crate::config::Config;
use crate::error::{PyBootError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of making a tool available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolStatus {
    /// The tool answered `--version` successfully.
    AlreadyPresent { version: String },
    /// The tool was missing and the install command exited zero.
    Installed,
    /// The tool was missing and could not be installed.
    InstallFailed { reason: String },
}

impl ToolStatus {
    /// Returns true unless installation failed.
    pub fn is_available(&self) -> bool {
        !matches!(self, ToolStatus::InstallFailed { .. })
    }
}

/// Checks for a tool on the search path and installs it through a
/// package-installer subprocess.
pub struct ToolInstaller<R, C> {
    tool: String,
    install_command: String,
    python_candidates: Vec<String>,
    install_output: OutputMode,
    resolver: R,
    runner: C,
}

impl<R: ExecutableResolver, C: CommandRunner> ToolInstaller<R, C> {
    pub fn new(config: &Config, resolver: R, runner: C) -> Self {
        Self {
            tool: config.tool.clone(),
            install_command: config.install_command.clone(),
            python_candidates: config.python_candidates.clone(),
            install_output: OutputMode::Inherit,
            resolver,
            runner,
        }
    }

    /// Override the tool name taken from the config.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Where the install command's output goes. Defaults to the terminal.
    pub fn with_install_output(mut self, mode: OutputMode) -> Self {
        self.install_output = mode;
        self
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Run `<tool> --version`.
    ///
    /// Returns the reported version, or `None` if the tool cannot be found,
    /// cannot be started, or exits nonzero. Never fails.
    pub fn installed_version(&self) -> Option<String> {
        let Some(path) = self.resolver.resolve(&self.tool) else {
            debug!(tool = %self.tool, "tool not found on search path");
            return None;
        };

        let args = ["--version".to_string()];
        match self.runner.run(&path, &args, OutputMode::Capture) {
            Ok(output) if output.success() => {
                let version = if output.stdout.is_empty() {
                    output.stderr
                } else {
                    output.stdout
                };
                debug!(tool = %self.tool, %version, "version check succeeded");
                Some(version)
            }
            Ok(output) => {
                debug!(tool = %self.tool, code = ?output.code, "version check exited nonzero");
                None
            }
            Err(e) => {
                debug!(tool = %self.tool, error = %e, "version check could not start tool");
                None
            }
        }
    }

    /// Run the install command.
    ///
    /// Installation problems are reported as [`ToolStatus::InstallFailed`].
    /// Only a malformed install command template is an error.
    pub fn install(&self) -> Result<ToolStatus> {
        let python = if template::references(&self.install_command, "python") {
            match first_resolvable(&self.resolver, self.python_candidates.as_slice()) {
                Some(path) => Some(path.to_string_lossy().into_owned()),
                None => {
                    return Ok(ToolStatus::InstallFailed {
                        reason: format!(
                            "no Python interpreter found (tried {})",
                            self.python_candidates.join(", ")
                        ),
                    });
                }
            }
        } else {
            None
        };

        let mut vars = HashMap::new();
        vars.insert("tool", self.tool.as_str());
        if let Some(python) = python.as_deref() {
            vars.insert("python", python);
        }

        let argv = template::expand_command(&self.install_command, &vars)
            .map_err(|e: TemplateError| {
                PyBootError::UserError(format!("invalid install_command: {}", e))
            })?;

        let Some(program) = self.locate(&argv[0]) else {
            return Ok(ToolStatus::InstallFailed {
                reason: format!("installer '{}' not found", argv[0]),
            });
        };

        info!(tool = %self.tool, command = %argv.join(" "), "installing tool");
        match self.runner.run(&program, &argv[1..], self.install_output) {
            Ok(output) if output.success() => Ok(ToolStatus::Installed),
            Ok(output) => Ok(ToolStatus::InstallFailed {
                reason: output.failure_message(),
            }),
            Err(e) => Ok(ToolStatus::InstallFailed {
                reason: format!("failed to run '{}': {}", program.display(), e),
            }),
        }
    }

    /// Check the version, and install only if that fails.
    ///
    /// `on_missing` is called once, before installing, so callers can report
    /// progress. If it fails, nothing is installed.
    pub fn ensure_available(
        &self,
        on_missing: impl FnOnce() -> Result<()>,
    ) -> Result<ToolStatus> {
        if let Some(version) = self.installed_version() {
            return Ok(ToolStatus::AlreadyPresent { version });
        }

        on_missing()?;
        self.install()
    }

    /// Bare program names go through the resolver; paths are used as given.
    /// Either separator marks a path, so Windows paths from the resolver are
    /// never looked up again.
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let path = Path::new(program);
        if program.contains(['/', '\\']) || path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            self.resolver.resolve(program)
        }
    }
}
