//! Subprocess execution.
//!
//! Unlike a `Result`-on-failure wrapper, [`CommandRunner::run`] only fails
//! when the process could not be spawned. A nonzero exit is reported in
//! [`CommandOutput`] and left for the caller to interpret.
//!
//! [`OutputMode`] picks whether the child's output is collected or shown to
//! the user while it runs.

use std::io;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Where a child process writes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect stdout and stderr into the returned [`CommandOutput`].
    Capture,
    /// Share this process's stdout and stderr. Nothing is collected.
    Inherit,
    /// Like [`OutputMode::Inherit`], but the child's stdout goes to this
    /// process's stderr, keeping stdout free for a machine-readable report.
    InheritToStderr,
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Standard output (trimmed).
    pub stdout: String,
    /// Standard error (trimmed).
    pub stderr: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    fn from_status(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Returns true if the process exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Best human-readable description of a failure: stderr, else stdout,
    /// else the exit status.
    pub fn failure_message(&self) -> String {
        if !self.stderr.is_empty() {
            self.stderr.clone()
        } else if !self.stdout.is_empty() {
            self.stdout.clone()
        } else {
            match self.code {
                Some(code) => format!("exited with code {}", code),
                None => "terminated by signal".to_string(),
            }
        }
    }
}

/// Runs a program to completion.
pub trait CommandRunner {
    fn run(&self, program: &Path, args: &[String], mode: OutputMode) -> io::Result<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &Path, args: &[String], mode: OutputMode) -> io::Result<CommandOutput> {
        (**self).run(program, args, mode)
    }
}

/// Runs programs with [`std::process::Command`], blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String], mode: OutputMode) -> io::Result<CommandOutput> {
        debug!(program = %program.display(), ?args, ?mode, "running command");

        let mut command = Command::new(program);
        command.args(args);
        let output = match mode {
            OutputMode::Capture => CommandOutput::from_output(&command.output()?),
            OutputMode::Inherit => CommandOutput::from_status(command.status()?),
            OutputMode::InheritToStderr => {
                let status = command.stdout(Stdio::from(io::stderr())).status()?;
                CommandOutput::from_status(status)
            }
        };

        debug!(program = %program.display(), code = ?output.code, "command finished");
        Ok(output)
    }
}
