//! `pyboot ensure-tool`: make sure the package tool is on the search path.
//!
//! Best effort by default: every outcome exits 0 and is only reported as
//! text. `--strict` turns an install failure into a tool error.

use crate::cli::{EnsureToolArgs, OutputFormat};
use crate::config::Config;
use crate::error::{PyBootError, Result};
use crate::toolchain::{
    CommandRunner, ExecutableResolver, OutputMode, PathResolver, SystemRunner, ToolInstaller,
    ToolStatus,
};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

pub(super) fn cmd_ensure_tool(config: &Config, args: EnsureToolArgs) -> Result<()> {
    let mut installer = ToolInstaller::new(config, PathResolver, SystemRunner)
        .with_install_output(install_output(args.format));
    if let Some(tool) = args.tool {
        installer = installer.with_tool(tool);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ensure_tool(&installer, args.format, args.strict, &mut out).map(|_| ())
}

/// The installer's own output is shown live. In JSON mode it goes to stderr so
/// stdout carries only the report.
fn install_output(format: OutputFormat) -> OutputMode {
    match format {
        OutputFormat::Text => OutputMode::Inherit,
        OutputFormat::Json => OutputMode::InheritToStderr,
    }
}

/// JSON report: the tool name plus the tagged status fields.
#[derive(Serialize)]
struct StatusReport<'a> {
    tool: &'a str,
    #[serde(flatten)]
    status: &'a ToolStatus,
}

fn ensure_tool<R, C, W>(
    installer: &ToolInstaller<R, C>,
    format: OutputFormat,
    strict: bool,
    out: &mut W,
) -> Result<ToolStatus>
where
    R: ExecutableResolver,
    C: CommandRunner,
    W: Write,
{
    let tool = installer.tool().to_string();

    let status = installer.ensure_available(|| {
        if format == OutputFormat::Text {
            writeln!(out, "{} is not installed. Installing...", tool).map_err(write_error)?;
            // The installer writes to the terminal directly.
            out.flush().map_err(write_error)?;
        }
        Ok(())
    })?;
    debug!(tool = %tool, available = status.is_available(), "ensure-tool finished");

    match format {
        OutputFormat::Text => {
            let line = match &status {
                ToolStatus::AlreadyPresent { version } => {
                    format!("{} is already installed: {}", tool, version)
                }
                ToolStatus::Installed => format!("{} installed successfully.", tool),
                ToolStatus::InstallFailed { reason } => {
                    format!("Failed to install {}: {}", tool, reason)
                }
            };
            writeln!(out, "{}", line).map_err(write_error)?;
        }
        OutputFormat::Json => {
            let report = StatusReport {
                tool: &tool,
                status: &status,
            };
            let json = serde_json::to_string(&report).map_err(|e| {
                PyBootError::UserError(format!("failed to serialize status: {}", e))
            })?;
            writeln!(out, "{}", json).map_err(write_error)?;
        }
    }

    if strict && let ToolStatus::InstallFailed { reason } = &status {
        return Err(PyBootError::ToolError(format!("{}: {}", tool, reason)));
    }

    Ok(status)
}

fn write_error(e: io::Error) -> PyBootError {
    PyBootError::UserError(format!("failed to write to stdout: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::test_support::{FakeResolver, FakeRunner};

    fn run(
        resolver: &FakeResolver,
        runner: &FakeRunner,
        format: OutputFormat,
        strict: bool,
    ) -> (Result<ToolStatus>, String) {
        let installer = ToolInstaller::new(&Config::default(), resolver, runner)
            .with_install_output(OutputMode::Capture);
        let mut out = Vec::new();
        let result = ensure_tool(&installer, format, strict, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_already_installed_message() {
        let resolver = FakeResolver::new().with("uv", "/bin/uv");
        let runner = FakeRunner::new().respond("/bin/uv", 0, "uv 0.4.0");

        let (result, out) = run(&resolver, &runner, OutputFormat::Text, false);

        assert!(result.unwrap().is_available());
        assert_eq!(out, "uv is already installed: uv 0.4.0\n");
    }

    #[test]
    fn test_install_success_messages() {
        let resolver = FakeResolver::new().with("python3", "/usr/bin/python3");
        let runner = FakeRunner::new().respond("/usr/bin/python3", 0, "");

        let (result, out) = run(&resolver, &runner, OutputFormat::Text, false);

        assert_eq!(result.unwrap(), ToolStatus::Installed);
        assert_eq!(
            out,
            "uv is not installed. Installing...\nuv installed successfully.\n"
        );
    }

    #[test]
    fn test_install_failure_is_best_effort() {
        let resolver = FakeResolver::new().with("python3", "/usr/bin/python3");
        let runner = FakeRunner::new().respond_err("/usr/bin/python3", 1, "network unreachable");

        let (result, out) = run(&resolver, &runner, OutputFormat::Text, false);

        assert!(!result.unwrap().is_available());
        assert!(out.ends_with("Failed to install uv: network unreachable\n"));
    }

    #[test]
    fn test_install_failure_strict_is_tool_error() {
        let resolver = FakeResolver::new().with("python3", "/usr/bin/python3");
        let runner = FakeRunner::new().respond_err("/usr/bin/python3", 1, "network unreachable");

        let (result, out) = run(&resolver, &runner, OutputFormat::Text, true);

        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::TOOL_FAILURE);
        assert!(err.to_string().contains("network unreachable"));
        // The failure is still reported on stdout.
        assert!(out.contains("Failed to install uv"));
    }

    #[test]
    fn test_strict_does_not_affect_success() {
        let resolver = FakeResolver::new().with("uv", "/bin/uv");
        let runner = FakeRunner::new().respond("/bin/uv", 0, "uv 0.4.0");

        let (result, _) = run(&resolver, &runner, OutputFormat::Text, true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_json_report() {
        let resolver = FakeResolver::new().with("uv", "/bin/uv");
        let runner = FakeRunner::new().respond("/bin/uv", 0, "uv 0.4.0");

        let (_, out) = run(&resolver, &runner, OutputFormat::Json, false);

        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "tool": "uv",
                "status": "already_present",
                "version": "uv 0.4.0"
            })
        );
    }

    #[test]
    fn test_json_report_has_no_progress_line() {
        let resolver = FakeResolver::new();
        let runner = FakeRunner::new();

        let (_, out) = run(&resolver, &runner, OutputFormat::Json, false);

        assert_eq!(out.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["status"], "install_failed");
        assert!(
            value["reason"]
                .as_str()
                .unwrap()
                .contains("no Python interpreter found")
        );
    }

    /// Accepts nothing: every write fails.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_progress_write_failure_is_user_error() {
        let resolver = FakeResolver::new().with("python3", "/usr/bin/python3");
        let runner = FakeRunner::new().respond("/usr/bin/python3", 0, "");
        let installer = ToolInstaller::new(&Config::default(), &resolver, &runner);

        let err = ensure_tool(&installer, OutputFormat::Text, false, &mut ClosedPipe).unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("pipe closed"));
        // Nothing is installed once the progress line cannot be written.
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_install_output_follows_format() {
        assert_eq!(install_output(OutputFormat::Text), OutputMode::Inherit);
        assert_eq!(install_output(OutputFormat::Json), OutputMode::InheritToStderr);
    }
}
