//! Exit code constants for the pyboot CLI.
//!
//! - 0: Success
//! - 1: User error (destination exists, bad config, I/O failure)
//! - 2: Usage error (reported by clap before any command runs)
//! - 3: Tool failure (install failed under `--strict`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: destination conflict, invalid config or template, I/O failure.
pub const USER_ERROR: i32 = 1;

/// Tool failure: the package tool could not be installed and `--strict` was set.
pub const TOOL_FAILURE: i32 = 3;
