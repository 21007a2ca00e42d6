//! Error types for the pyboot CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pyboot operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum PyBootError {
    /// User provided invalid input, or a filesystem operation failed.
    #[error("{0}")]
    UserError(String),

    /// The output path is already occupied; nothing was written.
    #[error("{} already exists!", .0.display())]
    AlreadyExists(PathBuf),

    /// The package tool could not be made available.
    #[error("Tool installation failed: {0}")]
    ToolError(String),
}

impl PyBootError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PyBootError::UserError(_) => exit_codes::USER_ERROR,
            PyBootError::AlreadyExists(_) => exit_codes::USER_ERROR,
            PyBootError::ToolError(_) => exit_codes::TOOL_FAILURE,
        }
    }
}

/// Result type alias for pyboot operations.
pub type Result<T> = std::result::Result<T, PyBootError>;
