//! Package tool detection and installation.
//!
//! - `resolver` - executable lookup (`PATH` in production, fakes in tests)
//! - `runner` - subprocess execution, captured or shown live
//! - `template` - install command templates
//! - `installer` - version check, install, and the resulting [`ToolStatus`]

mod installer;
mod resolver;
mod runner;
mod template;

pub use installer::{ToolInstaller, ToolStatus};
pub use resolver::{ExecutableResolver, PathResolver};
pub use runner::{CommandOutput, CommandRunner, OutputMode, SystemRunner};
