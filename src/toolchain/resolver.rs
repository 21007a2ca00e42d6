//! Executable resolution.
//!
//! Probing and installing never look at `PATH` directly; they ask an
//! [`ExecutableResolver`]. Production code uses [`PathResolver`], tests use
//! fixed lookup tables.

use std::path::PathBuf;
use tracing::trace;

/// Maps a program name to the path of an executable.
pub trait ExecutableResolver {
    /// Returns `None` when no executable with that name can be found.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

impl<T: ExecutableResolver + ?Sized> ExecutableResolver for &T {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        (**self).resolve(name)
    }
}

/// Resolves programs against the `PATH` environment variable.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathResolver;

impl ExecutableResolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => {
                trace!(name, path = %path.display(), "resolved executable");
                Some(path)
            }
            Err(e) => {
                trace!(name, error = %e, "executable not found");
                None
            }
        }
    }
}

/// Resolve the first candidate that exists.
pub fn first_resolvable<R, S>(resolver: &R, candidates: &[S]) -> Option<PathBuf>
where
    R: ExecutableResolver + ?Sized,
    S: AsRef<str>,
{
    candidates
        .iter()
        .find_map(|candidate| resolver.resolve(candidate.as_ref()))
}
