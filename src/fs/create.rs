//! Exclusive file creation.
//!
//! The target is opened with `create_new`, so an existing file is never
//! truncated, even if it appears after the caller's own existence check.
//! Content is synced to disk before returning. If writing fails after the
//! file was created, the partial file is removed.

use crate::error::{PyBootError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Write `content` to a file that must not exist yet.
///
/// Missing parent directories are created.
///
/// # Returns
///
/// * `Ok(())` - The file was created and fully written
/// * `Err(PyBootError::AlreadyExists)` - Something already occupies `path`
/// * `Err(PyBootError::UserError)` - Directory creation, open or write failure
pub fn write_new_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        debug!(dir = %parent.display(), "creating parent directory");
        fs::create_dir_all(parent).map_err(|e| {
            PyBootError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => PyBootError::AlreadyExists(path.to_path_buf()),
            _ => PyBootError::UserError(format!(
                "failed to create '{}': {}",
                path.display(),
                e
            )),
        })?;

    write_and_sync(file, path, content.as_bytes())?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");

    Ok(())
}

/// Write all content and sync to disk, removing the file on failure.
fn write_and_sync(mut file: File, path: &Path, content: &[u8]) -> Result<()> {
    let outcome = file.write_all(content).and_then(|()| file.sync_all());

    if let Err(e) = outcome {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(PyBootError::UserError(format!(
            "failed to write '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
