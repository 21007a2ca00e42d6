//! Filesystem utilities for pyboot.

mod create;

pub use create::write_new_file;
