//! Configuration model for pyboot.
//!
//! This module defines the Config struct that represents an optional
//! `pyboot.yaml`. It supports forward-compatible YAML parsing (unknown fields
//! are ignored), defaults for every field, and validation of config values.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config};
