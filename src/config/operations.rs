//! Config loading, validation, and lookup.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{PyBootError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PyBootError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PyBootError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PyBootError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PyBootError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("tool", &self.tool),
            ("install_command", &self.install_command),
            ("default_output", &self.default_output),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PyBootError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }

        if self.python_candidates.is_empty() {
            return Err(PyBootError::UserError(
                "config validation failed: python_candidates must list at least one interpreter"
                    .to_string(),
            ));
        }
        if self.python_candidates.iter().any(|c| c.trim().is_empty()) {
            return Err(PyBootError::UserError(
                "config validation failed: python_candidates entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise `pyboot.yaml` in `cwd` is used
    /// when present, and the defaults when it is not.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config from --config");
            return Self::load(path);
        }

        let implicit = cwd.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            debug!(path = %implicit.display(), "loading config from working directory");
            return Self::load(implicit);
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }
}
