//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "pyboot.yaml";

/// Configuration for pyboot.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Executable that `ensure-tool` makes available.
    pub tool: String,

    /// Install command template. `{python}` and `{tool}` are substituted,
    /// then the result is split with shell-word rules.
    pub install_command: String,

    /// Interpreter names tried in order when expanding `{python}`.
    pub python_candidates: Vec<String>,

    /// Output path used by `generate` when `--output` is omitted.
    pub default_output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: "uv".to_string(),
            install_command: "{python} -m pip install {tool}".to_string(),
            python_candidates: vec!["python3".to_string(), "python".to_string()],
            default_output: "pyproject.toml".to_string(),
        }
    }
}
