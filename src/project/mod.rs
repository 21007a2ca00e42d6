//! Project descriptor and `pyproject.toml` rendering.
//!
//! Rendering is a pure function of the descriptor: no filesystem access, no
//! escaping, no validation of the inserted values. Writing the result is the
//! job of the `generate` command.


use std::path::PathBuf;

/// Default project version.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Default minimum Python version.
pub const DEFAULT_PYTHON_VERSION: &str = "3.10";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "pyproject.toml";

/// Fields describing the project being bootstrapped.
///
/// Built once per invocation from the command line and discarded after the
/// write (or after a conflict).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: String,
    pub version: String,
    /// Minimum supported Python version, e.g. `3.10`.
    pub python_version: String,
    pub description: String,
    pub output: PathBuf,
}

impl ProjectDescriptor {
    /// Create a descriptor with default values for everything but the name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            description: String::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_python_version(mut self, python_version: impl Into<String>) -> Self {
        self.python_version = python_version.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Python version with the dots removed (`3.10` -> `310`), as used in
    /// `py310`-style target tags.
    pub fn platform_tag(&self) -> String {
        platform_tag(&self.python_version)
    }

    /// Render the `pyproject.toml` contents for this descriptor.
    pub fn render(&self) -> String {
        render(
            &self.name,
            &self.version,
            &self.python_version,
            &self.description,
        )
    }
}

/// Strip every `.` from a Python version string.
pub fn platform_tag(python_version: &str) -> String {
    python_version.replace('.', "")
}

/// Render `pyproject.toml` text from the project fields.
///
/// Values are inserted verbatim.
pub fn render(name: &str, version: &str, python_version: &str, description: &str) -> String {
    let tag = platform_tag(python_version);

    format!(
        r#"[project]
name = "{name}"
version = "{version}"
requires-python = ">={python_version}"
description = "{description}"
dependencies = []

[project.optional-dependencies]
dev = [
    "pytest>=7.0.0",
    "black>=23.0.0",
    "ruff>=0.1.0",
]

[tool.black]
line-length = 88
target-version = ['py{tag}']

[tool.ruff]
line-length = 88
target-version = ['py{tag}']

[tool.pytest.ini_options]
testpaths = ["tests"]
python_files = ["test_*.py"]
python_functions = ["test_*"]
"#
    )
}
