//! `pyboot generate`: render and write pyproject.toml.

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{PyBootError, Result};
use crate::fs::write_new_file;
use crate::project::ProjectDescriptor;
use std::path::PathBuf;
use tracing::debug;

pub(super) fn cmd_generate(config: &Config, args: GenerateArgs) -> Result<()> {
    let to_stdout = args.stdout;
    let project = descriptor_from_args(config, args);

    if to_stdout {
        print!("{}", project.render());
        return Ok(());
    }

    generate_file(&project)?;
    println!("Created {}", project.output.display());
    Ok(())
}

fn descriptor_from_args(config: &Config, args: GenerateArgs) -> ProjectDescriptor {
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.default_output));

    ProjectDescriptor::new(args.name)
        .with_version(args.project_version)
        .with_python_version(args.python_version)
        .with_description(args.description)
        .with_output(output)
}

/// Write the rendered descriptor to its output path.
///
/// Fails with [`PyBootError::AlreadyExists`] without writing anything if the
/// path is occupied.
fn generate_file(project: &ProjectDescriptor) -> Result<()> {
    if project.output.exists() {
        return Err(PyBootError::AlreadyExists(project.output.clone()));
    }

    debug!(
        name = %project.name,
        output = %project.output.display(),
        tag = %project.platform_tag(),
        "rendering pyproject"
    );
    write_new_file(&project.output, &project.render())
}
