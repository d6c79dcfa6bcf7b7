//! Seeds the project's `.env` from the template's example file.

use std::fs::{self, File};
use std::path::Path;

use log::debug;

use crate::constants::{ENV_EXAMPLE_FILE, ENV_FILE};
use crate::error::Result;
use crate::report::Reporter;
use crate::runner::CommandResult;

/// Creates an empty `.env` in `project_dir`, then fills it with the bytes of
/// `<template_root>/.env.example`.
///
/// A missing example file leaves the empty `.env` in place and reports a failure.
pub fn seed_env_file<P: AsRef<Path>, Q: AsRef<Path>>(
    template_root: P,
    project_dir: Q,
    reporter: &dyn Reporter,
) -> CommandResult {
    reporter.start("Creating .env file...");
    match copy_env_example(template_root.as_ref(), project_dir.as_ref()) {
        Ok(()) => {
            reporter.success(".env file created successfully");
            CommandResult::ok()
        }
        Err(e) => {
            reporter.failure(&format!("Error creating .env file: {}", e));
            CommandResult::failed()
        }
    }
}

fn copy_env_example(template_root: &Path, project_dir: &Path) -> Result<()> {
    let env_path = project_dir.join(ENV_FILE);
    File::create(&env_path)?;

    let example = template_root.join(ENV_EXAMPLE_FILE);
    debug!("Copying {} to {}", example.display(), env_path.display());
    let content = fs::read(&example)?;
    fs::write(&env_path, content)?;
    Ok(())
}
