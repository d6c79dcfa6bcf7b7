//! Error handling for appseed.
//! Defines the error type and result alias used throughout the application.
//!
//! Shell command failures are deliberately absent here: they are reported as
//! [`crate::runner::CommandResult`] values and never propagate as errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while bootstrapping a project.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project name (or other user input) failed validation
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The destination directory is already present.
    #[error("Destination directory '{path}' already exists.")]
    DestinationExistsError { path: String },

    /// The template registry or a template tree could not be used.
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// A single entry could not be written during materialization.
    #[error("Failed to materialize '{}': {source}.", .path.display())]
    MaterializeError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal interaction failed
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Answers supplied on stdin are not valid JSON for `ProjectAnswers`
    #[error("Answers error: {0}.")]
    AnswersError(#[from] serde_json::Error),

    /// A skip pattern could not be compiled
    #[error("Ignore pattern error: {0}.")]
    IgnorePatternError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    log::debug!("fatal: {:?}", err);
    eprintln!("{}", err);
    std::process::exit(1);
}
