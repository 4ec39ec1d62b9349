//! Error handling for goscaf.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while configuring, generating or installing a scaffold.
///
/// Configuration and command errors are fatal. `FileWriteError` is recorded per
/// file by the materializer and does not stop the run on its own.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The operator aborted one of the prompts
    #[error("Operation cancelled by user.")]
    OperationCancelled,

    /// Unknown framework/database/orm or a key without a template
    #[error("Invalid configuration: {0}.")]
    InvalidConfiguration(String),

    /// Represents validation failures in user input or generated paths
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors while reading pre-supplied answers
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// A single generated file could not be written
    #[error("Failed to write '{path}': {source}.")]
    FileWriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An installer command could not be spawned or exited non-zero
    #[error("Command '{command}' failed: {reason}.")]
    CommandExecutionError { command: String, reason: String },

    #[error(
        "Project directory '{output_dir}' already exists and is not empty. Use --force to write into it."
    )]
    OutputDirectoryExistsError { output_dir: String },

    /// Some files were not written; the scaffold on disk is partial
    #[error("Scaffold is incomplete: {failed} file(s) could not be written.")]
    IncompleteScaffold { failed: usize },
}

/// Convenience type alias for Results with goscaf's `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
