//! Error handling for embedsmith.
//! Defines the error kinds a generation run can end with and the
//! handler that reports them to the user.

use std::io;
use thiserror::Error;

/// Errors that can end a generation run.
///
/// Every variant is fatal to the run it occurs in; the pipeline never retries.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration document could not be read or parsed.
    #[error("Failed to load configuration from '{path}': {reason}")]
    ConfigLoadError { path: String, reason: String },

    /// A template identifier has no template in the active store.
    #[error("Template not found: {template_id}")]
    TemplateNotFound { template_id: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// The user declined to overwrite an existing project directory.
    #[error("Operation cancelled: '{output_dir}' already exists and was not overwritten")]
    UserCancelled { output_dir: String },

    /// The run was interrupted by the user (Ctrl-C or SIGINT).
    #[error("Operation interrupted by user")]
    Interrupted,

    /// The interactive prompt could not be shown or read.
    #[error("Prompt error: {0}")]
    PromptError(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
                Error::Interrupted
            }
            dialoguer::Error::IO(e) => Error::PromptError(e.to_string()),
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Reports an interrupt as [`Error::Interrupted`] and exits with status 1.
///
/// Whatever was written before the interrupt stays on disk.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| default_error_handler(Error::Interrupted))
        .map_err(|e| Error::IoError(io::Error::other(e.to_string())))
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    log::debug!("{err:?}");
    eprintln!("Error: {err}");
    std::process::exit(1);
}
