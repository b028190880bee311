//! Error handling for strata.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can abort a scaffold run.
///
/// Every variant is fatal: nothing is retried and work already written to
/// disk is left in place.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file is missing, unreadable or invalid, or the
    /// configuration failed validation.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A directory could not be created or a file could not be written.
    #[error("IO error: {source} ('{}').", .path.display())]
    IoError {
        /// Path the failed operation was targeting
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file template failed to render.
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a closure that wraps an [`io::Error`] together with the path
    /// it happened on, for use with `map_err`.
    pub fn io_at<P: AsRef<Path>>(path: P) -> impl FnOnce(io::Error) -> Error {
        let path = path.as_ref().to_path_buf();
        move |source| Error::IoError { path, source }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
