//! Error handling for gouno.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort project generation.
///
/// A template file that fails to parse is not an error: it is copied
/// verbatim instead. Everything below stops the whole copy.
#[derive(Error, Debug)]
pub enum Error {
    /// File system error tied to the path that caused it
    #[error("IO error on '{path}': {source}.")]
    PathIoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failure
    #[error("Failed to walk template directory: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// A template parsed but could not be rendered
    #[error("Template rendering failed: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Cloning the template repository failed
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    #[error("Template directory does not exist: {template_dir}.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Failure attributed to a single template entry
    #[error("Failed to process {source_path}: {e}.")]
    ProcessError { source_path: String, e: String },
}

impl Error {
    /// Wraps an I/O error together with the path it happened on.
    pub fn at_path<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::PathIoError { path: path.into(), source }
    }
}

/// Convenience type alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("Error creating project: {err}");
    std::process::exit(1);
}
