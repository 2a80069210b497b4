use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all settler operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SettlerError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required key is absent (or empty) in the properties file.
    ///
    /// This is fatal: settings evaluation aborts without substituting a
    /// default and without retrying.
    #[error("{key} not set in {}", .path.display())]
    #[diagnostic(help("set the `{key}` property in the local properties file"))]
    MissingConfigurationKey { key: String, path: PathBuf },

    /// The project root (directory holding `local.properties`) could not be located.
    #[error("Settings error: {message}")]
    Settings { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SettlerResult<T> = miette::Result<T>;
