//! Top-level error types for the command line tool.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for a `livestyle-dist` invocation
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument and project discovery errors
    #[error("{0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pipeline errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// A project file could not be read or parsed
    #[error("Failed to load {path}: {reason}")]
    Manifest {
        /// File being loaded
        path: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Name of the pipeline stage that failed, if the run got that far.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Self::Bundler(e) => e.stage(),
            _ => None,
        }
    }
}
