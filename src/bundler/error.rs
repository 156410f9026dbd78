//! Error types for distribution pipeline operations.
//!
//! Provides contextual error chaining, filesystem-specific errors and one
//! variant per pipeline stage, so the top-level caller can tell exactly which
//! stage stopped the run and which path or version was in play.
//!
//! # Features
//!
//! - **Context trait**: Add context to errors similar to anyhow
//! - **ErrorExt trait**: Filesystem operations with automatic path context
//! - **bail! macro**: Early return with formatted error messages
//!
//! # Example
//!
//! ```no_run
//! # use std::path::{Path, PathBuf};
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
//! #
//! # trait ErrorExt<T> {
//! #     fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
//! # }
//! # impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
//! #     fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
//! #         self.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
//! #     }
//! # }
//! fn read_manifest(path: &Path) -> Result<String> {
//!     let contents = std::fs::read_to_string(path)
//!         .fs_context("reading package manifest", path)?;
//!     Ok(contents)
//! }
//! ```

use std::{
    fmt::Display,
    io,
    path::{self, PathBuf},
};
use thiserror::Error as DeriveError;

/// Errors returned by the distribution pipeline.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// The requested (or host) platform is absent or not supported.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Copying the pristine runtime shell failed.
    #[error("failed to copy runtime shell from {from} to {to}: {source}")]
    Copy {
        /// Template directory
        from: PathBuf,
        /// Working copy destination
        to: PathBuf,
        /// Originating failure
        source: Box<Self>,
    },

    /// Removing placeholder resources failed.
    #[error("failed to clean placeholder resources in {dir}: {source}")]
    Cleanup {
        /// Resource directory being cleaned
        dir: PathBuf,
        /// Originating failure
        source: Box<Self>,
    },

    /// Copying application files into the bundle failed.
    #[error("failed to inject application files into {dest}: {source}")]
    Injection {
        /// Destination `app` directory
        dest: PathBuf,
        /// Originating failure
        source: Box<Self>,
    },

    /// Fetching runtime headers or recompiling a native module failed.
    #[error("failed to rebuild native modules for runtime {version}: {source}")]
    Rebuild {
        /// Runtime ABI version
        version: semver::Version,
        /// Originating failure
        source: Box<Self>,
    },

    /// Applying platform branding failed. The bundle is inconsistent.
    #[error("failed to brand {path}: {source}")]
    Brand {
        /// Executable or bundle being branded
        path: PathBuf,
        /// Originating failure
        source: Box<Self>,
    },

    /// Producing the distributable archive failed.
    #[error("failed to package {path}: {source}")]
    Package {
        /// Archive output path
        path: PathBuf,
        /// Originating failure
        source: Box<Self>,
    },

    /// Building the Windows installer failed.
    #[error("failed to build installer {path}: {source}")]
    Installer {
        /// Installer output path
        path: PathBuf,
        /// Originating failure
        source: Box<Self>,
    },

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "reading package manifest")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Child process could not be started.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Command that failed to execute
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// Child process ran but exited unsuccessfully.
    #[error("command {command} exited with {status}: {stderr}")]
    CommandStatus {
        /// Command that failed
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// A required external tool is not installed.
    #[error("{tool} not found in PATH. {hint}")]
    ToolNotFound {
        /// Tool binary name
        tool: &'static str,
        /// Installation hint
        hint: &'static str,
    },

    /// Generic I/O error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Error walking directory.
    #[error("{0}")]
    WalkdirError(#[from] walkdir::Error),

    /// Path prefix stripping error.
    #[error("{0}")]
    StripError(#[from] path::StripPrefixError),

    /// ZIP archive creation error.
    #[error("{0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Invalid glob pattern.
    #[error("{0}")]
    GlobPattern(#[from] glob::PatternError),

    /// Glob execution error.
    #[error("{0}")]
    Glob(#[from] glob::GlobError),

    /// Handlebars template rendering error.
    #[error("{0}")]
    HandleBarsError(#[from] handlebars::RenderError),

    /// Handlebars template parsing error.
    #[error("{0}")]
    Template(#[from] handlebars::TemplateError),

    /// JSON serialization/deserialization error.
    #[error("{0}")]
    JsonError(#[from] serde_json::error::Error),

    /// HTTP client error (downloading runtime headers).
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Semantic version parsing error.
    #[error("{0}")]
    SemverError(#[from] semver::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Name of the pipeline stage this error aborted, if it is a stage error.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedPlatform(_) => Some("resolve"),
            Self::Copy { .. } => Some("copy"),
            Self::Cleanup { .. } => Some("clean"),
            Self::Injection { .. } => Some("inject"),
            Self::Rebuild { .. } => Some("rebuild"),
            Self::Brand { .. } => Some("brand"),
            Self::Package { .. } => Some("package"),
            Self::Installer { .. } => Some("installer"),
            Self::Context(_, inner) => inner.stage(),
            _ => None,
        }
    }
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with the bundler's Error type.
/// Works with both `Result<T, E>` and `Option<T>`.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Extension trait for filesystem operations with automatic path context.
///
/// ```no_run
/// # use std::path::{Path, PathBuf};
/// # type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
/// # trait ErrorExt<T> {
/// #     fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
/// # }
/// # impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
/// #     fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
/// #         self.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
/// #     }
/// # }
/// fn create_output_dir(path: &Path) -> Result<()> {
///     std::fs::create_dir_all(path)
///         .fs_context("creating output directory", path)?;
///     Ok(())
/// }
/// ```
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading file", "creating directory", "copying binary".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Macro for early return with error.
///
/// Converts the message into a [`Error::GenericError`] and returns immediately.
///
/// ```ignore
/// bail!("operation failed");
/// bail!("invalid value: {}", value);
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::error::Error::GenericError($msg.into()))
    };
    ($err:expr $(,)?) => {
        return Err($crate::bundler::error::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
