//! Distribution tool for desktop apps built on a prebuilt runtime shell.
//!
//! Copies the runtime shell, injects the application, rebuilds native
//! add-ons, brands the result per platform and archives it. Usable as the
//! `livestyle-dist` binary or as a library through [`bundler::Distributor`].

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
