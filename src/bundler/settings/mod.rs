//! Configuration structures for distribution runs.
//!
//! Application metadata, runtime shell configuration and the builder that
//! assembles them into an immutable [`Settings`].

mod arch;
mod builder;
mod core;
mod package;

pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use self::core::{DEFAULT_RUNTIME_PACKAGE, Settings};
pub use package::{PackageSettings, RuntimeSettings};
