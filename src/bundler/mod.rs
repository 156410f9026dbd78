//! Cross-platform distribution pipeline for runtime-shell desktop apps.
//!
//! Takes a prebuilt runtime shell from `node_modules` and turns it into a
//! branded, distributable bundle for one target platform:
//!
//! | Platform | Bundle | Branding | Archive |
//! |----------|--------|----------|---------|
//! | darwin | `<Name>.app` | verification only | `<name>-osx-v<ver>.zip` |
//! | win32 | `<name>/` | resource edit, then rename | `<name>-win<32\|64>-v<ver>.zip` (+ NSIS setup) |
//! | linux | `<name>/` | none | `<name>-linux-v<ver>.zip` |
//!
//! # Configuration
//!
//! Metadata comes from the project's `package.json`, with an optional
//! `distribute` section:
//!
//! ```json
//! {
//!   "name": "LiveStyle",
//!   "productName": "Emmet LiveStyle",
//!   "version": "1.2.0",
//!   "distribute": {
//!     "company": "Emmet.io",
//!     "iconDir": "branding/icon"
//!   }
//! }
//! ```
//!
//! See [`Distributor`] for running the pipeline from code.

#![warn(missing_docs)]

pub mod archive;
mod builder;
pub mod descriptor;
pub mod error;
pub mod native;
pub mod platform;
mod settings;
pub mod stages;
pub(crate) mod utils;

pub use archive::{Archiver, ZipArchiver};
pub use builder::{DistArtifact, Distributor};
pub use descriptor::AppDescriptor;
pub use error::{Error, Result};
pub use native::{NativeRebuilder, NodeGypRebuilder};
pub use platform::{
    Platform,
    windows::{RcEdit, ResourceEditor, VersionFields},
};
pub use settings::{
    Arch, DEFAULT_RUNTIME_PACKAGE, PackageSettings, RuntimeSettings, Settings, SettingsBuilder,
};
