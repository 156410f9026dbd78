//! Native add-on rebuilding against the runtime ABI.
//!
//! Native modules installed by npm are compiled for the system Node.js. The
//! runtime shell embeds its own Node.js, so every add-on under the injected
//! `node_modules` must be recompiled against the runtime's headers before the
//! bundle can load it.
//!
//! - [`headers`] - header tarball download and cache
//! - [`node_gyp`] - add-on discovery and `node-gyp rebuild`

pub mod headers;
pub mod node_gyp;

use crate::bundler::error::Result;
use std::{future::Future, path::Path};

pub use node_gyp::NodeGypRebuilder;

/// Rebuilds native add-ons for a runtime ABI version.
pub trait NativeRebuilder {
    /// Makes sure the runtime headers for `abi` are available locally.
    fn ensure_headers(&self, abi: &semver::Version) -> impl Future<Output = Result<()>> + Send;

    /// Recompiles every native add-on found under `modules_root`.
    fn rebuild_modules(
        &self,
        abi: &semver::Version,
        modules_root: &Path,
    ) -> impl Future<Output = Result<()>> + Send;
}
