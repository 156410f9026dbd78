//! Runtime header cache.
//!
//! Headers live in a `node-gyp` dev dir (`~/.electron-gyp/<version>`), the
//! same layout `node-gyp --devdir` expects, so the rebuild step never has to
//! download anything itself.

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    utils::http,
};
use std::path::{Component, Path, PathBuf};

/// Marker `node-gyp` writes once a header set is fully installed.
const INSTALL_MARKER: &str = "installVersion";

/// Install layout version recorded in the marker.
const INSTALL_VERSION: &str = "9";

/// Default header cache root.
pub fn default_dev_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".electron-gyp")
}

/// URL of the header tarball for `version`.
pub fn tarball_url(base_url: &str, version: &semver::Version) -> String {
    format!(
        "{}/v{version}/node-v{version}-headers.tar.gz",
        base_url.trim_end_matches('/')
    )
}

/// Ensures headers for `version` are unpacked under `dev_dir`.
///
/// Returns the version directory. A directory carrying the install marker is
/// trusted as-is; otherwise the tarball is downloaded and unpacked.
pub async fn ensure(base_url: &str, version: &semver::Version, dev_dir: &Path) -> Result<PathBuf> {
    let target = dev_dir.join(version.to_string());
    let marker = target.join(INSTALL_MARKER);

    if tokio::fs::try_exists(&marker)
        .await
        .fs_context("checking header cache", &marker)?
    {
        log::debug!("headers for {} already cached in {}", version, target.display());
        return Ok(target);
    }

    let bytes = http::download(&tarball_url(base_url, version)).await?;

    tokio::fs::create_dir_all(&target)
        .await
        .fs_context("creating header cache", &target)?;

    let unpack_dir = target.clone();
    tokio::task::spawn_blocking(move || unpack(&bytes, &unpack_dir))
        .await
        .map_err(|e| Error::GenericError(format!("Header unpack task panicked: {}", e)))??;

    tokio::fs::write(&marker, INSTALL_VERSION)
        .await
        .fs_context("writing header install marker", &marker)?;

    log::info!("Installed runtime headers {} into {}", version, target.display());
    Ok(target)
}

/// Unpacks a gzipped header tarball, dropping its top-level directory.
pub(crate) fn unpack(bytes: &[u8], dest: &Path) -> Result<()> {
    let decoder = flate2::read::GzDecoder::new(bytes);
    let mut archive = tar::Archive::new(decoder);

    for entry in archive.entries().fs_context("reading header archive", dest)? {
        let mut entry = entry.fs_context("reading header archive", dest)?;
        let path = entry
            .path()
            .fs_context("reading header archive", dest)?
            .into_owned();

        if path.components().any(|c| {
            matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        }) {
            crate::bail!("header archive entry escapes its root: {}", path.display());
        }

        let relative: PathBuf = path
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .skip(1)
            .collect();
        if relative.as_os_str().is_empty() {
            continue;
        }

        let out = dest.join(&relative);
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent).fs_context("creating header directory", parent)?;
        }
        entry.unpack(&out).fs_context("unpacking header", &out)?;
    }

    Ok(())
}
