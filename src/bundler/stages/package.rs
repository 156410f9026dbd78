//! Archive packaging.

use crate::bundler::{
    archive::Archiver,
    builder::checksum::calculate_sha256,
    descriptor::AppDescriptor,
    error::{Error, ErrorExt, Result},
    platform::Platform,
    settings::Arch,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// A written archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedArchive {
    /// Absolute archive path
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Hex SHA-256 of the archive
    pub checksum: String,
}

/// Archive file name: `<name>-<osx|win|linux>[32|64]-v<version>.zip`.
///
/// The arch suffix is only used for Windows.
///
/// ```
/// use livestyle_dist::bundler::{Arch, Platform, stages::package::archive_file_name};
///
/// let v = semver::Version::new(1, 2, 0);
/// assert_eq!(archive_file_name("LiveStyle", Platform::Linux, Arch::X86_64, &v), "livestyle-linux-v1.2.0.zip");
/// ```
pub fn archive_file_name(
    name: &str,
    platform: Platform,
    arch: Arch,
    version: &semver::Version,
) -> String {
    let suffix = match platform {
        Platform::Win32 => arch.bits(),
        _ => "",
    };
    format!(
        "{}-{}{}-v{}.zip",
        name.to_lowercase(),
        platform.archive_label(),
        suffix,
        version
    )
}

/// Archives the branded bundle into `out_root` and reports size and checksum.
pub async fn package<A: Archiver>(
    app: &AppDescriptor,
    out_root: &Path,
    archiver: &A,
) -> Result<PackagedArchive> {
    let name = archive_file_name(app.name(), app.platform(), app.arch(), app.version());
    let target = out_root.join(&name);

    write_archive(app, &target, archiver)
        .await
        .map_err(|e| Error::Package {
            path: target.clone(),
            source: Box::new(e),
        })
}

async fn write_archive<A: Archiver>(
    app: &AppDescriptor,
    target: &Path,
    archiver: &A,
) -> Result<PackagedArchive> {
    let target = target
        .absolutize()
        .fs_context("resolving archive path", target)?
        .into_owned();

    let path = archiver.archive(app.dir(), &target).await?;
    let size = tokio::fs::metadata(&path)
        .await
        .fs_context("reading archive metadata", &path)?
        .len();
    let checksum = calculate_sha256(&path).await?;

    Ok(PackagedArchive {
        path,
        size,
        checksum,
    })
}
