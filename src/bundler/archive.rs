//! Zip archive creation for finished bundles.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    future::Future,
    path::{Component, Path, PathBuf},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Compresses a bundle directory into a single distributable file.
pub trait Archiver {
    /// Archives `source_dir` into `out_path` and returns the written path.
    ///
    /// Entries are rooted at the file name of `source_dir`.
    fn archive(
        &self,
        source_dir: &Path,
        out_path: &Path,
    ) -> impl Future<Output = Result<PathBuf>> + Send;
}

/// [`Archiver`] producing deflated zip files.
///
/// Symlinks are stored as symlinks and unix permission bits are kept, so a
/// macOS `.app` survives the round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    async fn archive(&self, source_dir: &Path, out_path: &Path) -> Result<PathBuf> {
        let source = source_dir.to_path_buf();
        let out = out_path.to_path_buf();
        tokio::task::spawn_blocking(move || write_zip(&source, &out).map(|()| out))
            .await
            .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))?
    }
}

fn write_zip(source_dir: &Path, out_path: &Path) -> Result<()> {
    let root = source_dir
        .file_name()
        .ok_or_else(|| Error::GenericError(format!("{} has no file name", source_dir.display())))?;
    let base = source_dir.parent().unwrap_or(source_dir);

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).fs_context("creating archive directory", parent)?;
    }
    let file = std::fs::File::create(out_path).fs_context("creating archive", out_path)?;
    let mut zip = ZipWriter::new(file);

    let walker = walkdir::WalkDir::new(source_dir)
        .follow_links(false)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        let relative = entry.path().strip_prefix(base)?;
        let name = entry_name(relative);
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(unix_mode(entry.path())?);

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            let target = std::fs::read_link(entry.path())
                .fs_context("reading symlink", entry.path())?;
            log::debug!("zip symlink {} -> {}", name, target.display());
            zip.add_symlink(name, target.to_string_lossy().into_owned(), options)?;
        } else if file_type.is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name, options)?;
            let mut input =
                std::fs::File::open(entry.path()).fs_context("reading bundle file", entry.path())?;
            std::io::copy(&mut input, &mut zip).fs_context("writing archive entry", out_path)?;
        }
    }

    zip.finish()?;
    log::debug!("archived {} as {}", source_dir.display(), root.to_string_lossy());
    Ok(())
}

/// Zip entry name with `/` separators regardless of host.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn unix_mode(path: &Path) -> Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    let meta = std::fs::symlink_metadata(path).fs_context("reading permissions", path)?;
    Ok(meta.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn unix_mode(path: &Path) -> Result<u32> {
    let meta = std::fs::symlink_metadata(path).fs_context("reading permissions", path)?;
    Ok(if meta.is_dir() { 0o755 } else { 0o644 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[tokio::test]
    async fn test_archive_roots_entries_at_bundle_name() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = tmp.path().join("win32/livestyle");
        std::fs::create_dir_all(bundle.join("resources/app")).unwrap();
        std::fs::write(bundle.join("livestyle.exe"), b"MZ").unwrap();
        std::fs::write(bundle.join("resources/app/main.js"), b"require('./lib')").unwrap();

        let out = tmp.path().join("livestyle-win64-v1.2.0.zip");
        let written = ZipArchiver.archive(&bundle, &out).await.unwrap();
        assert_eq!(written, out);

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&out).unwrap()).unwrap();
        let mut main_js = String::new();
        archive
            .by_name("livestyle/resources/app/main.js")
            .unwrap()
            .read_to_string(&mut main_js)
            .unwrap();
        assert_eq!(main_js, "require('./lib')");
        assert!(archive.by_name("livestyle/livestyle.exe").is_ok());
        assert!(archive.file_names().all(|n| n.starts_with("livestyle")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_archive_keeps_modes_and_symlinks() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let bundle = tmp.path().join("LiveStyle.app");
        let macos = bundle.join("Contents/MacOS");
        std::fs::create_dir_all(&macos).unwrap();
        std::fs::write(macos.join("Electron"), b"\xCF\xFA\xED\xFE").unwrap();
        std::fs::set_permissions(macos.join("Electron"), std::fs::Permissions::from_mode(0o755))
            .unwrap();
        std::os::unix::fs::symlink("MacOS/Electron", bundle.join("Contents/Current")).unwrap();

        let out = tmp.path().join("livestyle-osx-v1.2.0.zip");
        ZipArchiver.archive(&bundle, &out).await.unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&out).unwrap()).unwrap();
        let exe = archive.by_name("LiveStyle.app/Contents/MacOS/Electron").unwrap();
        assert_eq!(exe.unix_mode().map(|m| m & 0o777), Some(0o755));
        drop(exe);

        let link = archive.by_name("LiveStyle.app/Contents/Current").unwrap();
        assert!(link.is_symlink());
    }

    #[tokio::test]
    async fn test_archive_large_file_intact() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = tmp.path().join("livestyle");
        std::fs::create_dir_all(&bundle).unwrap();
        let content: Vec<u8> = (0..3 * 1024 * 1024u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(bundle.join("electron"), &content).unwrap();

        let out = tmp.path().join("livestyle-linux-v1.2.0.zip");
        ZipArchiver.archive(&bundle, &out).await.unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&out).unwrap()).unwrap();
        let mut entry = archive.by_name("livestyle/electron").unwrap();
        assert_eq!(entry.size(), content.len() as u64);
        let mut read = Vec::new();
        entry.read_to_end(&mut read).unwrap();
        assert!(read == content);
    }
}
