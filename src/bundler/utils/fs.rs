//! File system utilities for bundling.
//!
//! Provides attribute-preserving tree copies and missing-tolerant removal.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    io,
    path::{Component, Path, PathBuf},
};
use tokio::fs;

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Copies a regular file, creating any parent directories of the destination.
///
/// Permission bits travel with the content. Fails if the source is not a file.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading file metadata", from)?;
    if !metadata.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", to)?;
    Ok(())
}

/// Recursively copies a directory tree, preserving symlinks and permissions.
///
/// Symlinks are recreated with their original target and never followed.
/// File and directory permission bits are copied exactly; directory modes are
/// applied after their contents so read-only directories can still be filled.
/// A symlink that cannot be recreated is an error.
pub async fn copy_dir_preserving(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading directory metadata", from)?;
    if !metadata.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a Directory")));
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || copy_tree_blocking(&from, &to))
        .await
        .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {}", e)))?
}

fn copy_tree_blocking(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }

    let mut dir_permissions: Vec<(PathBuf, std::fs::Permissions)> = Vec::new();

    for entry in walkdir::WalkDir::new(from).follow_links(false) {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(from)?;
        let dest_path = to.join(rel_path);
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            let target = std::fs::read_link(entry.path())
                .fs_context("reading symlink", entry.path())?;
            if entry.path().is_dir() {
                symlink_dir(&target, &dest_path).fs_context("creating symlink", &dest_path)?;
            } else {
                symlink_file(&target, &dest_path).fs_context("creating symlink", &dest_path)?;
            }
        } else if file_type.is_dir() {
            std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
            let permissions = entry.metadata()?.permissions();
            dir_permissions.push((dest_path, permissions));
        } else {
            std::fs::copy(entry.path(), &dest_path).fs_context("copying file", &dest_path)?;
            let permissions = entry.metadata()?.permissions();
            std::fs::set_permissions(&dest_path, permissions)
                .fs_context("setting permissions", &dest_path)?;
        }
    }

    // Deepest first, so a read-only parent never blocks its children.
    for (dir, permissions) in dir_permissions.into_iter().rev() {
        std::fs::set_permissions(&dir, permissions).fs_context("setting permissions", &dir)?;
    }

    Ok(())
}

/// Removes each relative path under `base_dir`.
///
/// Files, symlinks and whole directories are removed. A path that does not
/// exist is skipped: absence is the desired end state. Paths must be relative
/// and must not climb out of `base_dir`.
pub async fn remove_paths(base_dir: &Path, paths: &[PathBuf]) -> Result<()> {
    for rel in paths {
        if rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            crate::bail!("refusing to remove {:?}: not a path inside {:?}", rel, base_dir);
        }

        let target = base_dir.join(rel);
        let metadata = match fs::symlink_metadata(&target).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} already absent", target.display());
                continue;
            }
            Err(e) => {
                return Err(Error::Fs {
                    context: "inspecting",
                    path: target,
                    error: e,
                });
            }
        };

        log::debug!("removing {}", target.display());
        if metadata.is_dir() {
            fs::remove_dir_all(&target)
                .await
                .fs_context("removing directory", &target)?;
        } else {
            fs::remove_file(&target)
                .await
                .fs_context("removing file", &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_remove_paths_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("atom.icns"), b"icon").unwrap();
        std::fs::create_dir_all(tmp.path().join("default_app/lib")).unwrap();
        std::fs::write(tmp.path().join("default_app/lib/index.js"), b"").unwrap();

        let paths = vec![PathBuf::from("atom.icns"), PathBuf::from("default_app")];
        remove_paths(tmp.path(), &paths).await.unwrap();
        remove_paths(tmp.path(), &paths).await.unwrap();

        assert!(!tmp.path().join("atom.icns").exists());
        assert!(!tmp.path().join("default_app").exists());
    }

    #[tokio::test]
    async fn test_remove_paths_rejects_escape() {
        let tmp = tempfile::tempdir().unwrap();
        let result = remove_paths(tmp.path(), &[PathBuf::from("../outside")]).await;
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_copy_preserves_symlinks_and_modes() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("Electron.app");
        let versions = src.join("Contents/Frameworks/Electron Framework.framework/Versions");
        std::fs::create_dir_all(versions.join("A")).unwrap();
        std::fs::write(versions.join("A/Electron Framework"), b"\x7fbin").unwrap();
        std::fs::set_permissions(
            versions.join("A/Electron Framework"),
            std::fs::Permissions::from_mode(0o755),
        )
        .unwrap();
        std::fs::write(src.join("Contents/Info.plist"), b"<plist/>").unwrap();
        std::fs::set_permissions(
            src.join("Contents/Info.plist"),
            std::fs::Permissions::from_mode(0o640),
        )
        .unwrap();
        std::os::unix::fs::symlink("A", versions.join("Current")).unwrap();

        let dst = tmp.path().join("dist/darwin/LiveStyle.app");
        copy_dir_preserving(&src, &dst).await.unwrap();

        let copied_versions =
            dst.join("Contents/Frameworks/Electron Framework.framework/Versions");
        let link = std::fs::symlink_metadata(copied_versions.join("Current")).unwrap();
        assert!(link.file_type().is_symlink());
        assert_eq!(
            std::fs::read_link(copied_versions.join("Current")).unwrap(),
            PathBuf::from("A")
        );

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o7777;
        assert_eq!(
            mode(&copied_versions.join("A/Electron Framework")),
            mode(&versions.join("A/Electron Framework"))
        );
        assert_eq!(mode(&dst.join("Contents/Info.plist")), 0o640);
    }

    #[tokio::test]
    async fn test_copy_dir_rejects_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let result = copy_dir_preserving(&tmp.path().join("nope"), &tmp.path().join("out")).await;
        assert!(result.is_err());
    }
}
