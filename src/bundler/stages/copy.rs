//! Working copy of the runtime shell.

use crate::bundler::{
    descriptor::AppDescriptor,
    error::{Error, ErrorExt, Result},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Where the working copy of `app` lives under `out_root`.
pub fn destination(app: &AppDescriptor, out_root: &Path) -> PathBuf {
    out_root.join(app.platform().id()).join(app.app_dir_name())
}

/// Copies the pristine shell at `app.dir()` to
/// `<out_root>/<platform>/<app_dir_name>` and relocates the descriptor there.
///
/// A destination left by an earlier run is erased first. A failed copy is left
/// in place for inspection.
pub async fn copy(app: AppDescriptor, out_root: &Path) -> Result<AppDescriptor> {
    let from = app.dir().to_path_buf();
    let to = destination(&app, out_root);

    copy_shell(&from, &to).await.map_err(|e| Error::Copy {
        from: from.clone(),
        to: to.clone(),
        source: Box::new(e),
    })?;

    Ok(app.with_dir(to))
}

async fn copy_shell(from: &Path, to: &Path) -> Result<()> {
    if from == to {
        crate::bail!("destination is the template itself");
    }
    if !tokio::fs::try_exists(from)
        .await
        .fs_context("checking runtime shell", from)?
    {
        crate::bail!("runtime shell not found; is the runtime package installed?");
    }

    log::debug!("copy {} -> {}", from.display(), to.display());
    fs::remove_dir_all(to).await?;
    fs::copy_dir_preserving(from, to).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        Platform,
        settings::{Arch, PackageSettings, SettingsBuilder},
    };

    fn app(project: &Path, platform: Platform) -> AppDescriptor {
        let settings = SettingsBuilder::new()
            .project_dir(project)
            .platform(platform)
            .arch(Arch::X86_64)
            .runtime_version(semver::Version::new(0, 36, 2))
            .package_settings(PackageSettings {
                name: "LiveStyle".into(),
                version: semver::Version::new(1, 2, 0),
                ..Default::default()
            })
            .build()
            .unwrap();
        AppDescriptor::from_settings(&settings)
    }

    #[tokio::test]
    async fn test_copy_relocates_and_replaces_stale_copy() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app(tmp.path(), Platform::Win32);
        let template = app.dir().to_path_buf();
        std::fs::create_dir_all(template.join("resources")).unwrap();
        std::fs::write(template.join("electron.exe"), b"MZ").unwrap();

        let out = tmp.path().join("dist");
        let stale = out.join("win32/livestyle");
        std::fs::create_dir_all(&stale).unwrap();
        std::fs::write(stale.join("leftover.txt"), b"old").unwrap();

        let copied = copy(app, &out).await.unwrap();
        assert_eq!(copied.dir(), stale.as_path());
        assert!(stale.join("electron.exe").is_file());
        assert!(!stale.join("leftover.txt").exists());
        assert!(template.join("electron.exe").is_file());
    }

    #[tokio::test]
    async fn test_missing_template_is_copy_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy(app(tmp.path(), Platform::Darwin), &tmp.path().join("dist"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Copy { .. }));
        assert!(err.to_string().contains("LiveStyle.app"));
    }

    #[tokio::test]
    async fn test_unreadable_template_path_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();
        let app = app(tmp.path(), Platform::Linux).with_dir(blocker.join("electron"));

        let err = copy(app, &tmp.path().join("dist")).await.unwrap_err();
        assert!(matches!(err, Error::Copy { .. }));
        assert!(err.to_string().contains("checking runtime shell"));
        assert!(!err.to_string().contains("not found"));
    }
}
