//! Windows branding and installer support.
//!
//! Branding is two ordered steps against the copied shell:
//!
//! 1. Edit `electron.exe` resources (version strings, icon, versions)
//! 2. Rename `electron.exe` to `<app name lowercased>.exe`
//!
//! Editing always targets the template file name, so the rename must come
//! second. If the rename fails after a successful edit the bundle is left
//! half-branded and the run fails.
//!
//! The [`nsis`] module builds an optional installer from the branded bundle.

pub mod nsis;
pub mod rcedit;

use crate::bundler::{
    descriptor::AppDescriptor,
    error::{Context, ErrorExt, Result},
};
use std::path::{Path, PathBuf};

pub use rcedit::{RcEdit, ResourceEditor, VersionFields};

/// Brands the Windows runtime shell.
#[derive(Debug, Clone)]
pub struct WindowsBrander {
    executable: String,
}

impl WindowsBrander {
    /// Creates a brander for the shell executable named `executable`.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Template executable inside `dir`.
    pub fn executable_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.executable)
    }

    /// Final executable name: the lowercased app name with the template's extension.
    pub fn branded_executable_name(&self, app_name: &str) -> String {
        let stem = app_name.to_lowercase();
        match Path::new(&self.executable).extension() {
            Some(ext) => format!("{}.{}", stem, ext.to_string_lossy()),
            None => stem,
        }
    }

    /// Edits the executable's resources, then renames it.
    pub async fn brand<E: ResourceEditor>(
        &self,
        app: AppDescriptor,
        editor: &E,
    ) -> Result<AppDescriptor> {
        let exe = self.executable_path(app.dir());
        let branded = self.branded_executable_name(app.name());

        log::debug!("edit app resources");
        let fields = VersionFields::from_descriptor(&app, branded.clone());
        editor
            .edit_binary_metadata(&exe, &fields)
            .await
            .context("editing executable resources")?;

        log::debug!("rename executable");
        let renamed = app.dir().join(&branded);
        tokio::fs::rename(&exe, &renamed)
            .await
            .fs_context("renaming executable", &exe)?;

        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        Platform,
        settings::{PackageSettings, SettingsBuilder},
    };
    use std::sync::Mutex;

    /// Records the edited path and whether it existed at edit time.
    #[derive(Default)]
    struct RecordingEditor {
        edits: Mutex<Vec<(PathBuf, bool)>>,
    }

    impl ResourceEditor for RecordingEditor {
        async fn edit_binary_metadata(&self, exe: &Path, _fields: &VersionFields) -> Result<()> {
            self.edits
                .lock()
                .unwrap()
                .push((exe.to_path_buf(), exe.is_file()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_edit_targets_rename_source() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("electron.exe"), b"MZ").unwrap();
        let settings = SettingsBuilder::new()
            .project_dir(tmp.path())
            .platform(Platform::Win32)
            .runtime_version(semver::Version::new(0, 36, 2))
            .package_settings(PackageSettings {
                name: "LiveStyle".into(),
                ..Default::default()
            })
            .build()
            .unwrap();
        let app = AppDescriptor::from_settings(&settings).with_dir(tmp.path());

        let brander = WindowsBrander::new("electron.exe");
        let editor = RecordingEditor::default();
        brander.brand(app, &editor).await.unwrap();

        let edits = editor.edits.lock().unwrap();
        assert_eq!(*edits, vec![(brander.executable_path(tmp.path()), true)]);
        assert!(tmp.path().join("livestyle.exe").is_file());
        assert!(!tmp.path().join("electron.exe").exists());
    }

    #[test]
    fn test_branded_name_keeps_extension() {
        let brander = WindowsBrander::new("electron.exe");
        assert_eq!(brander.branded_executable_name("LiveStyle"), "livestyle.exe");
    }
}
