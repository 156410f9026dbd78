//! Platform branding.

use crate::bundler::{
    descriptor::AppDescriptor,
    error::{Error, Result},
    platform::{
        Platform,
        linux::LinuxBrander,
        macos::MacOsBrander,
        windows::{ResourceEditor, WindowsBrander},
    },
};

/// Branding strategy, chosen once per run from the target platform.
#[derive(Debug, Clone)]
pub enum Brander {
    /// Verifies the `.app` bundle
    MacOs(MacOsBrander),
    /// Edits executable resources, then renames the executable
    Windows(WindowsBrander),
    /// Leaves the shell as copied
    Linux(LinuxBrander),
}

impl Brander {
    /// Selects the brander for `platform`. `executable` is the Windows shell's
    /// executable name.
    pub fn for_platform(platform: Platform, executable: &str) -> Self {
        match platform {
            Platform::Darwin => Self::MacOs(MacOsBrander),
            Platform::Win32 => Self::Windows(WindowsBrander::new(executable)),
            Platform::Linux => Self::Linux(LinuxBrander),
        }
    }

    /// Applies branding to the working copy.
    pub async fn brand<E: ResourceEditor>(
        &self,
        app: AppDescriptor,
        editor: &E,
    ) -> Result<AppDescriptor> {
        let path = match self {
            Self::Windows(brander) => brander.executable_path(app.dir()),
            _ => app.dir().to_path_buf(),
        };

        let result = match self {
            Self::MacOs(brander) => brander.brand(app).await,
            Self::Windows(brander) => brander.brand(app, editor).await,
            Self::Linux(brander) => brander.brand(app).await,
        };

        result.map_err(|e| Error::Brand {
            path,
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        platform::windows::VersionFields,
        settings::{PackageSettings, SettingsBuilder},
    };
    use std::path::Path;

    struct RefusingEditor;

    impl ResourceEditor for RefusingEditor {
        async fn edit_binary_metadata(&self, _exe: &Path, _fields: &VersionFields) -> Result<()> {
            crate::bail!("resource table is locked")
        }
    }

    fn app(platform: Platform, dir: &Path) -> AppDescriptor {
        let settings = SettingsBuilder::new()
            .project_dir(dir)
            .platform(platform)
            .runtime_version(semver::Version::new(0, 36, 2))
            .package_settings(PackageSettings {
                name: "LiveStyle".into(),
                ..Default::default()
            })
            .build()
            .unwrap();
        AppDescriptor::from_settings(&settings).with_dir(dir)
    }

    #[test]
    fn test_selected_once_per_platform() {
        assert!(matches!(
            Brander::for_platform(Platform::Darwin, "electron.exe"),
            Brander::MacOs(_)
        ));
        assert!(matches!(
            Brander::for_platform(Platform::Win32, "electron.exe"),
            Brander::Windows(_)
        ));
        assert!(matches!(
            Brander::for_platform(Platform::Linux, "electron.exe"),
            Brander::Linux(_)
        ));
    }

    #[tokio::test]
    async fn test_failed_edit_is_brand_error_and_keeps_executable() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("electron.exe"), b"MZ").unwrap();

        let brander = Brander::for_platform(Platform::Win32, "electron.exe");
        let err = brander
            .brand(app(Platform::Win32, tmp.path()), &RefusingEditor)
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some("brand"));
        assert!(tmp.path().join("electron.exe").exists());
        assert!(!tmp.path().join("livestyle.exe").exists());
    }

    #[tokio::test]
    async fn test_macos_requires_info_plist() {
        let tmp = tempfile::tempdir().unwrap();
        let brander = Brander::for_platform(Platform::Darwin, "electron.exe");
        let err = brander
            .brand(app(Platform::Darwin, tmp.path()), &RefusingEditor)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Info.plist"));
    }

    #[tokio::test]
    async fn test_macos_check_failure_is_not_reported_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("LiveStyle.app");
        std::fs::write(&blocker, b"").unwrap();

        let err = Brander::for_platform(Platform::Darwin, "electron.exe")
            .brand(app(Platform::Darwin, &blocker), &RefusingEditor)
            .await
            .unwrap_err();
        assert_eq!(err.stage(), Some("brand"));
        assert!(err.to_string().contains("checking bundle manifest"));
        assert!(!err.to_string().contains("is missing"));
    }

    #[tokio::test]
    async fn test_linux_is_pass_through() {
        let tmp = tempfile::tempdir().unwrap();
        let before = app(Platform::Linux, tmp.path());
        let after = Brander::for_platform(Platform::Linux, "electron.exe")
            .brand(before.clone(), &RefusingEditor)
            .await
            .unwrap();
        assert_eq!(before, after);
    }
}
