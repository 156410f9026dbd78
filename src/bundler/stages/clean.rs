//! Placeholder removal.

use crate::bundler::{
    descriptor::AppDescriptor,
    error::{Error, Result},
    utils::fs,
};
use std::path::PathBuf;

/// Deletes the runtime's placeholder resources (`atom.icns`, `default_app`, ...)
/// from the copied resource directory. Already-absent entries are fine.
pub async fn clean(app: AppDescriptor, placeholders: &[PathBuf]) -> Result<AppDescriptor> {
    let dir = app.resource_dir();
    fs::remove_paths(&dir, placeholders)
        .await
        .map_err(|e| Error::Cleanup {
            dir: dir.clone(),
            source: Box::new(e),
        })?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        Platform,
        settings::{PackageSettings, SettingsBuilder},
    };

    #[tokio::test]
    async fn test_clean_twice() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .project_dir(tmp.path())
            .platform(Platform::Linux)
            .runtime_version(semver::Version::new(0, 36, 2))
            .package_settings(PackageSettings {
                name: "LiveStyle".into(),
                ..Default::default()
            })
            .build()
            .unwrap();
        let app = AppDescriptor::from_settings(&settings).with_dir(tmp.path().join("livestyle"));
        let res = app.resource_dir();
        std::fs::create_dir_all(res.join("default_app")).unwrap();
        std::fs::write(res.join("default_app/main.js"), b"").unwrap();
        std::fs::write(res.join("atom.icns"), b"").unwrap();
        std::fs::write(res.join("electron.asar"), b"").unwrap();

        let app = clean(app, settings.clean()).await.unwrap();
        let app = clean(app, settings.clean()).await.unwrap();
        assert!(!res.join("default_app").exists());
        assert!(!res.join("atom.icns").exists());
        assert!(app.resource_dir().join("electron.asar").exists());
    }

    #[tokio::test]
    async fn test_escaping_placeholder_is_cleanup_error() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .project_dir(tmp.path())
            .platform(Platform::Linux)
            .runtime_version(semver::Version::new(0, 36, 2))
            .package_settings(PackageSettings::default())
            .build()
            .unwrap();
        let app = AppDescriptor::from_settings(&settings);
        let err = clean(app, &[PathBuf::from("../outside")]).await.unwrap_err();
        assert_eq!(err.stage(), Some("clean"));
    }

    #[tokio::test]
    async fn test_inspection_failure_is_cleanup_error() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .project_dir(tmp.path())
            .platform(Platform::Linux)
            .runtime_version(semver::Version::new(0, 36, 2))
            .package_settings(PackageSettings::default())
            .build()
            .unwrap();
        let app = AppDescriptor::from_settings(&settings).with_dir(tmp.path().join("livestyle"));
        let res = app.resource_dir();
        std::fs::create_dir_all(&res).unwrap();
        std::fs::write(res.join("atom.icns"), b"").unwrap();

        // Looking inside a regular file fails with something other than NotFound.
        let err = clean(app, &[PathBuf::from("atom.icns/inner")])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Cleanup { .. }));
        assert_eq!(err.stage(), Some("clean"));
        assert!(err.to_string().contains("inspecting"));
        assert!(res.join("atom.icns").is_file());
    }
}
