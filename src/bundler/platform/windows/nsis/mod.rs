//! Windows NSIS installer creation.
//!
//! Wraps a branded Windows bundle into a per-user setup executable: files go
//! to `%LOCALAPPDATA%\<app>`, a Start Menu shortcut points at the branded
//! executable and an uninstaller is registered under `HKCU`.
//!
//! - `template` - NSI script template
//! - `script` - NSI script generation from the descriptor
//! - `build` - makensis execution
//! - `utils` - version formatting and BOM output

mod build;
mod script;
mod template;
mod utils;

use crate::bundler::{
    builder::tool_detection::HAS_MAKENSIS,
    descriptor::AppDescriptor,
    error::{Error, ErrorExt, Result},
};
use std::path::{Path, PathBuf};

const INSTALL_HINT: &str = "Install NSIS (e.g. `apt install nsis` or `brew install makensis`).";

/// Setup file name: `<name>-win<bits>-setup-v<version>.exe`.
pub fn installer_file_name(app: &AppDescriptor) -> String {
    format!(
        "{}-win{}-setup-v{}.exe",
        app.name().to_lowercase(),
        app.arch().bits(),
        app.version()
    )
}

/// Builds an installer from the branded bundle described by `app`.
///
/// `executable` is the branded executable name the shortcut targets. The
/// generated script is kept next to the installer in `<out_dir>/.nsis`.
pub async fn build_installer(
    app: &AppDescriptor,
    executable: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    if !*HAS_MAKENSIS {
        return Err(Error::ToolNotFound {
            tool: "makensis",
            hint: INSTALL_HINT,
        });
    }

    log::info!("Building NSIS installer for {}", app.product_name());

    let work_dir = out_dir.join(".nsis");
    tokio::fs::create_dir_all(&work_dir)
        .await
        .fs_context("creating NSIS work directory", &work_dir)?;

    let nsi_path = script::generate_nsi_script(app, executable, &work_dir).await?;
    let installer_path = out_dir.join(installer_file_name(app));
    build::run_makensis(&nsi_path, &installer_path).await?;

    log::info!("Created NSIS installer: {}", installer_path.display());
    Ok(installer_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        Platform,
        settings::{Arch, PackageSettings, SettingsBuilder},
    };

    #[test]
    fn test_installer_file_name() {
        let settings = SettingsBuilder::new()
            .project_dir("/work/livestyle")
            .platform(Platform::Win32)
            .arch(Arch::X86)
            .runtime_version(semver::Version::new(0, 36, 2))
            .package_settings(PackageSettings {
                name: "LiveStyle".into(),
                version: semver::Version::new(1, 2, 0),
                ..Default::default()
            })
            .build()
            .unwrap();
        let app = AppDescriptor::from_settings(&settings);
        assert_eq!(installer_file_name(&app), "livestyle-win32-setup-v1.2.0.exe");
    }
}
