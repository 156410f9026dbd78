//! Core Settings struct and implementations.

use super::{Arch, PackageSettings, RuntimeSettings};
use crate::bundler::platform::Platform;
use std::path::{Path, PathBuf};

/// Application files copied into the bundle when `distribute.files` is unset.
pub const DEFAULT_FILES: &[&str] = &[
    "assets/**/*",
    "lib/**/*",
    "ui/**/*",
    "main.js",
    "backend.js",
    "index.html",
    "package.json",
];

/// Placeholder resources shipped with the pristine runtime shell.
pub const DEFAULT_CLEAN: &[&str] = &["atom.icns", "default_app"];

/// npm package providing the prebuilt runtime.
pub const DEFAULT_RUNTIME_PACKAGE: &str = "electron-prebuilt";

/// Executable name inside the pristine Windows shell.
pub const DEFAULT_EXECUTABLE: &str = "electron.exe";

/// Where runtime header tarballs are served.
pub const DEFAULT_HEADERS_URL: &str = "https://electronjs.org/headers";

/// Default icon directory, relative to the project.
pub const DEFAULT_ICON_DIR: &str = "branding/icon";

/// Default output root, relative to the project.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Main settings for a distribution run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Immutable for
/// the duration of the run.
#[derive(Clone, Debug)]
pub struct Settings {
    package: PackageSettings,
    runtime: RuntimeSettings,
    project_dir: PathBuf,
    out_dir: PathBuf,
    platform: Platform,
    arch: Arch,
    files: Vec<String>,
    clean: Vec<PathBuf>,
    icon_dir: PathBuf,
    installer: bool,
}

impl Settings {
    /// Returns the application metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the runtime shell configuration.
    pub fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    /// Project root containing `package.json` and `node_modules`.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Output root. Working bundles land in `<out>/<platform>/`, archives in `<out>/`.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Resolved target platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Host architecture.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Static glob patterns of application files, relative to the project.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Placeholder paths removed from the resource directory.
    pub fn clean(&self) -> &[PathBuf] {
        &self.clean
    }

    /// Whether a Windows installer should be built after the archive.
    pub fn installer(&self) -> bool {
        self.installer
    }

    /// Pristine runtime shell for the target platform.
    pub fn template_dir(&self) -> PathBuf {
        let dist = self
            .project_dir
            .join("node_modules")
            .join(&self.runtime.package)
            .join("dist");
        match self.platform.template_subdir() {
            "" => dist,
            sub => dist.join(sub),
        }
    }

    /// Platform icon, e.g. `branding/icon/livestyle.ico`.
    pub fn icon_path(&self) -> PathBuf {
        self.project_dir.join(&self.icon_dir).join(format!(
            "{}.{}",
            self.package.name.to_lowercase(),
            self.platform.icon_extension()
        ))
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        package: PackageSettings,
        runtime: RuntimeSettings,
        project_dir: PathBuf,
        out_dir: PathBuf,
        platform: Platform,
        arch: Arch,
        files: Vec<String>,
        clean: Vec<PathBuf>,
        icon_dir: PathBuf,
        installer: bool,
    ) -> Self {
        Self {
            package,
            runtime,
            project_dir,
            out_dir,
            platform,
            arch,
            files,
            clean,
            icon_dir,
            installer,
        }
    }
}
