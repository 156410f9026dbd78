//! Builder for constructing Settings.

use super::{
    Arch, PackageSettings, RuntimeSettings, Settings,
    core::{
        DEFAULT_CLEAN, DEFAULT_EXECUTABLE, DEFAULT_FILES, DEFAULT_HEADERS_URL, DEFAULT_ICON_DIR,
        DEFAULT_OUT_DIR, DEFAULT_RUNTIME_PACKAGE,
    },
};
use crate::bundler::{error::ErrorExt, platform::Platform};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use livestyle_dist::bundler::{PackageSettings, Platform, SettingsBuilder};
///
/// # fn example() -> livestyle_dist::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir(".")
///     .platform(Platform::Win32)
///     .package_settings(PackageSettings {
///         name: "LiveStyle".into(),
///         version: semver::Version::new(1, 2, 0),
///         ..Default::default()
///     })
///     .runtime_version(semver::Version::new(0, 36, 2))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_dir: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    platform: Option<Platform>,
    arch: Option<Arch>,
    runtime_package: Option<String>,
    runtime_version: Option<semver::Version>,
    executable: Option<String>,
    headers_url: Option<String>,
    files: Option<Vec<String>>,
    clean: Option<Vec<PathBuf>>,
    icon_dir: Option<PathBuf>,
    installer: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root. Required.
    ///
    /// A relative path is resolved against the current directory on build.
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output root.
    ///
    /// Default: `<project>/dist`
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets application metadata. Required.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the resolved target platform. Required.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Sets the host architecture.
    ///
    /// Default: [`Arch::detect_host`]
    pub fn arch(mut self, arch: Arch) -> Self {
        self.arch = Some(arch);
        self
    }

    /// Sets the runtime npm package.
    ///
    /// Default: `electron-prebuilt`
    pub fn runtime_package(mut self, name: impl Into<String>) -> Self {
        self.runtime_package = Some(name.into());
        self
    }

    /// Sets the installed runtime version. Required.
    pub fn runtime_version(mut self, version: semver::Version) -> Self {
        self.runtime_version = Some(version);
        self
    }

    /// Sets the executable name inside the Windows shell.
    ///
    /// Default: `electron.exe`
    pub fn executable(mut self, name: impl Into<String>) -> Self {
        self.executable = Some(name.into());
        self
    }

    /// Sets the runtime headers base URL.
    pub fn headers_url(mut self, url: impl Into<String>) -> Self {
        self.headers_url = Some(url.into());
        self
    }

    /// Sets the static application file patterns.
    pub fn files(mut self, files: Vec<String>) -> Self {
        self.files = Some(files);
        self
    }

    /// Sets the placeholder resources to remove.
    pub fn clean(mut self, clean: Vec<PathBuf>) -> Self {
        self.clean = Some(clean);
        self
    }

    /// Sets the icon directory, relative to the project.
    pub fn icon_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.icon_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Requests a Windows installer in addition to the archive.
    pub fn installer(mut self, installer: bool) -> Self {
        self.installer = installer;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_dir`, `package_settings`, `platform` or
    /// `runtime_version` is missing, or if the installer is requested for a
    /// platform other than Windows.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let project_dir = self.project_dir.context("project_dir is required")?;
        let project_dir = project_dir
            .absolutize()
            .fs_context("resolving project directory", &project_dir)?
            .into_owned();
        let platform = self.platform.context("platform is required")?;
        if self.installer && platform != Platform::Win32 {
            crate::bail!("installers are only built for win32, not {}", platform);
        }

        let out_dir = match self.out_dir {
            Some(dir) => dir
                .absolutize()
                .fs_context("resolving output directory", &dir)?
                .into_owned(),
            None => project_dir.join(DEFAULT_OUT_DIR),
        };

        let runtime = RuntimeSettings {
            package: self
                .runtime_package
                .unwrap_or_else(|| DEFAULT_RUNTIME_PACKAGE.to_string()),
            version: self.runtime_version.context("runtime_version is required")?,
            executable: self
                .executable
                .unwrap_or_else(|| DEFAULT_EXECUTABLE.to_string()),
            headers_url: self
                .headers_url
                .unwrap_or_else(|| DEFAULT_HEADERS_URL.to_string()),
        };

        Ok(Settings::new(
            self.package_settings
                .context("package_settings is required")?,
            runtime,
            project_dir,
            out_dir,
            platform,
            self.arch.unwrap_or_else(Arch::detect_host),
            self.files
                .unwrap_or_else(|| DEFAULT_FILES.iter().map(|s| s.to_string()).collect()),
            self.clean
                .unwrap_or_else(|| DEFAULT_CLEAN.iter().map(PathBuf::from).collect()),
            self.icon_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ICON_DIR)),
            self.installer,
        ))
    }
}
