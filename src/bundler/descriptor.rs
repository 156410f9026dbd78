//! The application descriptor threaded through the pipeline.

use crate::bundler::{
    platform::Platform,
    settings::{Arch, Settings},
};
use std::path::{Path, PathBuf};

/// Immutable description of the bundle being distributed.
///
/// Created from [`Settings`] before any stage runs. `dir` starts at the
/// pristine template and is replaced exactly once, by the copy stage, through
/// [`with_dir`](Self::with_dir). Every other field is fixed for the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppDescriptor {
    id: String,
    name: String,
    product_name: String,
    company_name: String,
    description: String,
    copyright: String,
    icon: PathBuf,
    dir: PathBuf,
    resource_dir_name: PathBuf,
    app_dir_name: String,
    version: semver::Version,
    platform: Platform,
    arch: Arch,
}

impl AppDescriptor {
    /// Builds the initial descriptor, pointing at the pristine template.
    pub fn from_settings(settings: &Settings) -> Self {
        let package = settings.package();
        let platform = settings.platform();
        Self {
            id: package.id.clone(),
            name: package.name.clone(),
            product_name: package.product_name.clone(),
            company_name: package.company.clone(),
            description: package.description.clone(),
            copyright: package.copyright.clone(),
            icon: settings.icon_path(),
            dir: settings.template_dir(),
            resource_dir_name: PathBuf::from(platform.resource_dir_name()),
            app_dir_name: platform.app_dir_name(&package.name),
            version: package.version.clone(),
            platform,
            arch: settings.arch(),
        }
    }

    /// Returns a copy of this descriptor relocated to `dir`.
    pub fn with_dir(self, dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..self
        }
    }

    /// Stable application identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Application name, e.g. `LiveStyle`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product name for executable version strings.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Company name for executable version strings.
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// File description for executable version strings.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Legal copyright for executable version strings.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Platform icon.
    pub fn icon(&self) -> &Path {
        &self.icon
    }

    /// Current bundle location.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resource directory relative to [`dir`](Self::dir).
    pub fn resource_dir_name(&self) -> &Path {
        &self.resource_dir_name
    }

    /// Absolute resource directory of the current bundle.
    pub fn resource_dir(&self) -> PathBuf {
        self.dir.join(&self.resource_dir_name)
    }

    /// Injected application root, `<dir>/<resource dir>/app`.
    pub fn app_resources_dir(&self) -> PathBuf {
        self.resource_dir().join("app")
    }

    /// Final on-disk bundle name.
    pub fn app_dir_name(&self) -> &str {
        &self.app_dir_name
    }

    /// Application version.
    pub fn version(&self) -> &semver::Version {
        &self.version
    }

    /// Target platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Host architecture.
    pub fn arch(&self) -> Arch {
        self.arch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{PackageSettings, SettingsBuilder};

    #[test]
    fn test_with_dir_only_moves_dir() {
        let settings = SettingsBuilder::new()
            .project_dir("/work/app")
            .platform(Platform::Darwin)
            .arch(Arch::AArch64)
            .package_settings(PackageSettings {
                id: "io.livestyle.app".into(),
                name: "LiveStyle".into(),
                version: semver::Version::new(1, 2, 0),
                ..Default::default()
            })
            .runtime_version(semver::Version::new(0, 36, 2))
            .build()
            .unwrap();

        let template = AppDescriptor::from_settings(&settings);
        let copied = template.clone().with_dir("/work/app/dist/darwin/LiveStyle.app");

        assert_ne!(template.dir(), copied.dir());
        assert_eq!(template.app_dir_name(), "LiveStyle.app");
        assert_eq!(copied.id(), "io.livestyle.app");
        assert_eq!(
            copied.app_resources_dir(),
            Path::new("/work/app/dist/darwin/LiveStyle.app/Contents/Resources/app")
        );
    }
}
