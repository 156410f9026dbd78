//! Project metadata from `package.json`.
//!
//! The application's own manifest supplies name, version, author and the
//! runtime dependency list. An optional `distribute` section overrides
//! distribution-only settings:
//!
//! ```json
//! "distribute": {
//!   "id": "io.livestyle.app",
//!   "name": "LiveStyle",
//!   "company": "Emmet.io",
//!   "copyright": "Copyright Emmet.io",
//!   "files": ["lib/**/*", "main.js"],
//!   "clean": ["atom.icns", "default_app"],
//!   "iconDir": "branding/icon",
//!   "runtime": "electron-prebuilt",
//!   "executable": "electron.exe",
//!   "headersUrl": "https://electronjs.org/headers"
//! }
//! ```

use crate::bundler::{DEFAULT_RUNTIME_PACKAGE, PackageSettings, SettingsBuilder};
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Parsed `package.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    /// npm package name
    pub name: String,

    /// Human readable name
    #[serde(default)]
    pub product_name: Option<String>,

    /// Application version
    pub version: semver::Version,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Package author
    #[serde(default)]
    pub author: Option<Author>,

    /// Runtime dependencies; only the names are used
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,

    /// Distribution overrides
    #[serde(default)]
    pub distribute: DistributeConfig,
}

/// `author` field: either `"Name <email> (url)"` or an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Author {
    /// npm's one-line person format
    Line(String),
    /// Expanded person object
    Person {
        /// Display name
        name: String,
    },
}

impl Author {
    /// Display name without email or URL.
    pub fn name(&self) -> &str {
        match self {
            Self::Line(line) => line
                .split(['<', '('])
                .next()
                .unwrap_or(line)
                .trim(),
            Self::Person { name } => name,
        }
    }
}

/// The `distribute` section of `package.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistributeConfig {
    /// Bundle identifier, e.g. `io.livestyle.app`
    pub id: Option<String>,
    /// App name used for bundle, executable and archive names
    pub name: Option<String>,
    /// Company written into Windows version strings
    pub company: Option<String>,
    /// Copyright written into Windows version strings
    pub copyright: Option<String>,
    /// Static file patterns to inject
    pub files: Option<Vec<String>>,
    /// Placeholder resources to remove from the shell
    pub clean: Option<Vec<PathBuf>>,
    /// Icon directory, relative to the project
    pub icon_dir: Option<PathBuf>,
    /// npm package providing the runtime shell
    pub runtime: Option<String>,
    /// Executable name inside the Windows shell
    pub executable: Option<String>,
    /// Runtime headers base URL
    pub headers_url: Option<String>,
}

impl PackageJson {
    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Manifest {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| {
            CliError::Manifest {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// npm package providing the runtime shell.
    pub fn runtime_package(&self) -> &str {
        self.distribute.runtime.as_deref().unwrap_or(DEFAULT_RUNTIME_PACKAGE)
    }

    /// Application metadata with `distribute` overrides applied.
    pub fn package_settings(&self) -> PackageSettings {
        let name = self.distribute.name.clone().unwrap_or_else(|| self.name.clone());
        let product_name = self.product_name.clone().unwrap_or_else(|| name.clone());
        let company = self
            .distribute
            .company
            .clone()
            .or_else(|| self.author.as_ref().map(|a| a.name().to_string()))
            .unwrap_or_default();
        let copyright = self.distribute.copyright.clone().unwrap_or_else(|| {
            if company.is_empty() {
                String::new()
            } else {
                format!("Copyright {}", company)
            }
        });

        PackageSettings {
            id: self
                .distribute
                .id
                .clone()
                .unwrap_or_else(|| format!("io.{}.app", name.to_lowercase())),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| product_name.clone()),
            version: self.version.clone(),
            dependencies: self.dependencies.keys().cloned().collect(),
            name,
            product_name,
            company,
            copyright,
        }
    }

    /// Applies metadata and every `distribute` override to `builder`.
    pub fn configure(&self, builder: SettingsBuilder) -> SettingsBuilder {
        let dist = &self.distribute;
        let mut builder = builder
            .package_settings(self.package_settings())
            .runtime_package(self.runtime_package());
        if let Some(files) = &dist.files {
            builder = builder.files(files.clone());
        }
        if let Some(clean) = &dist.clean {
            builder = builder.clean(clean.clone());
        }
        if let Some(icon_dir) = &dist.icon_dir {
            builder = builder.icon_dir(icon_dir);
        }
        if let Some(executable) = &dist.executable {
            builder = builder.executable(executable.clone());
        }
        if let Some(url) = &dist.headers_url {
            builder = builder.headers_url(url.clone());
        }
        builder
    }
}

#[derive(Deserialize)]
struct RuntimeManifest {
    version: semver::Version,
}

/// Installed version of `runtime_package`, read from
/// `<project>/node_modules/<runtime_package>/package.json`.
pub fn load_runtime_version(project_dir: &Path, runtime_package: &str) -> Result<semver::Version> {
    let path = project_dir
        .join("node_modules")
        .join(runtime_package)
        .join("package.json");
    let content = std::fs::read_to_string(&path).map_err(|e| CliError::Manifest {
        path: path.display().to_string(),
        reason: format!("{} (is {} installed?)", e, runtime_package),
    })?;
    let manifest: RuntimeManifest = serde_json::from_str(&content)?;
    Ok(manifest.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "name": "livestyle",
        "productName": "Emmet LiveStyle",
        "version": "1.2.0",
        "author": "Sergey Chikuyonok <serge.che@gmail.com> (http://emmet.io)",
        "dependencies": { "ws": "^1.0.1", "livestyle-client": "*" },
        "distribute": { "name": "LiveStyle", "iconDir": "art/icons" }
    }"#;

    #[test]
    fn test_package_settings_defaults() {
        let pkg: PackageJson = serde_json::from_str(MANIFEST).unwrap();
        let settings = pkg.package_settings();
        assert_eq!(settings.name, "LiveStyle");
        assert_eq!(settings.product_name, "Emmet LiveStyle");
        assert_eq!(settings.id, "io.livestyle.app");
        assert_eq!(settings.company, "Sergey Chikuyonok");
        assert_eq!(settings.copyright, "Copyright Sergey Chikuyonok");
        assert_eq!(settings.description, "Emmet LiveStyle");
        assert_eq!(settings.dependencies, vec!["livestyle-client", "ws"]);
        assert_eq!(pkg.runtime_package(), "electron-prebuilt");
    }

    #[test]
    fn test_author_object() {
        let pkg: PackageJson = serde_json::from_str(
            r#"{"name":"app","version":"0.1.0","author":{"name":"Emmet.io","email":"a@b.c"}}"#,
        )
        .unwrap();
        assert_eq!(pkg.package_settings().company, "Emmet.io");
    }

    #[test]
    fn test_runtime_version_from_node_modules() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("node_modules/electron-prebuilt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("package.json"), r#"{"version":"0.36.0-beta.2"}"#).unwrap();

        let version = load_runtime_version(tmp.path(), "electron-prebuilt").unwrap();
        assert_eq!(version, semver::Version::parse("0.36.0-beta.2").unwrap());
    }

    #[test]
    fn test_missing_runtime_names_package() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_runtime_version(tmp.path(), "electron-prebuilt").unwrap_err();
        assert!(err.to_string().contains("electron-prebuilt"));
    }
}
