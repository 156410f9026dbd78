//! Application metadata and runtime configuration.

/// Application metadata.
///
/// Usually derived from `package.json` (`name`, `productName`, `version`,
/// `description`, `author`, `dependencies` and the `distribute` section).
///
/// # Examples
///
/// ```no_run
/// use livestyle_dist::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     id: "io.livestyle.app".into(),
///     name: "LiveStyle".into(),
///     product_name: "Emmet LiveStyle".into(),
///     version: semver::Version::new(1, 2, 0),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PackageSettings {
    /// Reverse-domain application identifier, e.g. `io.livestyle.app`.
    pub id: String,

    /// Application name. Lowercased it names the executable and archives.
    pub name: String,

    /// Product name written into executable version strings.
    pub product_name: String,

    /// Application version.
    pub version: semver::Version,

    /// File description written into executable version strings.
    pub description: String,

    /// Company name written into executable version strings.
    pub company: String,

    /// Legal copyright written into executable version strings.
    pub copyright: String,

    /// Declared runtime dependency names (keys of `dependencies`).
    pub dependencies: Vec<String>,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            product_name: String::new(),
            version: semver::Version::new(0, 0, 0),
            description: String::new(),
            company: String::new(),
            copyright: String::new(),
            dependencies: Vec::new(),
        }
    }
}

/// Runtime shell configuration.
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    /// npm package providing the prebuilt runtime, e.g. `electron-prebuilt`.
    pub package: String,

    /// Installed runtime version, possibly with a pre-release suffix.
    pub version: semver::Version,

    /// Executable name inside the Windows shell.
    pub executable: String,

    /// Base URL serving runtime header tarballs.
    pub headers_url: String,
}

impl RuntimeSettings {
    /// ABI version native modules are compiled against.
    ///
    /// The installed version with pre-release and build metadata stripped.
    pub fn abi_version(&self) -> semver::Version {
        semver::Version::new(self.version.major, self.version.minor, self.version.patch)
    }
}
