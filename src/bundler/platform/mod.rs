//! Target platform resolution and per-platform branding.
//!
//! | Platform | Identifier | Branding | Archive label |
//! |----------|------------|----------|---------------|
//! | macOS    | `darwin`   | [`macos`] verification | `osx` |
//! | Windows  | `win32`    | [`windows`] resource edit + rename | `win32` / `win64` |
//! | Linux    | `linux`    | [`linux`] pass-through | `linux` |
//!
//! Exactly one [`Platform`] is resolved per run. Every stage reads it from the
//! [`AppDescriptor`](crate::bundler::AppDescriptor), never from the host.

pub mod linux;
pub mod macos;
pub mod windows;

use crate::bundler::error::{Error, Result};
use std::{fmt, str::FromStr};

/// Target platform of a distribution run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Platform {
    /// macOS (`Electron.app` shell).
    Darwin,
    /// Windows (`electron.exe` shell).
    Win32,
    /// Linux. Packaging only, no branding.
    Linux,
}

impl Platform {
    /// All supported platforms.
    pub const ALL: [Platform; 3] = [Platform::Darwin, Platform::Win32, Platform::Linux];

    /// Resolves the target platform.
    ///
    /// An explicit override wins over the host identifier. Fails with
    /// [`Error::UnsupportedPlatform`] if the chosen value is empty or unknown.
    ///
    /// ```
    /// use livestyle_dist::bundler::Platform;
    ///
    /// let p = Platform::resolve(Some("win32"), "darwin").unwrap();
    /// assert_eq!(p, Platform::Win32);
    /// assert!(Platform::resolve(Some("amiga"), "darwin").is_err());
    /// ```
    pub fn resolve(requested: Option<&str>, host: &str) -> Result<Self> {
        let candidate = requested.unwrap_or(host);
        log::debug!("picked platform: {}", candidate);
        candidate.parse()
    }

    /// Node-style identifier of the host operating system.
    pub fn host_identifier() -> &'static str {
        match std::env::consts::OS {
            "macos" => "darwin",
            "windows" => "win32",
            other => other,
        }
    }

    /// Node-style identifier (`darwin`, `win32`, `linux`).
    pub fn id(self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Win32 => "win32",
            Platform::Linux => "linux",
        }
    }

    /// Label used in archive file names.
    pub fn archive_label(self) -> &'static str {
        match self {
            Platform::Darwin => "osx",
            Platform::Win32 => "win",
            Platform::Linux => "linux",
        }
    }

    /// Icon file extension expected for this platform.
    pub fn icon_extension(self) -> &'static str {
        match self {
            Platform::Darwin => "icns",
            Platform::Win32 => "ico",
            Platform::Linux => "png",
        }
    }

    /// Resource directory relative to the bundle root.
    pub fn resource_dir_name(self) -> &'static str {
        match self {
            Platform::Darwin => "Contents/Resources",
            Platform::Win32 | Platform::Linux => "resources",
        }
    }

    /// Final on-disk bundle name for an application name.
    pub fn app_dir_name(self, app_name: &str) -> String {
        match self {
            Platform::Darwin => format!("{app_name}.app"),
            Platform::Win32 | Platform::Linux => app_name.to_lowercase(),
        }
    }

    /// Location of the pristine shell inside the runtime package's `dist` dir.
    pub fn template_subdir(self) -> &'static str {
        match self {
            Platform::Darwin => "Electron.app",
            Platform::Win32 | Platform::Linux => "",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "darwin" => Ok(Platform::Darwin),
            "win32" => Ok(Platform::Win32),
            "linux" => Ok(Platform::Linux),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_for_every_platform() {
        for platform in Platform::ALL {
            let resolved = Platform::resolve(Some(platform.id()), "linux").unwrap();
            assert_eq!(resolved, platform);
        }
    }

    #[test]
    fn test_host_used_without_override() {
        assert_eq!(Platform::resolve(None, "darwin").unwrap(), Platform::Darwin);
    }

    #[test]
    fn test_unsupported_values_rejected() {
        for bad in ["amiga", "", "Darwin", "win64"] {
            let err = Platform::resolve(Some(bad), "darwin").unwrap_err();
            assert!(matches!(err, Error::UnsupportedPlatform(ref v) if v == bad));
        }
        assert!(Platform::resolve(None, "freebsd").is_err());
    }

    #[test]
    fn test_layout_per_platform() {
        assert_eq!(Platform::Darwin.resource_dir_name(), "Contents/Resources");
        assert_eq!(Platform::Win32.resource_dir_name(), "resources");
        assert_eq!(Platform::Darwin.app_dir_name("LiveStyle"), "LiveStyle.app");
        assert_eq!(Platform::Win32.app_dir_name("LiveStyle"), "livestyle");
    }
}
