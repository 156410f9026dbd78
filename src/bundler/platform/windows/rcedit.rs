//! Executable resource editing via `rcedit`.

use crate::bundler::{
    builder::tool_detection,
    descriptor::AppDescriptor,
    error::Result,
};
use std::{
    ffi::OsString,
    future::Future,
    path::{Path, PathBuf},
};

/// Version-info and icon fields written into a Windows executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFields {
    /// `ProductName` version string
    pub product_name: String,
    /// `CompanyName` version string
    pub company_name: String,
    /// `FileDescription` version string
    pub file_description: String,
    /// `LegalCopyright` version string
    pub legal_copyright: String,
    /// `OriginalFilename` version string
    pub original_filename: String,
    /// Icon replacing the runtime's default
    pub icon: PathBuf,
    /// Fixed file version
    pub file_version: String,
    /// Fixed product version
    pub product_version: String,
}

impl VersionFields {
    /// Derives the fields from the descriptor.
    pub fn from_descriptor(app: &AppDescriptor, original_filename: impl Into<String>) -> Self {
        let version = app.version().to_string();
        Self {
            product_name: app.product_name().to_string(),
            company_name: app.company_name().to_string(),
            file_description: app.description().to_string(),
            legal_copyright: app.copyright().to_string(),
            original_filename: original_filename.into(),
            icon: app.icon().to_path_buf(),
            file_version: version.clone(),
            product_version: version,
        }
    }

    /// Command line arguments understood by `rcedit`, after the executable path.
    pub fn rcedit_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        for (key, value) in [
            ("ProductName", &self.product_name),
            ("CompanyName", &self.company_name),
            ("FileDescription", &self.file_description),
            ("LegalCopyright", &self.legal_copyright),
            ("OriginalFilename", &self.original_filename),
        ] {
            args.extend(["--set-version-string".into(), key.into(), value.into()]);
        }
        args.extend([
            "--set-icon".into(),
            self.icon.clone().into_os_string(),
            "--set-file-version".into(),
            self.file_version.clone().into(),
            "--set-product-version".into(),
            self.product_version.clone().into(),
        ]);
        args
    }
}

/// Edits the embedded resources of a Windows executable.
pub trait ResourceEditor {
    /// Writes `fields` into the executable at `exe`, in place.
    fn edit_binary_metadata(
        &self,
        exe: &Path,
        fields: &VersionFields,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// [`ResourceEditor`] backed by the `rcedit` tool.
///
/// Off Windows the tool runs under `wine`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RcEdit;

impl ResourceEditor for RcEdit {
    async fn edit_binary_metadata(&self, exe: &Path, fields: &VersionFields) -> Result<()> {
        let rcedit = tool_detection::locate(
            &["rcedit", "rcedit.exe", "rcedit-x64.exe"],
            "Download rcedit from https://github.com/electron/rcedit/releases and put it on PATH.",
        )?;

        let mut command = if cfg!(windows) {
            tokio::process::Command::new(&rcedit)
        } else {
            let wine = tool_detection::locate(
                &["wine", "wine64"],
                "Editing Windows executables off Windows requires wine.",
            )?;
            let mut command = tokio::process::Command::new(wine);
            command.arg(&rcedit);
            command
        };
        command.arg(exe).args(fields.rcedit_args());

        log::debug!("set icon {}", fields.icon.display());
        tool_detection::run(&mut command, "rcedit").await
    }
}
