//! makensis execution.

use crate::bundler::{
    builder::tool_detection,
    error::{ErrorExt, Result},
};
use std::path::Path;

/// Compiles `nsi_path` into the installer at `output_path`.
pub async fn run_makensis(nsi_path: &Path, output_path: &Path) -> Result<()> {
    let makensis = tool_detection::locate(&["makensis"], super::INSTALL_HINT)?;
    log::info!("Running {}", makensis.display());

    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating installer output directory", parent)?;
    }

    let mut command = tokio::process::Command::new(&makensis);
    command
        .args(["-V3", "-INPUTCHARSET", "UTF8", "-OUTPUTCHARSET", "UTF8"])
        .arg(format!("-DOUTPUT_FILE={}", output_path.display()))
        .arg(nsi_path);

    tool_detection::run(&mut command, "makensis").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::error::Error;

    #[tokio::test]
    async fn test_missing_makensis_is_tool_not_found() {
        if which::which("makensis").is_ok() {
            return;
        }
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("out/livestyle-win64-setup-v1.2.0.exe");

        let err = run_makensis(&tmp.path().join("installer.nsi"), &output)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { tool: "makensis", .. }));
        assert!(!tmp.path().join("out").exists());
    }
}
