//! External tool detection and execution.
//!
//! The pipeline shells out to `node-gyp`, `rcedit` (through `wine` off
//! Windows) and `makensis`. This module locates them and runs them with
//! uniform error reporting.

use crate::bundler::error::{Error, Result};
use std::{path::PathBuf, sync::LazyLock};

/// Check if makensis is available for NSIS installer creation.
///
/// Cached result to avoid repeated subprocess calls.
pub static HAS_MAKENSIS: LazyLock<bool> = LazyLock::new(|| match which::which("makensis") {
    Ok(path) => {
        log::debug!("Found makensis at: {}", path.display());

        match std::process::Command::new(&path).arg("-VERSION").output() {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout);
                log::info!("✓ makensis available: {}", version.trim());
                true
            }
            Ok(output) => {
                log::warn!(
                    "makensis found at {} but -VERSION check failed (exit code: {:?}). \
                         Stderr: {}",
                    path.display(),
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr)
                );
                false
            }
            Err(e) => {
                log::warn!(
                    "makensis found at {} but failed to execute: {}. Check file permissions.",
                    path.display(),
                    e
                );
                false
            }
        }
    }
    Err(e) => {
        log::debug!("makensis not found in PATH: {}", e);
        false
    }
});

/// Locates the first of `names` on `PATH`.
///
/// `hint` is appended to the error to tell the user how to install the tool.
pub fn locate(names: &[&'static str], hint: &'static str) -> Result<PathBuf> {
    for name in names {
        if let Ok(path) = which::which(name) {
            log::debug!("Found {} at: {}", name, path.display());
            return Ok(path);
        }
    }
    Err(Error::ToolNotFound {
        tool: names.first().copied().unwrap_or("tool"),
        hint,
    })
}

/// Runs a prepared command to completion.
///
/// Captures output; a non-zero exit becomes [`Error::CommandStatus`] carrying
/// the tool's stderr.
pub async fn run(command: &mut tokio::process::Command, display_name: &str) -> Result<()> {
    log::debug!("running {:?}", command.as_std());

    let output = command.output().await.map_err(|e| Error::CommandFailed {
        command: display_name.to_string(),
        error: e,
    })?;

    if !output.status.success() {
        return Err(Error::CommandStatus {
            command: display_name.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        log::debug!("[{}] {}", display_name, line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_reports_missing_tool() {
        let err = locate(&["definitely-not-a-real-tool-4821"], "install it").unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { tool: "definitely-not-a-real-tool-4821", .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_surfaces_stderr_on_failure() {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.args(["-c", "echo broken >&2; exit 3"]);
        let err = run(&mut cmd, "sh").await.unwrap_err();
        match err {
            Error::CommandStatus { stderr, .. } => assert_eq!(stderr, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
