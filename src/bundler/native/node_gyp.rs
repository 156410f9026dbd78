//! `node-gyp` backed native rebuilder.

use super::{NativeRebuilder, headers};
use crate::bundler::{
    builder::tool_detection,
    error::{Context, Error, Result},
    settings::Arch,
};
use std::path::{Path, PathBuf};

/// Rebuilds add-ons by running `node-gyp rebuild` in each module directory.
#[derive(Debug, Clone)]
pub struct NodeGypRebuilder {
    headers_url: String,
    arch: Arch,
    dev_dir: PathBuf,
}

impl NodeGypRebuilder {
    /// Creates a rebuilder using the default header cache.
    pub fn new(headers_url: impl Into<String>, arch: Arch) -> Self {
        Self {
            headers_url: headers_url.into(),
            arch,
            dev_dir: headers::default_dev_dir(),
        }
    }

    /// Overrides the header cache root.
    pub fn with_dev_dir(mut self, dev_dir: impl Into<PathBuf>) -> Self {
        self.dev_dir = dev_dir.into();
        self
    }

    fn gyp_args(&self, abi: &semver::Version) -> Vec<String> {
        vec![
            "rebuild".to_string(),
            format!("--target={abi}"),
            format!("--arch={}", self.arch.node_arch()),
            format!("--dist-url={}", self.headers_url),
            format!("--devdir={}", self.dev_dir.display()),
        ]
    }
}

impl NativeRebuilder for NodeGypRebuilder {
    async fn ensure_headers(&self, abi: &semver::Version) -> Result<()> {
        headers::ensure(&self.headers_url, abi, &self.dev_dir).await?;
        Ok(())
    }

    async fn rebuild_modules(&self, abi: &semver::Version, modules_root: &Path) -> Result<()> {
        let modules = discover_native_modules(modules_root).await?;
        if modules.is_empty() {
            log::debug!("no native modules under {}", modules_root.display());
            return Ok(());
        }

        let node_gyp = tool_detection::locate(
            &["node-gyp"],
            "Install it with `npm install -g node-gyp`.",
        )?;

        for module in modules {
            log::debug!("rebuilding {}", module.display());
            let mut command = tokio::process::Command::new(&node_gyp);
            command.args(self.gyp_args(abi)).current_dir(&module);
            tool_detection::run(&mut command, "node-gyp rebuild")
                .await
                .with_context(|| format!("rebuilding {}", module.display()))?;
        }

        Ok(())
    }
}

/// Finds package directories containing a `binding.gyp`.
///
/// Returns an empty list when `modules_root` does not exist.
pub async fn discover_native_modules(modules_root: &Path) -> Result<Vec<PathBuf>> {
    let root = modules_root.to_path_buf();
    tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut modules = Vec::new();
        for entry in walkdir::WalkDir::new(&root).follow_links(false) {
            let entry = entry?;
            if !entry.file_type().is_file() || entry.file_name() != "binding.gyp" {
                continue;
            }
            match entry.path().parent() {
                Some(dir) if dir.join("package.json").is_file() => modules.push(dir.to_path_buf()),
                _ => {}
            }
        }
        modules.sort();
        modules.dedup();
        Ok(modules)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Module discovery task panicked: {}", e)))?
}
