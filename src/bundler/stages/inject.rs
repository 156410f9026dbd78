//! Application resource injection.
//!
//! The selection is the union of the static file patterns, matched against the
//! project root, and every file of each declared runtime dependency under
//! `node_modules`. Dependencies are taken wholesale, so they must be installed
//! flat. Relative paths are kept under `<resources>/app/`.

use crate::bundler::{
    descriptor::AppDescriptor,
    error::{Error, ErrorExt, Result},
    settings::Settings,
    utils::fs,
};
use path_absolutize::Absolutize;
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

/// Copies the application's files into the bundle's `app` directory.
pub async fn inject(app: AppDescriptor, settings: &Settings) -> Result<AppDescriptor> {
    let dest = app.app_resources_dir();
    inject_into(settings, &dest)
        .await
        .map_err(|e| Error::Injection {
            dest: dest.clone(),
            source: Box::new(e),
        })?;
    Ok(app)
}

async fn inject_into(settings: &Settings, dest: &Path) -> Result<()> {
    let project_dir = settings.project_dir();
    let files = select_files(
        project_dir,
        settings.files(),
        &settings.package().dependencies,
    )
    .await?;

    log::debug!("injecting {} files into {}", files.len(), dest.display());
    for rel in &files {
        fs::copy_file(&project_dir.join(rel), &dest.join(rel)).await?;
    }
    Ok(())
}

/// Resolves the injection set to sorted paths relative to `project_dir`.
///
/// Files and symlinks to files are returned; a linked file is injected with
/// its target's content. A relative `project_dir` is resolved against the
/// current directory. A declared dependency without a `node_modules/<name>`
/// directory is an error.
pub async fn select_files(
    project_dir: &Path,
    patterns: &[String],
    dependencies: &[String],
) -> Result<Vec<PathBuf>> {
    let project_dir = project_dir.to_path_buf();
    let patterns = patterns.to_vec();
    let dependencies = dependencies.to_vec();

    tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        let project_dir = project_dir
            .absolutize()
            .fs_context("resolving project directory", &project_dir)?
            .into_owned();
        let mut selected = BTreeSet::new();

        let base = glob::Pattern::escape(&project_dir.to_string_lossy());
        for pattern in &patterns {
            for path in glob::glob(&format!("{}/{}", base, pattern))? {
                let path = path?;
                if path.is_file() {
                    selected.insert(path.strip_prefix(&project_dir)?.to_path_buf());
                }
            }
        }

        let modules = project_dir.join("node_modules");
        for name in &dependencies {
            let root = modules.join(name);
            if !root.is_dir() {
                crate::bail!(
                    "dependency {} is not installed at {}",
                    name,
                    root.display()
                );
            }
            for entry in walkdir::WalkDir::new(&root).follow_links(false) {
                let entry = entry?;
                let file_type = entry.file_type();
                if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
                    selected.insert(entry.path().strip_prefix(&project_dir)?.to_path_buf());
                }
            }
        }

        Ok(selected.into_iter().collect())
    })
    .await
    .map_err(|e| Error::GenericError(format!("File selection task panicked: {}", e)))?
}
