//! Main distribution orchestration.

use crate::bundler::{
    Result, Settings,
    archive::{Archiver, ZipArchiver},
    descriptor::AppDescriptor,
    error::{Error, ErrorExt},
    native::{NativeRebuilder, NodeGypRebuilder},
    platform::windows::{RcEdit, ResourceEditor, WindowsBrander, nsis},
    stages::{self, Brander},
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistArtifact {
    /// Absolute path of the archive
    pub path: PathBuf,
    /// Archive size in bytes
    pub size: u64,
    /// Hex SHA-256 of the archive
    pub checksum: String,
    /// Branded working bundle the archive was made from
    pub bundle_dir: PathBuf,
    /// Windows installer, when requested
    pub installer: Option<PathBuf>,
}

/// Runs the distribution pipeline for one platform.
///
/// The collaborators that shell out (native rebuild, resource editing,
/// archiving) are type parameters so callers can swap them; [`Distributor::new`]
/// wires the real ones.
///
/// # Examples
///
/// ```no_run
/// use livestyle_dist::bundler::{Distributor, Settings};
///
/// # async fn example(settings: Settings) -> livestyle_dist::bundler::Result<()> {
/// let artifact = Distributor::new(settings).distribute().await?;
/// println!("{}", artifact.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Distributor<R = NodeGypRebuilder, E = RcEdit, A = ZipArchiver> {
    settings: Settings,
    rebuilder: R,
    editor: E,
    archiver: A,
}

impl Distributor {
    /// Creates a distributor using `node-gyp`, `rcedit` and zip.
    pub fn new(settings: Settings) -> Self {
        let rebuilder =
            NodeGypRebuilder::new(settings.runtime().headers_url.clone(), settings.arch());
        Self::with_collaborators(settings, rebuilder, RcEdit, ZipArchiver)
    }
}

impl<R, E, A> Distributor<R, E, A>
where
    R: NativeRebuilder,
    E: ResourceEditor,
    A: Archiver,
{
    /// Creates a distributor with explicit collaborators.
    pub fn with_collaborators(settings: Settings, rebuilder: R, editor: E, archiver: A) -> Self {
        Self {
            settings,
            rebuilder,
            editor,
            archiver,
        }
    }

    /// Returns the run's settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs every stage in order. The first failure aborts the run.
    pub async fn distribute(&self) -> Result<DistArtifact> {
        let settings = &self.settings;
        let out_root = settings
            .out_dir()
            .absolutize()
            .fs_context("resolving output directory", settings.out_dir())?
            .into_owned();

        let app = AppDescriptor::from_settings(settings);
        log::info!(
            "Distributing {} {} for {} ({})",
            app.name(),
            app.version(),
            app.platform(),
            app.arch().node_arch()
        );

        log::info!("Copying runtime shell");
        let app = stages::copy::copy(app, &out_root).await?;

        log::info!("Cleaning placeholder resources");
        let app = stages::clean::clean(app, settings.clean()).await?;

        log::info!("Injecting application files");
        let app = stages::inject::inject(app, settings).await?;

        let abi = settings.runtime().abi_version();
        log::info!("Rebuilding native modules for runtime {}", abi);
        let app = stages::rebuild::rebuild(app, &abi, &self.rebuilder).await?;

        log::info!("Branding {}", app.app_dir_name());
        let brander = Brander::for_platform(app.platform(), &settings.runtime().executable);
        let app = brander.brand(app, &self.editor).await?;

        log::info!("Packaging {}", app.app_dir_name());
        let archive = stages::package::package(&app, &out_root, &self.archiver).await?;

        let installer = if settings.installer() {
            Some(self.build_installer(&app, &out_root).await?)
        } else {
            None
        };

        Ok(DistArtifact {
            path: archive.path,
            size: archive.size,
            checksum: archive.checksum,
            bundle_dir: app.dir().to_path_buf(),
            installer,
        })
    }

    async fn build_installer(&self, app: &AppDescriptor, out_root: &Path) -> Result<PathBuf> {
        log::info!("Building installer");
        let executable = WindowsBrander::new(&self.settings.runtime().executable)
            .branded_executable_name(app.name());

        nsis::build_installer(app, &executable, out_root)
            .await
            .map_err(|e| Error::Installer {
                path: out_root.join(nsis::installer_file_name(app)),
                source: Box::new(e),
            })
    }
}
