//! Command line interface for `livestyle-dist`.

mod args;

pub use args::Args;

use crate::{
    bundler::{DistArtifact, Distributor, Platform, SettingsBuilder},
    error::{CliError, Result},
    metadata::{self, PackageJson},
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let artifact = execute(&args).await?;

    log::info!("{} bytes, sha256 {}", artifact.size, artifact.checksum);
    println!("{}", artifact.path.display());
    if let Some(installer) = &artifact.installer {
        println!("{}", installer.display());
    }
    Ok(0)
}

/// Runs one distribution for parsed arguments.
///
/// The platform is resolved before anything touches the file system, so an
/// unsupported value leaves no trace.
pub async fn execute(args: &Args) -> Result<DistArtifact> {
    let platform = Platform::resolve(args.platform.as_deref(), Platform::host_identifier())?;
    args.validate(platform)
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let package = PackageJson::load(&args.project_dir.join("package.json"))?;
    let runtime_version =
        metadata::load_runtime_version(&args.project_dir, package.runtime_package())?;

    let mut builder = package
        .configure(SettingsBuilder::new())
        .project_dir(&args.project_dir)
        .platform(platform)
        .runtime_version(runtime_version)
        .installer(args.installer);
    if let Some(out_dir) = &args.out_dir {
        builder = builder.out_dir(out_dir);
    }

    let settings = builder.build()?;
    Ok(Distributor::new(settings).distribute().await?)
}
