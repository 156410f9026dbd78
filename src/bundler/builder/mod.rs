//! Distribution orchestration.
//!
//! [`Distributor`] runs the pipeline for one platform:
//!
//! 1. Copy the pristine runtime shell into the output root
//! 2. Remove placeholder resources
//! 3. Inject application files
//! 4. Rebuild native add-ons against the runtime ABI
//! 5. Brand the bundle for the platform
//! 6. Archive it (and optionally build a Windows installer)
//!
//! # Example
//!
//! ```no_run
//! use livestyle_dist::bundler::{Distributor, PackageSettings, Platform, SettingsBuilder};
//!
//! # async fn example() -> livestyle_dist::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_dir(".")
//!     .platform(Platform::Darwin)
//!     .package_settings(PackageSettings {
//!         name: "LiveStyle".into(),
//!         version: semver::Version::new(1, 2, 0),
//!         ..Default::default()
//!     })
//!     .runtime_version(semver::Version::new(0, 36, 2))
//!     .build()?;
//!
//! let artifact = Distributor::new(settings).distribute().await?;
//! println!("{} ({} bytes)", artifact.path.display(), artifact.size);
//! println!("SHA256: {}", artifact.checksum);
//! # Ok(())
//! # }
//! ```
//!
//! - [`checksum`] - SHA-256 of the finished archive
//! - [`orchestrator`] - [`Distributor`] and [`DistArtifact`]
//! - [`tool_detection`] - locating and running external tools

pub mod checksum;
mod orchestrator;
pub mod tool_detection;

pub use orchestrator::{DistArtifact, Distributor};
