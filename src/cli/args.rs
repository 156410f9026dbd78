//! Command line argument parsing and validation.

use crate::bundler::Platform;
use clap::Parser;
use std::path::PathBuf;

/// Packages a desktop app for distribution
#[derive(Parser, Debug, Clone)]
#[command(
    name = "livestyle-dist",
    version,
    about = "Packages a desktop app for distribution",
    long_about = "Copies the prebuilt runtime shell, injects the app, rebuilds native modules,
brands the bundle and archives it for one platform.

Usage:
  livestyle-dist
  livestyle-dist --platform win32 --installer
  livestyle-dist --platform=darwin --project-dir ../livestyle-app --out-dir /tmp/dist

Prints the archive path (and installer path) on success."
)]
pub struct Args {
    /// Target platform: darwin, win32 or linux. Defaults to the host.
    #[arg(short, long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Project root containing package.json and node_modules
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Output root. Defaults to <project-dir>/dist
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Also build an NSIS installer (win32 only)
    #[arg(long)]
    pub installer: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments against the resolved platform
    pub fn validate(&self, platform: Platform) -> Result<(), String> {
        if self.installer && platform != Platform::Win32 {
            return Err(format!(
                "--installer is only supported for win32, not {}",
                platform
            ));
        }
        Ok(())
    }
}
