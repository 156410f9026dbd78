//! Linux branding.

use crate::bundler::{descriptor::AppDescriptor, error::Result};

/// Linux is packaging-only; the shell is archived as copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxBrander;

impl LinuxBrander {
    /// Returns the descriptor unchanged.
    pub async fn brand(&self, app: AppDescriptor) -> Result<AppDescriptor> {
        log::debug!("no branding applied for linux");
        Ok(app)
    }
}
