//! macOS branding.
//!
//! The `Electron.app` shell already carries its icon and Info.plist from the
//! packaging step, so branding only verifies the copied bundle is usable.

use crate::bundler::{
    descriptor::AppDescriptor,
    error::{ErrorExt, Result},
};

/// Verifies a copied macOS application bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOsBrander;

impl MacOsBrander {
    /// Checks `Contents/Info.plist` and the resource directory exist.
    pub async fn brand(&self, app: AppDescriptor) -> Result<AppDescriptor> {
        let plist = app.dir().join("Contents").join("Info.plist");
        if !tokio::fs::try_exists(&plist)
            .await
            .fs_context("checking bundle manifest", &plist)?
        {
            crate::bail!("{} is missing; not an application bundle", plist.display());
        }

        let resources = app.resource_dir();
        if !tokio::fs::try_exists(&resources)
            .await
            .fs_context("checking resource directory", &resources)?
        {
            crate::bail!("resource directory {} is missing", resources.display());
        }

        match tokio::fs::try_exists(app.icon()).await {
            Ok(true) => {}
            Ok(false) => {
                log::warn!("icon {} not found; bundle keeps its own", app.icon().display())
            }
            Err(e) => log::warn!(
                "icon {} unreadable ({}); bundle keeps its own",
                app.icon().display(),
                e
            ),
        }

        log::debug!("{} verified", app.app_dir_name());
        Ok(app)
    }
}
