//! Native add-on rebuild.

use crate::bundler::{
    descriptor::AppDescriptor,
    error::{Error, Result},
    native::NativeRebuilder,
};

/// Recompiles native add-ons under `<resources>/app/node_modules` for `abi`.
///
/// Headers are fetched first; any failure aborts the run with no partial
/// success.
pub async fn rebuild<R: NativeRebuilder>(
    app: AppDescriptor,
    abi: &semver::Version,
    rebuilder: &R,
) -> Result<AppDescriptor> {
    let modules_root = app.app_resources_dir().join("node_modules");

    let result = async {
        rebuilder.ensure_headers(abi).await?;
        rebuilder.rebuild_modules(abi, &modules_root).await
    }
    .await;

    result.map_err(|e| Error::Rebuild {
        version: abi.clone(),
        source: Box::new(e),
    })?;
    Ok(app)
}
