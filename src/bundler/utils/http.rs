//! HTTP utilities for downloading runtime assets.

use crate::bundler::error::{Error, Result};

/// Downloads a file from a URL.
///
/// Returns the file contents as a byte vector. Non-success HTTP statuses are
/// errors.
///
/// Used by:
/// - Native rebuild: runtime header tarballs
pub async fn download(url: &str) -> Result<Vec<u8>> {
    log::info!("Downloading {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| Error::GenericError(format!("Download failed: {}", e)))?
        .error_for_status()?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::GenericError(format!("Failed to read response: {}", e)))?;

    Ok(bytes.to_vec())
}
