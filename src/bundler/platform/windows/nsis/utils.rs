//! NSIS helpers.

use crate::bundler::error::{ErrorExt, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Formats a version for `VIProductVersion`, which takes exactly four numbers.
///
/// Pre-release and build metadata are dropped: `1.2.0-beta.1` becomes `1.2.0.0`.
pub fn format_version_for_nsis(version: &semver::Version) -> String {
    format!("{}.{}.{}.0", version.major, version.minor, version.patch)
}

/// Escapes `value` for use inside a double-quoted NSIS string.
///
/// `$` starts a variable and `"` ends the string, so both are escaped, as are
/// line breaks.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '$' => escaped.push_str("$$"),
            '"' => escaped.push_str("$\\\""),
            '\n' => escaped.push_str("$\\n"),
            '\r' => escaped.push_str("$\\r"),
            '\t' => escaped.push_str("$\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Writes `content` with a UTF-8 byte order mark, which makensis needs to
/// read the script as UTF-8.
pub async fn write_utf8_bom(path: &Path, content: &str) -> Result<()> {
    let mut file = tokio::fs::File::create(path)
        .await
        .fs_context("creating NSI script file", path)?;

    file.write_all(&[0xEF, 0xBB, 0xBF])
        .await
        .fs_context("writing UTF-8 BOM", path)?;
    file.write_all(content.as_bytes())
        .await
        .fs_context("writing NSI content", path)?;
    file.flush().await.fs_context("flushing NSI file", path)?;

    Ok(())
}
