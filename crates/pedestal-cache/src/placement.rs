#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{CacheError, CacheResult};

/// Move a staged download into its final cache location.
///
/// Any prior file at `final_path` is removed first (invalidation of the
/// previous version), then the temp file is renamed into place. Rename, not
/// copy: the staging directory must be on the same filesystem as the target.
///
/// After success `final_path` holds exactly the staged bytes and the temp
/// file is gone.
///
/// # Errors
///
/// Returns [`CacheError::Placement`] if the removal or the rename fails; the
/// temp file is cleaned up on the error path (dropped `NamedTempFile`).
pub fn place(tmp: NamedTempFile, final_path: &Path) -> CacheResult<PathBuf> {
    if let Some(parent) = final_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CacheError::Placement(format!("create target dir: {e}")))?;
    }

    match std::fs::remove_file(final_path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(CacheError::Placement(format!("remove stale file: {e}"))),
    }

    tmp.persist(final_path)
        .map_err(|e| CacheError::Placement(format!("rename into cache: {}", e.error)))?;

    tracing::debug!(path = %final_path.display(), "placed fetched file");
    Ok(final_path.to_path_buf())
}
