#![forbid(unsafe_code)]

use std::path::Path;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use url::Url;

use crate::error::NetError;

/// Transport seam for downloading remote resources.
///
/// Implementations stage the body in a temp file under `staging_dir` and hand
/// ownership of that file to the caller. The file is deleted on drop unless
/// the caller persists it.
#[async_trait]
pub trait Net: Send + Sync {
    /// Download the resource at `url` into a temp file inside `staging_dir`.
    async fn download(&self, url: Url, staging_dir: &Path) -> Result<NamedTempFile, NetError>;
}
