#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use url::Url;

/// Validated deliverable of a successful resolve.
///
/// Read-only value object handed to the presentation layer: the local cached
/// copy plus the URL it was resolved from. This crate never renders; the
/// consumer decides what to do with the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewHandle {
    local_path: PathBuf,
    original_url: Url,
}

impl PreviewHandle {
    pub(crate) fn new(local_path: PathBuf, original_url: Url) -> Self {
        Self {
            local_path,
            original_url,
        }
    }

    /// Local cached copy of the resource.
    #[must_use]
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// The resource identifier this handle was resolved from.
    #[must_use]
    pub fn original_url(&self) -> &Url {
        &self.original_url
    }
}
