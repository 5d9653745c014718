#![forbid(unsafe_code)]

use thiserror::Error;

/// Terminal error taxonomy for [`crate::PreviewResolver::resolve`].
///
/// Deliberately coarse: network, staging, and placement failures all collapse
/// into [`FailedToDownload`](Self::FailedToDownload); the presentation layer
/// only needs to distinguish "couldn't get it" from "got it but can't show
/// it". Scheme and configuration problems get their own variants so no input
/// ever resolves silently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("failed to download resource")]
    FailedToDownload,

    #[error("resource is not renderable by the presentation layer")]
    Unsupported,

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("resolve cancelled")]
    Cancelled,
}

pub type PreviewResult<T> = Result<T, PreviewError>;
