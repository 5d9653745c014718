#![forbid(unsafe_code)]

use thiserror::Error;

/// Cache store errors.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("placement failed: {0}")]
    Placement(String),
}

pub type CacheResult<T> = Result<T, CacheError>;
