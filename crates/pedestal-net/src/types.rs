#![forbid(unsafe_code)]

use std::time::Duration;

/// Transport options.
#[derive(Clone, Debug)]
pub struct NetOptions {
    /// Total time allowed for a single download, connect to last body byte.
    pub request_timeout: Duration,
    /// Max idle connections per host. Set to 0 to disable pooling and reduce memory.
    pub pool_max_idle_per_host: usize,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            pool_max_idle_per_host: 0,
        }
    }
}

impl NetOptions {
    /// Override the per-download timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
