#![forbid(unsafe_code)]

use std::{path::PathBuf, sync::Arc, time::Duration};

use pedestal_net::NetOptions;
use tokio_util::sync::CancellationToken;

/// Loading-UI hook, invoked synchronously right before a network fetch
/// begins. Only fires on a cache miss.
pub type LoadingHook = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::PreviewResolver`].
#[derive(Clone)]
pub struct ResolverOptions {
    /// Directory for cached previews (required). Created if absent.
    pub cache_dir: PathBuf,
    /// Transport options (timeout defaults to 60 s).
    pub net: NetOptions,
    /// Optional loading-UI hook.
    pub on_loading_start: Option<LoadingHook>,
    /// Optional cancellation token for in-flight fetches.
    pub cancel: Option<CancellationToken>,
}

impl ResolverOptions {
    /// Create options rooted at the given cache directory.
    pub fn new<P: Into<PathBuf>>(cache_dir: P) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            net: NetOptions::default(),
            on_loading_start: None,
            cancel: None,
        }
    }

    /// Override the per-download timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.net.request_timeout = timeout;
        self
    }

    /// Install the loading-UI hook.
    #[must_use]
    pub fn with_loading_hook(mut self, hook: LoadingHook) -> Self {
        self.on_loading_start = Some(hook);
        self
    }

    /// Attach a cancellation token.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl std::fmt::Debug for ResolverOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverOptions")
            .field("cache_dir", &self.cache_dir)
            .field("net", &self.net)
            .field("on_loading_start", &self.on_loading_start.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}
