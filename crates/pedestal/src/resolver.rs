#![forbid(unsafe_code)]

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use parking_lot::Mutex;
use pedestal_cache::{CacheIndex, cache_key, cached_file_name, place};
use pedestal_net::{HttpClient, Net, NetError};
use url::Url;

use crate::{
    error::{PreviewError, PreviewResult},
    handle::PreviewHandle,
    options::{LoadingHook, ResolverOptions},
    renderable::{ExtensionRenderability, Renderability},
};

/// Name of the index file inside the cache directory.
const INDEX_REL_PATH: &str = "_index/previews.json";

/// Fetch-and-cache coordinator.
///
/// One logical operation per [`resolve`](Self::resolve) call: cache lookup,
/// then on a miss the download → placement → index-write chain. The network
/// fetch is the only suspension point besides the per-URL serialization lock.
///
/// Generic over the transport ([`Net`]) and the capability check
/// ([`Renderability`]) so tests and platforms can inject their own.
pub struct PreviewResolver<N = HttpClient, R = ExtensionRenderability> {
    net: N,
    renderability: R,
    index: CacheIndex,
    cache_dir: PathBuf,
    on_loading_start: Option<LoadingHook>,
    /// Per-URL gates: concurrent resolves of one URL run one at a time, so a
    /// remove/rename placement cannot interleave with another fetch of the
    /// same resource.
    inflight: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl PreviewResolver {
    /// Resolver with the default transport and extension-based capability
    /// check.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Configuration`] if the cache directory cannot
    /// be created.
    pub fn new(options: ResolverOptions) -> PreviewResult<Self> {
        let net = HttpClient::new(options.net.clone())
            .with_cancel(options.cancel.clone().unwrap_or_default());
        Self::with_parts(net, ExtensionRenderability::default(), options)
    }
}

impl<N: Net, R: Renderability> PreviewResolver<N, R> {
    /// Resolver with an injected transport and capability check.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Configuration`] if the cache directory cannot
    /// be created.
    pub fn with_parts(net: N, renderability: R, options: ResolverOptions) -> PreviewResult<Self> {
        let cache_dir = options.cache_dir;
        std::fs::create_dir_all(&cache_dir).map_err(|e| {
            PreviewError::Configuration(format!(
                "cache directory {} is unusable: {e}",
                cache_dir.display()
            ))
        })?;

        let index = CacheIndex::open(cache_dir.join(INDEX_REL_PATH));
        Ok(Self {
            net,
            renderability,
            index,
            cache_dir,
            on_loading_start: options.on_loading_start,
            inflight: Mutex::new(HashMap::new()),
        })
    }

    /// Resolve `url` to a local preview handle.
    ///
    /// Exactly one terminal result per call: either a validated handle over a
    /// cached or freshly fetched local copy, or one [`PreviewError`].
    ///
    /// # Errors
    ///
    /// - [`PreviewError::UnsupportedScheme`] for non-http(s) identifiers
    ///   (never touches the network).
    /// - [`PreviewError::FailedToDownload`] for transport or placement
    ///   failures.
    /// - [`PreviewError::Unsupported`] when the local file exists but the
    ///   capability check rejects it.
    /// - [`PreviewError::Cancelled`] when the cancellation token fires
    ///   mid-fetch.
    pub async fn resolve(&self, url: &Url) -> PreviewResult<PreviewHandle> {
        let scheme = url.scheme().to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            tracing::debug!(%url, scheme, "rejecting non-http(s) identifier");
            return Err(PreviewError::UnsupportedScheme(scheme));
        }

        let key = cache_key(url);
        let gate = self
            .inflight
            .lock()
            .entry(key.clone())
            .or_default()
            .clone();
        let result = {
            let _guard = gate.lock().await;
            self.resolve_serialized(url).await
        };
        drop(gate);

        let mut inflight = self.inflight.lock();
        if inflight.get(&key).is_some_and(|g| Arc::strong_count(g) == 1) {
            inflight.remove(&key);
        }
        drop(inflight);

        result
    }

    async fn resolve_serialized(&self, url: &Url) -> PreviewResult<PreviewHandle> {
        if let Some(path) = self.index.lookup(url) {
            tracing::debug!(%url, path = %path.display(), "cache hit");
            return self.classify(path, url);
        }

        if let Some(hook) = &self.on_loading_start {
            hook();
        }

        let staged = self
            .net
            .download(url.clone(), &self.cache_dir)
            .await
            .map_err(|e| match e {
                NetError::Cancelled => PreviewError::Cancelled,
                e => {
                    tracing::warn!(%url, error = %e, "download failed");
                    PreviewError::FailedToDownload
                }
            })?;

        let final_path = self.cache_dir.join(cached_file_name(url));
        let path = place(staged, &final_path).map_err(|e| {
            tracing::warn!(%url, error = %e, "placement failed");
            PreviewError::FailedToDownload
        })?;

        // The file is already in place; on a persist failure the mapping is
        // simply rebuilt by the next fetch.
        if let Err(e) = self.index.store(url, &path) {
            tracing::warn!(%url, error = %e, "failed to persist cache mapping");
        }

        self.classify(path, url)
    }

    fn classify(&self, path: PathBuf, url: &Url) -> PreviewResult<PreviewHandle> {
        if self.renderability.can_render(&path) {
            Ok(PreviewHandle::new(path, url.clone()))
        } else {
            Err(PreviewError::Unsupported)
        }
    }
}
