#![forbid(unsafe_code)]

use std::{io::Write, path::Path};

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    error::{NetError, NetResult},
    traits::Net,
    types::NetOptions,
};

/// Reqwest-backed [`Net`] implementation.
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: Client,
    options: NetOptions,
    cancel: CancellationToken,
}

impl HttpClient {
    /// # Panics
    ///
    /// Panics if the `reqwest::Client` builder fails to build.
    #[must_use]
    pub fn new(options: NetOptions) -> Self {
        let inner = Client::builder()
            .pool_max_idle_per_host(options.pool_max_idle_per_host)
            .build()
            .expect("failed to build reqwest client");
        Self {
            inner,
            options,
            cancel: CancellationToken::new(),
        }
    }

    /// Attach a cancellation token; an in-flight download aborts when it fires.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// # Errors
    ///
    /// Returns [`NetError`] on HTTP failure, timeout, cancellation, or a
    /// staging I/O failure.
    pub async fn download(&self, url: Url, staging_dir: &Path) -> NetResult<NamedTempFile> {
        <Self as Net>::download(self, url, staging_dir).await
    }
}

#[async_trait]
impl Net for HttpClient {
    async fn download(&self, url: Url, staging_dir: &Path) -> Result<NamedTempFile, NetError> {
        if self.cancel.is_cancelled() {
            return Err(NetError::Cancelled);
        }

        let req = self
            .inner
            .get(url.clone())
            .timeout(self.options.request_timeout);

        let resp = req.send().await.map_err(NetError::from)?;
        let status = resp.status();

        if !status.is_success() {
            return Err(NetError::http_status(status.as_u16(), url.to_string()));
        }

        let mut tmp = NamedTempFile::new_in(staging_dir)?;
        let mut stream = resp.bytes_stream();
        let mut total: u64 = 0;

        loop {
            let chunk = match self.cancel.run_until_cancelled(stream.next()).await {
                Some(chunk) => chunk,
                None => return Err(NetError::Cancelled),
            };
            match chunk {
                Some(Ok(bytes)) => {
                    tmp.write_all(&bytes)?;
                    total += bytes.len() as u64;
                }
                Some(Err(e)) => return Err(NetError::from(e)),
                None => break,
            }
        }

        tmp.flush()?;
        tracing::debug!(%url, bytes = total, "download staged");
        Ok(tmp)
    }
}
