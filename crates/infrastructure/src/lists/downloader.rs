use crate::events::{DownloadFailedEvent, ListEventEmitter};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use palisade_dns_domain::{ConfigError, DownloaderConfig};
use std::pin::Pin;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Unbuffered body of a successful download. Dropping the stream releases
/// the underlying connection on every exit path, including read errors.
pub type FileStream = Pin<Box<dyn Stream<Item = Result<Bytes, DownloadError>> + Send>>;

#[derive(Error, Debug)]
pub enum DownloadError {
    /// A reachable server answered outside [200, 300) on the final attempt.
    #[error("got status code {0}")]
    Status(u16),

    /// Timeout, connection or name-resolution failure. Retryable in
    /// principle; callers may apply broader backoff upstream.
    #[error("temporary network failure: {0}")]
    Transient(#[source] reqwest::Error),

    /// The caller's cancellation fired mid-operation.
    #[error("download cancelled")]
    Cancelled,
}

impl DownloadError {
    pub fn is_transient(&self) -> bool {
        matches!(self, DownloadError::Transient(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DownloadError::Transient(e) if e.is_timeout())
    }
}

/// One logical "download with retries" operation.
#[async_trait]
pub trait FileDownloader: Send + Sync {
    async fn download_file(&self, url: &str) -> Result<FileStream, DownloadError>;
}

/// HTTP downloader with bounded retries, per-attempt timeouts and
/// cancellable inter-attempt cooldowns.
///
/// The pooled client is the only state shared across calls, so one
/// downloader may serve concurrent downloads of independent URLs. Attempts
/// within a single call are strictly sequential.
pub struct HttpDownloader {
    cfg: DownloaderConfig,
    client: reqwest::Client,
    events: ListEventEmitter,
    shutdown: CancellationToken,
}

impl HttpDownloader {
    /// Build a downloader with its own pooled client, honoring the
    /// configured proxy.
    pub fn new(cfg: DownloaderConfig, events: ListEventEmitter) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();

        if let Some(proxy_url) = &cfg.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| ConfigError::InvalidProxy {
                url: proxy_url.clone(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            cfg,
            client,
            events,
            shutdown: CancellationToken::new(),
        })
    }

    /// Use a caller-supplied client (custom transport or connection pool).
    pub fn with_client(
        cfg: DownloaderConfig,
        client: reqwest::Client,
        events: ListEventEmitter,
    ) -> Self {
        Self {
            cfg,
            client,
            events,
            shutdown: CancellationToken::new(),
        }
    }

    /// Thread the caller's cancellation through request waits and cooldowns.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    async fn attempt(&self, url: &str) -> Result<reqwest::Response, DownloadError> {
        let response = self
            .client
            .get(url)
            .timeout(self.cfg.timeout())
            .send()
            .await
            .map_err(DownloadError::Transient)?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(DownloadError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl FileDownloader for HttpDownloader {
    async fn download_file(&self, url: &str) -> Result<FileStream, DownloadError> {
        let mut last_err = None;

        for attempt in 1..=self.cfg.attempts {
            let outcome = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => return Err(DownloadError::Cancelled),
                outcome = self.attempt(url) => outcome,
            };

            match outcome {
                Ok(response) => {
                    let body = response
                        .bytes_stream()
                        .map(|chunk| chunk.map_err(DownloadError::Transient));
                    return Ok(Box::pin(body));
                }
                Err(err) => {
                    // Exactly one notification per failed attempt, none on
                    // the attempt that finally succeeds.
                    self.events.emit(DownloadFailedEvent::new(url));

                    match &err {
                        DownloadError::Status(code) => {
                            warn!(url, attempt, status = *code, "server rejected list download")
                        }
                        DownloadError::Transient(cause) if cause.is_timeout() => {
                            warn!(url, attempt, error = %cause, "temporary network error or timeout during list download")
                        }
                        DownloadError::Transient(cause) => {
                            warn!(url, attempt, error = %cause, "can't download list file")
                        }
                        DownloadError::Cancelled => {}
                    }

                    last_err = Some(err);
                }
            }

            if attempt < self.cfg.attempts {
                tokio::select! {
                    biased;
                    _ = self.shutdown.cancelled() => return Err(DownloadError::Cancelled),
                    _ = tokio::time::sleep(self.cfg.cooldown()) => {}
                }
            }
        }

        // attempts >= 1 is enforced at config validation.
        Err(last_err.unwrap_or(DownloadError::Cancelled))
    }
}
