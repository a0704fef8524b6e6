use std::sync::Arc;

/// Payload of the "download-failed" topic: emitted once for every failed
/// download attempt, carrying the URL that failed.
#[derive(Debug, Clone)]
pub struct DownloadFailedEvent {
    pub url: Arc<str>,
}

impl DownloadFailedEvent {
    pub fn new(url: impl Into<Arc<str>>) -> Self {
        Self { url: url.into() }
    }
}
