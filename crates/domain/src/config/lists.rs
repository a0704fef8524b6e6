use super::downloader::DownloaderConfig;
use serde::{Deserialize, Serialize};

/// Remote list sources pulled at startup/refresh time.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListsConfig {
    /// URLs of list files to download.
    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub downloader: DownloaderConfig,
}
