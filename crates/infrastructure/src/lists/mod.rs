//! Remote list retrieval.

pub mod downloader;

pub use downloader::{DownloadError, FileDownloader, FileStream, HttpDownloader};
