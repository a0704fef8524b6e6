//! Configuration structures for Palisade DNS, organized by concern:
//! - `root`: top-level config file layout and loading
//! - `logging`: log level
//! - `safe_search`: search-engine enforcement mappings
//! - `downloader`: retry/timeout/cooldown budget for list downloads
//! - `lists`: remote list sources
//! - `errors`: construction-time configuration errors

pub mod downloader;
pub mod errors;
pub mod lists;
pub mod logging;
pub mod root;
pub mod safe_search;

pub use downloader::DownloaderConfig;
pub use errors::ConfigError;
pub use lists::ListsConfig;
pub use logging::LoggingConfig;
pub use root::Config;
pub use safe_search::{default_search_engines, SafeSearchConfig, SearchEngineConfig};
