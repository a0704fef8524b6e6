use thiserror::Error;

/// Errors surfaced while loading or validating configuration.
/// These are fatal for the affected component's setup, never per-query.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("can't read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("can't parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("client group '{group}' references unknown search engine '{engine}'")]
    UnknownSearchEngine { group: String, engine: String },

    #[error("downloader attempts must be at least 1")]
    InvalidAttempts,

    #[error("downloader timeout must be greater than zero")]
    InvalidTimeout,

    #[error("invalid proxy url '{url}': {reason}")]
    InvalidProxy { url: String, reason: String },

    #[error("http client setup failed: {0}")]
    HttpClient(String),
}
