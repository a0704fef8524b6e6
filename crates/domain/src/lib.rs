//! Palisade DNS domain layer: query model, response tags and configuration.
pub mod config;
pub mod dns_question;
pub mod errors;
pub mod record_type;
pub mod response_type;

pub use config::{
    Config, ConfigError, DownloaderConfig, ListsConfig, LoggingConfig, SafeSearchConfig,
    SearchEngineConfig,
};
pub use dns_question::{fqdn_eq, to_fqdn, DnsRequest, Question};
pub use errors::DomainError;
pub use record_type::RecordType;
pub use response_type::ResponseType;
