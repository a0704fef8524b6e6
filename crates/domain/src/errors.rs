use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Stage '{0}' has no next resolver configured")]
    NoNextResolver(&'static str),

    #[error("Resolver chain contains no enabled stage")]
    EmptyChain,
}
