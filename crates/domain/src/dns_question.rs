use crate::record_type::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// A single DNS lookup: name + query type.
/// Uses `Arc<str>` for zero-cost cloning across chain stages.
#[derive(Debug, Clone)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}

/// An incoming resolution request: the questions plus client metadata.
///
/// Owned by the caller that initiates resolution and passed by shared
/// reference through the chain; stages never mutate it.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub questions: Vec<Question>,
    pub client_id: Option<Arc<str>>,
    pub client_addr: Option<IpAddr>,
}

impl DnsRequest {
    pub fn new(question: Question) -> Self {
        Self {
            questions: vec![question],
            client_id: None,
            client_addr: None,
        }
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            client_id: None,
            client_addr: None,
        }
    }

    pub fn with_client(mut self, client_id: impl Into<Arc<str>>, client_addr: IpAddr) -> Self {
        self.client_id = Some(client_id.into());
        self.client_addr = Some(client_addr);
        self
    }
}

/// Fully qualify a name by ensuring a trailing dot.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Compare two names fully-qualified and case-insensitively.
pub fn fqdn_eq(a: &str, b: &str) -> bool {
    let a = a.strip_suffix('.').unwrap_or(a);
    let b = b.strip_suffix('.').unwrap_or(b);
    a.eq_ignore_ascii_case(b)
}
