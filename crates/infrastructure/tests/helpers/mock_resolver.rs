#![allow(dead_code)]
use async_trait::async_trait;
use palisade_dns_domain::{DnsRequest, DomainError, ResponseType};
use palisade_dns_infrastructure::dns::model::DnsResponse;
use palisade_dns_infrastructure::dns::resolver::Resolver;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stand-in for the rest of the chain: counts invocations and answers with
/// a fixed RESOLVED response.
#[derive(Debug)]
pub struct MockResolver {
    calls: AtomicUsize,
}

pub const MOCK_REASON: &str = "delegated downstream";

impl MockResolver {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Resolver for MockResolver {
    async fn resolve(&self, _request: &DnsRequest) -> Result<DnsResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DnsResponse::new(ResponseType::Resolved, MOCK_REASON, vec![]))
    }

    fn stage_type(&self) -> &'static str {
        "mock"
    }
}
