//! Terminal response model shared by all chain stages.

use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::Record;
use palisade_dns_domain::ResponseType;

/// A terminal resolution result: the DNS message payload, a tag naming the
/// kind of stage that produced it, and a human-readable reason for logs.
///
/// Created fresh by whichever stage terminates the chain; ownership
/// transfers to the caller.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub message: Message,
    pub response_type: ResponseType,
    pub reason: String,
}

impl DnsResponse {
    pub fn new(response_type: ResponseType, reason: impl Into<String>, answers: Vec<Record>) -> Self {
        let mut message = Message::new(0, MessageType::Response, OpCode::Query);
        for answer in answers {
            message.add_answer(answer);
        }

        Self {
            message,
            response_type,
            reason: reason.into(),
        }
    }

    pub fn resolved(reason: impl Into<String>, answers: Vec<Record>) -> Self {
        Self::new(ResponseType::Resolved, reason, answers)
    }

    pub fn safe_search(reason: impl Into<String>, answers: Vec<Record>) -> Self {
        Self::new(ResponseType::SafeSearch, reason, answers)
    }

    pub fn answers(&self) -> &[Record] {
        self.message.answers()
    }
}
