use super::stage::{ChainedResolver, Configurable, NextResolver, Resolver, StageConfig};
use crate::dns::model::DnsResponse;
use async_trait::async_trait;
use hickory_proto::rr::rdata::CNAME;
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use palisade_dns_domain::{
    fqdn_eq, to_fqdn, ConfigError, DnsRequest, DomainError, ResponseType, SafeSearchConfig,
};
use std::str::FromStr;
use tracing::{debug, info};

const STAGE_TYPE: &str = "safe_search";

/// TTL for synthesized enforcement records.
const ENFORCED_CNAME_TTL: u32 = 3600;

impl StageConfig for SafeSearchConfig {
    fn is_enabled(&self) -> bool {
        SafeSearchConfig::is_enabled(self)
    }

    fn log(&self) {
        let mut engines: Vec<&str> = self.search_engines.keys().map(String::as_str).collect();
        engines.sort_unstable();
        info!(
            stage = STAGE_TYPE,
            client_groups = self.client_groups.len(),
            search_engines = ?engines,
            "effective stage configuration"
        );
    }
}

/// Policy stage that pins configured search-engine domains to their
/// provider-published safe-search CNAME.
///
/// Address and alias lookups (A, AAAA, CNAME) for a protected domain
/// short-circuit the chain with a synthesized answer; every other query
/// type, and every non-matching name, is delegated unchanged.
#[derive(Debug)]
pub struct SafeSearchResolver {
    config: Configurable<SafeSearchConfig>,
    next: NextResolver,
}

impl SafeSearchResolver {
    pub fn new(mut cfg: SafeSearchConfig) -> Result<Self, ConfigError> {
        cfg.apply_defaults();
        cfg.validate()?;

        Ok(Self {
            config: Configurable::new(cfg),
            next: NextResolver::new(),
        })
    }

    fn lookup_search_engines(
        &self,
        request: &DnsRequest,
    ) -> Result<(Vec<Record>, Vec<&str>), DomainError> {
        let mut answers = Vec::new();
        let mut matched = Vec::new();

        for question in &request.questions {
            if !question.record_type.is_address_or_alias() {
                continue;
            }

            for (engine_name, engine) in &self.config.cfg().search_engines {
                if fqdn_eq(&question.name, &engine.domain) {
                    answers.push(enforced_cname_record(&question.name, &engine.enforced_cname)?);
                    matched.push(engine_name.as_str());
                }
            }
        }

        Ok((answers, matched))
    }
}

/// Synthesize the enforcement record: class IN, fixed TTL, owner = the
/// question name, target = the fully-qualified enforced CNAME.
fn enforced_cname_record(owner: &str, target: &str) -> Result<Record, DomainError> {
    let owner = Name::from_str(&to_fqdn(owner))
        .map_err(|e| DomainError::InvalidDomainName(format!("{owner}: {e}")))?;
    let target = Name::from_str(&to_fqdn(target))
        .map_err(|e| DomainError::InvalidDomainName(format!("{target}: {e}")))?;

    let mut record = Record::from_rdata(owner, ENFORCED_CNAME_TTL, RData::CNAME(CNAME(target)));
    record.set_dns_class(DNSClass::IN);
    Ok(record)
}

#[async_trait]
impl Resolver for SafeSearchResolver {
    async fn resolve(&self, request: &DnsRequest) -> Result<DnsResponse, DomainError> {
        let (answers, matched) = self.lookup_search_engines(request)?;

        if !answers.is_empty() {
            debug!(stage = STAGE_TYPE, engines = ?matched, "enforcing safe search");
            let reason = format!("safe search enforced for {}", matched.join(", "));
            return Ok(DnsResponse::new(ResponseType::SafeSearch, reason, answers));
        }

        self.next.resolve_next(STAGE_TYPE, request).await
    }

    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn log_config(&self) {
        self.config.log_config()
    }

    fn stage_type(&self) -> &'static str {
        STAGE_TYPE
    }
}

impl ChainedResolver for SafeSearchResolver {
    fn next_link(&self) -> &NextResolver {
        &self.next
    }
}
