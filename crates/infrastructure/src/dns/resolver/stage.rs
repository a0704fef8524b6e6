use super::super::model::DnsResponse;
use async_trait::async_trait;
use palisade_dns_domain::{DnsRequest, DomainError};
use std::sync::{Arc, OnceLock};

/// Capability every pipeline stage implements.
#[async_trait]
pub trait Resolver: Send + Sync + std::fmt::Debug {
    /// Evaluate the request against this stage's immutable configuration.
    /// Either produces a terminal response or delegates to the successor;
    /// the request is never retained or mutated.
    async fn resolve(&self, request: &DnsRequest) -> Result<DnsResponse, DomainError>;

    /// Whether this stage is active. Disabled stages are skipped by the
    /// chain builder, not branched over inside `resolve`.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Diagnostic dump of the stage's effective configuration. Infallible.
    fn log_config(&self) {}

    /// Stable, human-readable stage identifier for logs and metrics.
    fn stage_type(&self) -> &'static str;
}

/// Enablement and diagnostics contract a stage configuration provides.
pub trait StageConfig {
    fn is_enabled(&self) -> bool;
    fn log(&self);
}

/// Holder for a stage's immutable configuration value, giving every stage
/// the same `is_enabled`/`log_config` plumbing.
#[derive(Debug)]
pub struct Configurable<C> {
    cfg: C,
}

impl<C: StageConfig> Configurable<C> {
    pub fn new(cfg: C) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &C {
        &self.cfg
    }

    pub fn is_enabled(&self) -> bool {
        self.cfg.is_enabled()
    }

    pub fn log_config(&self) {
        self.cfg.log()
    }
}

/// Non-owning link to the next stage, set exactly once at chain-build time.
///
/// A stage whose link was never set is terminal; delegating past it fails
/// closed with [`DomainError::NoNextResolver`].
#[derive(Debug, Default)]
pub struct NextResolver {
    next: OnceLock<Arc<dyn Resolver>>,
}

impl NextResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the successor. Calling this twice is a programming error.
    pub fn set(&self, next: Arc<dyn Resolver>) {
        if self.next.set(next).is_err() {
            panic!("next resolver is set exactly once at chain-build time");
        }
    }

    pub fn get(&self) -> Option<&Arc<dyn Resolver>> {
        self.next.get()
    }

    /// Delegate to the successor, failing closed when there is none.
    pub async fn resolve_next(
        &self,
        stage: &'static str,
        request: &DnsRequest,
    ) -> Result<DnsResponse, DomainError> {
        match self.next.get() {
            Some(next) => next.resolve(request).await,
            None => Err(DomainError::NoNextResolver(stage)),
        }
    }
}

/// A resolver that participates in a chain by exposing its outgoing link.
pub trait ChainedResolver: Resolver {
    fn next_link(&self) -> &NextResolver;
}
