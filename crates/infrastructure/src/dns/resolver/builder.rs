use super::stage::{ChainedResolver, Resolver};
use palisade_dns_domain::DomainError;
use std::sync::Arc;
use tracing::info;

/// Assembles a resolver chain once at startup.
///
/// Disabled stages are dropped here, at construction time; `resolve` never
/// branches on enablement. The remaining stages are linked in registration
/// order, the last one pointing at the optional terminal resolver. Without
/// a terminal, a request no stage answers fails closed.
pub struct ChainBuilder {
    stages: Vec<Arc<dyn ChainedResolver>>,
    terminal: Option<Arc<dyn Resolver>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            terminal: None,
        }
    }

    pub fn with_stage(mut self, stage: Arc<dyn ChainedResolver>) -> Self {
        self.stages.push(stage);
        self
    }

    /// A non-chained resolver that answers whatever the stages delegate.
    pub fn with_terminal(mut self, terminal: Arc<dyn Resolver>) -> Self {
        self.terminal = Some(terminal);
        self
    }

    pub fn build(self) -> Result<Arc<dyn Resolver>, DomainError> {
        let stages: Vec<Arc<dyn ChainedResolver>> = self
            .stages
            .into_iter()
            .filter(|stage| {
                let enabled = stage.is_enabled();
                if !enabled {
                    info!(stage = stage.stage_type(), "skipping disabled stage");
                }
                enabled
            })
            .collect();

        for pair in stages.windows(2) {
            pair[0].next_link().set(pair[1].clone());
        }

        if let (Some(last), Some(terminal)) = (stages.last(), self.terminal.as_ref()) {
            last.next_link().set(terminal.clone());
        }

        for stage in &stages {
            stage.log_config();
            info!(stage = stage.stage_type(), "resolver stage linked");
        }

        match stages.into_iter().next() {
            Some(head) => {
                let head: Arc<dyn Resolver> = head;
                Ok(head)
            }
            None => self.terminal.ok_or(DomainError::EmptyChain),
        }
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
