//! Resolver chain.
//!
//! An incoming request enters the first stage of a chain built once at
//! startup. Each stage either produces a terminal [`DnsResponse`] or
//! forwards the request, untouched, to its successor. Stages are immutable
//! after construction, so one chain serves any number of concurrent
//! resolutions without locking.
//!
//! - [`stage`]: the `Resolver` capability, the generic `Configurable`
//!   holder and the set-once `NextResolver` chain link
//! - [`safe_search`]: the safe-search enforcement stage
//! - [`builder`]: construction-time chain assembly
//!
//! [`DnsResponse`]: super::model::DnsResponse

pub mod builder;
pub mod safe_search;
pub mod stage;

pub use builder::ChainBuilder;
pub use safe_search::SafeSearchResolver;
pub use stage::{ChainedResolver, Configurable, NextResolver, Resolver, StageConfig};
