//! List subsystem events.
//!
//! The downloader publishes one "download-failed" event per failed attempt
//! through an explicitly injected [`ListEventEmitter`]; there is no global
//! bus. Emission is fire-and-forget and never blocks the retry loop;
//! subscribers consume the channel at their own pace.

pub mod emitter;
pub mod types;

pub use emitter::ListEventEmitter;
pub use types::DownloadFailedEvent;
