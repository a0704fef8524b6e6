use super::types::DownloadFailedEvent;
use tokio::sync::mpsc;

/// Non-blocking emitter for list events.
///
/// Uses an unbounded channel so publication never suspends the retry loop.
/// When disabled, or when the receiver is gone, events are silently dropped:
/// failure telemetry is best-effort and never a reason to fail a download.
#[derive(Clone, Default)]
pub struct ListEventEmitter {
    sender: Option<mpsc::UnboundedSender<DownloadFailedEvent>>,
}

impl ListEventEmitter {
    /// An emitter that drops everything (no subscriber wired up).
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    /// An enabled emitter plus the receiver for the consumer task.
    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<DownloadFailedEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sender: Some(tx) }, rx)
    }

    /// Publish an event. Never blocks, never fails.
    pub fn emit(&self, event: DownloadFailedEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl std::fmt::Debug for ListEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
