//! Live notification channel
//!
//! Publish-only broadcast used to tell currently connected web clients
//! that a call has ended. No per-listener addressing, no delivery
//! guarantee, no replay for listeners that connect after an event fires.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

/// Buffered events per subscriber before the slowest one starts lagging
const CHANNEL_CAPACITY: usize = 64;

/// Events pushed to connected web clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum CallEvent {
    #[serde(rename_all = "camelCase")]
    CallEnded { call_id: String },
}

/// Handle to the broadcast channel; cloning shares the same channel
#[derive(Debug, Clone)]
pub struct CallEvents {
    sender: broadcast::Sender<CallEvent>,
}

impl CallEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish an event to every current subscriber.
    ///
    /// Fire-and-forget: a send error only means nobody is listening.
    pub fn publish(&self, event: CallEvent) {
        let delivered = self.sender.send(event.clone()).unwrap_or(0);
        debug!(?event, delivered, "broadcast published");
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<CallEvent> {
        self.sender.subscribe()
    }
}

impl Default for CallEvents {
    fn default() -> Self {
        Self::new()
    }
}
