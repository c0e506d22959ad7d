//! Channel-backed host bridge
//!
//! In-process `HostBridge` implementation: the outward event feed goes into
//! a broadcast channel the host side subscribes to, and inbound requests are
//! injected with [`ChannelBridge::deliver`].

use super::traits::{HostBridge, RequestHandler, Subscription};
use crate::adapter::EventEnvelope;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

/// Default outward feed capacity
const DEFAULT_CAPACITY: usize = 100;

/// `HostBridge` backed by tokio channels.
pub struct ChannelBridge {
    handlers: RwLock<HashMap<u64, (String, RequestHandler)>>,
    next_id: AtomicU64,
    events_tx: broadcast::Sender<EventEnvelope>,
}

impl ChannelBridge {
    /// Create a bridge whose outward feed buffers up to `capacity` events.
    pub fn new(capacity: usize) -> Self {
        let (events_tx, _) = broadcast::channel(capacity);
        Self {
            handlers: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
            events_tx,
        }
    }

    /// Subscribe to the outward event feed.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events_tx.subscribe()
    }

    /// Deliver a host request to every handler registered for `event`.
    ///
    /// A request with no registered handler is ignored.
    pub fn deliver(&self, event: &str, payload: Value) {
        let handlers = self.handlers.read();
        let mut delivered = false;
        for (name, handler) in handlers.values() {
            if name == event {
                handler(payload.clone());
                delivered = true;
            }
        }
        if !delivered {
            tracing::debug!(event, "no handler registered for host request");
        }
    }

    /// Number of currently registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl Default for ChannelBridge {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HostBridge for ChannelBridge {
    fn register(&self, event: &str, handler: RequestHandler) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.handlers.write().insert(id, (event.to_string(), handler));
        Subscription::new(id, event)
    }

    fn unregister(&self, subscription: Subscription) {
        if self.handlers.write().remove(&subscription.id()).is_none() {
            tracing::warn!(
                event = subscription.event(),
                "released a subscription this bridge does not hold"
            );
        }
    }

    fn emit(&self, event: &EventEnvelope) {
        // No receivers is fine; the feed is fire-and-forget.
        let _ = self.events_tx.send(event.clone());
    }
}
