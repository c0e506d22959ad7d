//! Host bridge trait definitions

use crate::adapter::EventEnvelope;
use serde_json::Value;

/// Callback invoked with the raw payload of a host request.
pub type RequestHandler = Box<dyn Fn(Value) + Send + Sync>;

/// Opaque handle for one registered host request.
///
/// Not cloneable: a subscription is released exactly once, by moving it into
/// [`HostBridge::unregister`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    event: String,
}

impl Subscription {
    pub fn new(id: u64, event: impl Into<String>) -> Self {
        Self {
            id,
            event: event.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Request name this subscription was registered for
    pub fn event(&self) -> &str {
        &self.event
    }
}

/// Two-way bridge to the host environment.
///
/// Registration is keyed by request name; emission is fire-and-forget. A
/// bridge implementation must not call back into the adapter from inside
/// `register` or `emit`.
pub trait HostBridge: Send + Sync {
    /// Register interest in one host request name.
    fn register(&self, event: &str, handler: RequestHandler) -> Subscription;

    /// Release a subscription. Releasing an already-released subscription is
    /// impossible by construction; releasing a subscription from a different
    /// bridge instance is a logged no-op.
    fn unregister(&self, subscription: Subscription);

    /// Send a normalized event to the host. Best-effort; delivery failures
    /// stay inside the bridge.
    fn emit(&self, event: &EventEnvelope);
}
