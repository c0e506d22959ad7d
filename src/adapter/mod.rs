//! Notification adapter
//!
//! Sits between the internal lifecycle event stream and the host
//! environment: translates host requests into internal commands, filters
//! and renames internal events into the normalized outward feed, and ties
//! the subscription set to the application mount lifecycle.

pub mod inbound;
pub mod outbound;
pub(crate) mod policy;

pub use inbound::{
    REQUEST_ABORT_CALL, REQUEST_END_CALL, REQUEST_SET_MUTED, REQUEST_SET_SPEAKER_MODE,
    REQUEST_TOGGLE_CAMERA_FACING, REQUEST_TOGGLE_LOCAL_VIDEO,
};
pub use outbound::{EventEnvelope, OutboundEventName};

use crate::bridge::{AudioRouter, HostBridge, Subscription};
use crate::events::LifecycleEvent;
use crate::store::Store;
use inbound::CommandContext;
use std::sync::Arc;

/// Translates between the internal lifecycle stream and a host environment.
///
/// One instance per process, owned by whoever drives the event queue; all
/// methods take `&mut self` and are called as non-overlapping invocations
/// from that single queue. Constructed without a bridge the adapter is
/// fully inert.
pub struct NotificationAdapter {
    bridge: Option<Arc<dyn HostBridge>>,
    store: Arc<dyn Store>,
    audio: Arc<dyn AudioRouter>,
    subscriptions: Vec<Subscription>,
    registered: bool,
}

impl NotificationAdapter {
    pub fn new(
        bridge: Option<Arc<dyn HostBridge>>,
        store: Arc<dyn Store>,
        audio: Arc<dyn AudioRouter>,
    ) -> Self {
        if bridge.is_none() {
            tracing::info!("no host bridge available, notification adapter is inert");
        }
        Self {
            bridge,
            store,
            audio,
            subscriptions: Vec::new(),
            registered: false,
        }
    }

    /// Whether a subscription set is currently installed.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Process one internal lifecycle event.
    ///
    /// Mount and unmount drive the subscription state machine; everything
    /// else goes through the outward translation policy. Events must be fed
    /// in delivery order.
    pub fn handle_event(&mut self, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::AppWillMount => self.register_subscriptions(),
            LifecycleEvent::AppWillUnmount => self.release_subscriptions(),
            _ => self.forward(event),
        }
    }

    fn forward(&self, event: &LifecycleEvent) {
        if !self.registered {
            return;
        }
        let bridge = match &self.bridge {
            Some(bridge) => bridge,
            None => return,
        };

        let snapshot = self.store.snapshot();
        if let Some(envelope) = policy::plan(event, &snapshot) {
            tracing::debug!(name = envelope.name.as_str(), "forwarding event to host");
            bridge.emit(&envelope);
        }
    }

    /// Install a fresh subscription set, releasing any previous one first.
    /// There is at most one active set at any time.
    fn register_subscriptions(&mut self) {
        self.release_subscriptions();

        let bridge = match &self.bridge {
            Some(bridge) => bridge.clone(),
            None => return,
        };

        let context = Arc::new(CommandContext {
            store: self.store.clone(),
            audio: self.audio.clone(),
        });
        self.subscriptions = inbound::register_all(bridge.as_ref(), context);
        self.registered = true;
        tracing::debug!(
            count = self.subscriptions.len(),
            "host request subscriptions installed"
        );
    }

    /// Release every subscription, synchronously and totally.
    fn release_subscriptions(&mut self) {
        if let Some(bridge) = &self.bridge {
            for subscription in self.subscriptions.drain(..) {
                bridge.unregister(subscription);
            }
        }
        self.registered = false;
    }
}
