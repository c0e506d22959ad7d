//! Callbridge - host notification bridge for embedded conferencing clients.
//!
//! An embedded video conferencing client runs inside a host environment
//! (a containing mobile or desktop application) that wants to drive the call
//! and observe its lifecycle without ever touching internal state. This
//! crate provides the translation layer:
//!
//! - Host requests (mute, hang up, camera, audio route) become internal
//!   commands dispatched through the application store.
//! - Internal lifecycle events are filtered, deduplicated and renamed into
//!   a small, fixed outward event feed carrying only derived primitives.
//! - The subscription set toward the host is tied to the application mount
//!   lifecycle.

pub mod adapter;
pub mod bridge;
pub mod events;
pub mod runtime;
pub mod store;
pub mod utils;

pub use adapter::{EventEnvelope, NotificationAdapter, OutboundEventName};
pub use bridge::{AudioDevice, AudioRouter, ChannelBridge, HostBridge, NoopAudioRouter, Subscription};
pub use events::{
    ClickTarget, Conference, Connection, ConnectionId, ErrorValue, FailureError, LifecycleEvent,
};
pub use runtime::spawn_event_pump;
pub use store::{AppSnapshot, Command, MemoryStore, Store};
