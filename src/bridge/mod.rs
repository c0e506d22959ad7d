//! Host bridge abstraction
//!
//! Platform-agnostic seams toward the host environment:
//! - `HostBridge` for registering request handlers and emitting the outward
//!   event feed
//! - `AudioRouter` for the native audio routing capability
//! - `ChannelBridge`, an in-process implementation backed by tokio channels
//!
//! On platforms without native bridge support no `HostBridge` exists at all;
//! the adapter is constructed without one and stays inert.

pub mod audio;
pub mod channel;
pub mod traits;

pub use audio::{AudioDevice, AudioRouter, NoopAudioRouter};
pub use channel::ChannelBridge;
pub use traits::{HostBridge, RequestHandler, Subscription};
