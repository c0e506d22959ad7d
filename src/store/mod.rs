//! Command dispatch contract
//!
//! The adapter consumes the application's store through a narrow interface:
//! dispatch an internal command, or read a snapshot of the feature states it
//! cares about. The store itself (reducers, middleware) belongs to the
//! embedding application; `MemoryStore` is the reference implementation used
//! in tests and simple embeddings.

pub mod memory;

pub use memory::MemoryStore;

use crate::events::Conference;
use std::sync::Arc;
use url::Url;

/// Internal command dispatched through the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mute or unmute the local audio track
    SetAudioMuted { muted: bool },

    /// Mute or unmute the local video track
    SetVideoMuted { muted: bool },

    /// Enter or leave audio-only mode
    SetAudioOnly { enabled: bool },

    /// Switch between front and back camera
    ToggleCameraFacing,

    /// Navigate to a location; `None` leaves the current conference
    Navigate { location: Option<Url> },
}

/// Connection feature state
#[derive(Debug, Clone, Default)]
pub struct ConnectionFeature {
    /// Location the application is currently connecting to or connected at
    pub location_url: Option<Url>,
}

/// Conference feature state
#[derive(Debug, Clone, Default)]
pub struct ConferenceFeature {
    /// The conference call control currently targets
    pub current: Option<Arc<Conference>>,

    /// Every still-active conference (joining or joined), in join order
    pub all: Vec<Arc<Conference>>,
}

/// Local media track state
#[derive(Debug, Clone, Copy, Default)]
pub struct TracksFeature {
    pub audio_muted: bool,
    pub video_muted: bool,
}

/// Audio-only mode state
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioOnlyFeature {
    pub enabled: bool,
}

/// Point-in-time view of the feature states the adapter reads.
#[derive(Debug, Clone, Default)]
pub struct AppSnapshot {
    pub connection: ConnectionFeature,
    pub conference: ConferenceFeature,
    pub tracks: TracksFeature,
    pub audio_only: AudioOnlyFeature,
}

/// Dispatch interface consumed by the adapter.
pub trait Store: Send + Sync {
    /// Dispatch an internal command. Never fails; unknown or inapplicable
    /// commands are the store's business.
    fn dispatch(&self, command: Command);

    /// Snapshot the feature states.
    fn snapshot(&self) -> AppSnapshot;
}
