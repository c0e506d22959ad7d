//! Audio routing capability
//!
//! The native audio mode module is consumed as a fixed interface. Speaker
//! mode requests route through it directly rather than through the store.

use serde::{Deserialize, Serialize};

/// Output device the host can route call audio to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioDevice {
    Earpiece,
    Speaker,
}

/// Native audio routing, implemented per platform by the embedder.
pub trait AudioRouter: Send + Sync {
    fn set_audio_device(&self, device: AudioDevice);
}

/// Inert router for platforms without native audio routing.
#[derive(Debug, Default)]
pub struct NoopAudioRouter;

impl AudioRouter for NoopAudioRouter {
    fn set_audio_device(&self, _device: AudioDevice) {}
}
