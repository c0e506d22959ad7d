//! In-memory reference store
//!
//! Applies commands to its own snapshot just enough for tests and simple
//! embeddings, and records every dispatch for inspection.

use super::{AppSnapshot, Command, Store};
use crate::events::Conference;
use parking_lot::RwLock;
use std::sync::Arc;
use url::Url;

/// Reference `Store` backed by an in-memory snapshot.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<AppSnapshot>,
    commands: RwLock<Vec<Command>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the current location URL.
    pub fn set_location_url(&self, location_url: Option<Url>) {
        self.state.write().connection.location_url = location_url;
    }

    /// Add a still-active conference and make it current.
    pub fn add_conference(&self, conference: Arc<Conference>) {
        let mut state = self.state.write();
        state.conference.all.push(conference.clone());
        state.conference.current = Some(conference);
    }

    /// Remove a conference from the active set.
    pub fn remove_conference(&self, conference: &Arc<Conference>) {
        let mut state = self.state.write();
        state.conference.all.retain(|c| !Arc::ptr_eq(c, conference));
        if state
            .conference
            .current
            .as_ref()
            .is_some_and(|c| Arc::ptr_eq(c, conference))
        {
            state.conference.current = state.conference.all.last().cloned();
        }
    }

    /// Set the local track mute states.
    pub fn set_tracks(&self, audio_muted: bool, video_muted: bool) {
        let mut state = self.state.write();
        state.tracks.audio_muted = audio_muted;
        state.tracks.video_muted = video_muted;
    }

    /// Enter or leave audio-only mode.
    pub fn set_audio_only(&self, enabled: bool) {
        self.state.write().audio_only.enabled = enabled;
    }

    /// Every command dispatched so far, in order.
    pub fn commands(&self) -> Vec<Command> {
        self.commands.read().clone()
    }

    fn apply(&self, command: &Command) {
        let mut state = self.state.write();
        match command {
            Command::SetAudioMuted { muted } => state.tracks.audio_muted = *muted,
            Command::SetVideoMuted { muted } => state.tracks.video_muted = *muted,
            Command::SetAudioOnly { enabled } => state.audio_only.enabled = *enabled,
            Command::ToggleCameraFacing => {}
            Command::Navigate { location } => match location {
                Some(url) => state.connection.location_url = Some(url.clone()),
                None => {
                    // Leaving: the call is over, so the recorded call id goes too.
                    if let Some(current) = state.conference.current.take() {
                        current.set_call_id(None);
                        state.conference.all.retain(|c| !Arc::ptr_eq(c, &current));
                    }
                }
            },
        }
    }
}

impl Store for MemoryStore {
    fn dispatch(&self, command: Command) {
        tracing::debug!(?command, "dispatching command");
        self.apply(&command);
        self.commands.write().push(command);
    }

    fn snapshot(&self) -> AppSnapshot {
        self.state.read().clone()
    }
}
