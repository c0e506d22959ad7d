//! Inbound host request handling
//!
//! Host-originated call control requests, identified by fixed names, are
//! translated into internal commands. Handlers receive an explicit command
//! context; malformed payloads are logged and dropped, never surfaced back
//! to the host.

use crate::bridge::{AudioDevice, AudioRouter, HostBridge, Subscription};
use crate::store::{Command, Store};
use crate::utils::error::RequestError;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Mute or unmute local audio: `{ "muted": bool }`
pub const REQUEST_SET_MUTED: &str = "set-muted";

/// Mute or unmute local video: `{ "muted": bool }`
pub const REQUEST_TOGGLE_LOCAL_VIDEO: &str = "toggle-local-video";

/// Switch between front and back camera, no payload
pub const REQUEST_TOGGLE_CAMERA_FACING: &str = "toggle-camera-facing";

/// Route call audio: `{ "device": "EARPIECE" | "SPEAKER" }`
pub const REQUEST_SET_SPEAKER_MODE: &str = "set-speaker-mode";

/// End the identified call: `{ "callId": uuid }`
pub const REQUEST_END_CALL: &str = "end-call";

/// System-initiated end of the identified call, same payload and handling
/// as [`REQUEST_END_CALL`]
pub const REQUEST_ABORT_CALL: &str = "abort-call";

/// Dispatch context handed to every request handler.
pub(crate) struct CommandContext {
    pub store: Arc<dyn Store>,
    pub audio: Arc<dyn AudioRouter>,
}

type Handler = fn(&CommandContext, &Value);

/// One subscription per recognized request name.
pub(crate) fn register_all(
    bridge: &dyn HostBridge,
    context: Arc<CommandContext>,
) -> Vec<Subscription> {
    let table: [(&str, Handler); 6] = [
        (REQUEST_SET_MUTED, on_set_muted),
        (REQUEST_TOGGLE_LOCAL_VIDEO, on_toggle_local_video),
        (REQUEST_TOGGLE_CAMERA_FACING, on_toggle_camera_facing),
        (REQUEST_SET_SPEAKER_MODE, on_set_speaker_mode),
        (REQUEST_END_CALL, on_end_call),
        (REQUEST_ABORT_CALL, on_end_call),
    ];

    table
        .iter()
        .map(|(event, handler)| {
            let context = context.clone();
            let handler = *handler;
            bridge.register(event, Box::new(move |payload| handler(&context, &payload)))
        })
        .collect()
}

fn on_set_muted(context: &CommandContext, payload: &Value) {
    match bool_field(payload, "muted") {
        Ok(muted) => {
            tracing::debug!(muted, "host requested audio mute");
            context.store.dispatch(Command::SetAudioMuted { muted });
        }
        Err(error) => tracing::warn!(%error, "ignoring malformed set-muted request"),
    }
}

fn on_toggle_local_video(context: &CommandContext, payload: &Value) {
    let muted = match bool_field(payload, "muted") {
        Ok(muted) => muted,
        Err(error) => {
            tracing::warn!(%error, "ignoring malformed toggle-local-video request");
            return;
        }
    };

    let snapshot = context.store.snapshot();

    // Video cannot come back while audio-only mode is on.
    if snapshot.audio_only.enabled {
        context.store.dispatch(Command::SetAudioOnly { enabled: false });
    }

    if snapshot.tracks.video_muted == muted {
        tracing::debug!(muted, "local video already in requested state");
        return;
    }

    tracing::debug!(muted, "host requested video mute");
    context.store.dispatch(Command::SetVideoMuted { muted });
}

fn on_toggle_camera_facing(context: &CommandContext, _payload: &Value) {
    tracing::debug!("host requested camera facing toggle");
    context.store.dispatch(Command::ToggleCameraFacing);
}

fn on_set_speaker_mode(context: &CommandContext, payload: &Value) {
    match device_field(payload) {
        Ok(device) => {
            tracing::debug!(?device, "host requested audio route");
            context.audio.set_audio_device(device);
        }
        Err(error) => tracing::warn!(%error, "ignoring malformed set-speaker-mode request"),
    }
}

fn on_end_call(context: &CommandContext, payload: &Value) {
    let call_id = match call_id_field(payload) {
        Ok(call_id) => call_id,
        Err(error) => {
            tracing::warn!(%error, "ignoring malformed end-call request");
            return;
        }
    };

    let snapshot = context.store.snapshot();
    let conference = match snapshot.conference.current {
        Some(conference) => conference,
        None => {
            tracing::debug!(%call_id, "end-call with no active conference");
            return;
        }
    };

    // A mismatch means the request refers to a call the application no
    // longer considers active.
    if conference.call_id() != Some(call_id) {
        tracing::debug!(%call_id, "end-call for an inactive call id");
        return;
    }

    tracing::debug!(%call_id, "host ended the call");
    context.store.dispatch(Command::Navigate { location: None });
}

fn bool_field(payload: &Value, field: &'static str) -> Result<bool, RequestError> {
    payload
        .get(field)
        .ok_or(RequestError::MissingField(field))?
        .as_bool()
        .ok_or(RequestError::InvalidField(field))
}

fn device_field(payload: &Value) -> Result<AudioDevice, RequestError> {
    let value = payload
        .get("device")
        .ok_or(RequestError::MissingField("device"))?;
    serde_json::from_value(value.clone()).map_err(|_| RequestError::InvalidField("device"))
}

fn call_id_field(payload: &Value) -> Result<Uuid, RequestError> {
    let raw = payload
        .get("callId")
        .ok_or(RequestError::MissingField("callId"))?
        .as_str()
        .ok_or(RequestError::InvalidField("callId"))?;
    Ok(raw.parse()?)
}
