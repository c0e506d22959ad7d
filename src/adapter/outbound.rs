//! Outward event envelope
//!
//! The normalized unit sent to the host. Names come from a fixed, finite
//! set; payloads carry only derived primitives (a normalized URL string, a
//! stringified error), never live conference or connection handles.

use serde::Serialize;
use serde_json::{Map, Value};

/// Fixed set of outward event identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutboundEventName {
    /// The conference ended, by user request or because of a terminal error
    #[serde(rename = "CONFERENCE_TERMINATED")]
    ConferenceTerminated,

    /// A conference is about to be joined
    #[serde(rename = "CONFERENCE_WILL_JOIN")]
    ConferenceWillJoin,

    /// The conference was joined
    #[serde(rename = "CONFERENCE_JOINED")]
    ConferenceJoined,

    /// The application entered picture-in-picture mode
    #[serde(rename = "ENTER_PICTURE_IN_PICTURE")]
    EnterPictureInPicture,

    #[serde(rename = "LARGE_VIDEO_CLICK")]
    LargeVideoClick,

    #[serde(rename = "THUMBNAIL_VIDEO_CLICK")]
    ThumbnailVideoClick,

    #[serde(rename = "LOCAL_VIDEO_CLICK")]
    LocalVideoClick,
}

impl OutboundEventName {
    /// Wire name of this event
    pub fn as_str(&self) -> &'static str {
        match self {
            OutboundEventName::ConferenceTerminated => "CONFERENCE_TERMINATED",
            OutboundEventName::ConferenceWillJoin => "CONFERENCE_WILL_JOIN",
            OutboundEventName::ConferenceJoined => "CONFERENCE_JOINED",
            OutboundEventName::EnterPictureInPicture => "ENTER_PICTURE_IN_PICTURE",
            OutboundEventName::LargeVideoClick => "LARGE_VIDEO_CLICK",
            OutboundEventName::ThumbnailVideoClick => "THUMBNAIL_VIDEO_CLICK",
            OutboundEventName::LocalVideoClick => "LOCAL_VIDEO_CLICK",
        }
    }
}

/// One normalized event for the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    pub name: OutboundEventName,
    pub payload: Map<String, Value>,
}

impl EventEnvelope {
    pub fn new(name: OutboundEventName) -> Self {
        Self {
            name,
            payload: Map::new(),
        }
    }

    /// Attach the normalized URL field.
    pub fn with_url(mut self, url: String) -> Self {
        self.payload.insert("url".to_string(), Value::String(url));
        self
    }

    /// Attach the stringified error field.
    pub fn with_error(mut self, error: String) -> Self {
        self.payload.insert("error".to_string(), Value::String(error));
        self
    }

    /// Value of the `url` payload field, if present
    pub fn url(&self) -> Option<&str> {
        self.payload.get("url").and_then(Value::as_str)
    }

    /// Value of the `error` payload field, if present
    pub fn error(&self) -> Option<&str> {
        self.payload.get("error").and_then(Value::as_str)
    }
}
