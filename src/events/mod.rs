//! Internal lifecycle events
//!
//! This module defines the event stream the notification adapter observes:
//! - `LifecycleEvent` tagged variants for conference, connection and UI events
//! - `Conference`/`Connection` handles shared across the application
//! - `FailureError`/`ErrorValue` internal error representations

pub mod failure;
pub mod handles;

pub use failure::{ErrorValue, FailureError};
pub use handles::{Conference, Connection, ConnectionId};

use std::sync::Arc;
use url::Url;

/// UI surfaces whose click events are reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The stage view showing the dominant participant
    LargeVideo,
    /// A participant thumbnail in the filmstrip
    ThumbnailVideo,
    /// The local participant's self view
    LocalVideo,
}

/// One event on the internal lifecycle stream.
///
/// All events are delivered to the adapter on a single logical queue, in
/// order, as non-overlapping callback invocations.
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    /// The application is about to mount its UI tree
    AppWillMount,

    /// The application is about to unmount its UI tree
    AppWillUnmount,

    /// A room was selected, before any connection exists
    RoomSelected {
        /// Raw room identifier as entered or deep-linked
        room: String,
    },

    /// A conference instance was created and is about to be joined
    ConferenceWillJoin { conference: Arc<Conference> },

    /// The local participant joined the conference
    ConferenceJoined { conference: Arc<Conference> },

    /// The local participant left the conference
    ConferenceLeft { conference: Arc<Conference> },

    /// Joining or staying in the conference failed
    ConferenceFailed {
        conference: Arc<Conference>,
        error: ErrorValue,
    },

    /// Establishing the signaling connection failed
    ConnectionFailed {
        connection: Arc<Connection>,
        error: ErrorValue,
    },

    /// The signaling connection was torn down
    ConnectionDisconnected { connection: Arc<Connection> },

    /// The deployment configuration could not be loaded
    ConfigLoadError {
        /// Location being loaded when the failure happened, if known
        location_url: Option<Url>,
        error: ErrorValue,
    },

    /// The application entered picture-in-picture mode
    EnteredPictureInPicture,

    /// A video surface was clicked
    UiClick { target: ClickTarget },
}

/// Characters that cannot appear in a room identifier. A room name is a
/// single URL path segment, so URL-reserved and quoting characters are
/// rejected along with whitespace.
const ROOM_RESERVED_CHARS: &[char] = &['?', '&', ':', '\'', '"', '%', '#', '/'];

/// Check whether a room identifier is syntactically valid.
pub fn is_room_valid(room: &str) -> bool {
    !room.is_empty()
        && !room
            .chars()
            .any(|c| c.is_whitespace() || ROOM_RESERVED_CHARS.contains(&c))
}
