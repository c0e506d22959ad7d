//! Outward translation policy
//!
//! Pure mapping from an internal lifecycle event to at most one outward
//! envelope: the swallow rules, the terminated rename and the payload
//! builders in one place, testable without any bridge present.
//!
//! `plan` expects the snapshot taken after the internal state transition the
//! event describes; for a "conference left" event the conference is already
//! gone from the snapshot, which is exactly what the same-URL swallow rule
//! relies on.

use super::outbound::{EventEnvelope, OutboundEventName};
use crate::events::{is_room_valid, ClickTarget, Connection, ErrorValue, LifecycleEvent};
use crate::store::AppSnapshot;
use crate::utils::error::stringify_error;
use crate::utils::url::normalize_url;

/// Decide whether `event` produces an outward envelope, and build it.
pub(crate) fn plan(event: &LifecycleEvent, snapshot: &AppSnapshot) -> Option<EventEnvelope> {
    match event {
        // Mount/unmount drive the subscription lifecycle, not the feed.
        LifecycleEvent::AppWillMount | LifecycleEvent::AppWillUnmount => None,

        LifecycleEvent::RoomSelected { room } => plan_early_will_join(room, snapshot),

        // The early trigger on room selection already announced this join;
        // the internal will-join fires only once a connection exists, which
        // is too late for the host.
        LifecycleEvent::ConferenceWillJoin { .. } => None,

        LifecycleEvent::ConferenceJoined { conference } => Some(
            EventEnvelope::new(OutboundEventName::ConferenceJoined)
                .with_url(normalize_url(conference.url())),
        ),

        LifecycleEvent::ConferenceLeft { conference } => {
            let url = normalize_url(conference.url());
            if still_active_on_url(snapshot, &url) {
                // The same URL was reloaded and is still genuinely connected;
                // a terminate notification now would be stale.
                return None;
            }
            Some(EventEnvelope::new(OutboundEventName::ConferenceTerminated).with_url(url))
        }

        LifecycleEvent::ConferenceFailed { conference, error } => {
            if error.is_recoverable() {
                // The application will retry or prompt; the failure stays
                // internal.
                return None;
            }
            Some(
                EventEnvelope::new(OutboundEventName::ConferenceTerminated)
                    .with_url(normalize_url(conference.url()))
                    .with_error(stringify_error(Some(error))),
            )
        }

        LifecycleEvent::ConnectionFailed { connection, error } => {
            plan_connection_failed(connection.as_ref(), error, snapshot)
        }

        LifecycleEvent::ConnectionDisconnected { connection } => {
            if connection.conference().is_some() {
                // A conference lived on this connection; its own lifecycle
                // events cover the teardown.
                return None;
            }
            // This event arrives late, so use the connection's own URL, not
            // whatever location is currently active.
            Some(
                EventEnvelope::new(OutboundEventName::ConferenceTerminated)
                    .with_url(normalize_url(connection.url())),
            )
        }

        LifecycleEvent::ConfigLoadError {
            location_url,
            error,
        } => {
            let mut envelope = EventEnvelope::new(OutboundEventName::ConferenceTerminated)
                .with_error(stringify_error(Some(error)));
            if let Some(url) = location_url {
                envelope = envelope.with_url(normalize_url(url));
            }
            Some(envelope)
        }

        LifecycleEvent::EnteredPictureInPicture => {
            Some(EventEnvelope::new(OutboundEventName::EnterPictureInPicture))
        }

        LifecycleEvent::UiClick { target } => {
            let name = match target {
                ClickTarget::LargeVideo => OutboundEventName::LargeVideoClick,
                ClickTarget::ThumbnailVideo => OutboundEventName::ThumbnailVideoClick,
                ClickTarget::LocalVideo => OutboundEventName::LocalVideoClick,
            };
            Some(EventEnvelope::new(name))
        }
    }
}

/// Announce an impending join as soon as a valid room and a location are
/// known, before any connection exists. The internal will-join would arrive
/// only after the connection is established.
fn plan_early_will_join(room: &str, snapshot: &AppSnapshot) -> Option<EventEnvelope> {
    if !is_room_valid(room) {
        return None;
    }
    let location_url = snapshot.connection.location_url.as_ref()?;
    Some(
        EventEnvelope::new(OutboundEventName::ConferenceWillJoin)
            .with_url(normalize_url(location_url)),
    )
}

/// A connection-level failure stands in for a conference failure only when
/// no conference was ever created on that connection; otherwise the eventual
/// conference-level event covers it and reporting both would double-count.
fn plan_connection_failed(
    connection: &Connection,
    error: &ErrorValue,
    snapshot: &AppSnapshot,
) -> Option<EventEnvelope> {
    if error.is_recoverable() {
        return None;
    }
    let location_url = snapshot.connection.location_url.as_ref()?;
    let has_conference = snapshot
        .conference
        .all
        .iter()
        .any(|c| c.connection_id() == Some(connection.id()));
    if has_conference {
        return None;
    }
    Some(
        EventEnvelope::new(OutboundEventName::ConferenceTerminated)
            .with_url(normalize_url(location_url))
            .with_error(error.name().to_string()),
    )
}

fn still_active_on_url(snapshot: &AppSnapshot, url: &str) -> bool {
    snapshot
        .conference
        .all
        .iter()
        .any(|c| normalize_url(c.url()) == url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Conference, FailureError};
    use crate::store::MemoryStore;
    use crate::store::Store;
    use url::Url;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn fatal(name: &str) -> ErrorValue {
        ErrorValue::Failure(FailureError::new(name, false))
    }

    #[test]
    fn test_joined_carries_normalized_url() {
        let store = MemoryStore::new();
        let conference = Conference::new(url("https://meet.example.com/room?jwt=abc"));
        store.add_conference(conference.clone());

        let envelope = plan(
            &LifecycleEvent::ConferenceJoined { conference },
            &store.snapshot(),
        )
        .unwrap();

        assert_eq!(envelope.name, OutboundEventName::ConferenceJoined);
        assert_eq!(envelope.url(), Some("https://meet.example.com/room"));
    }

    #[test]
    fn test_internal_will_join_is_always_swallowed() {
        let store = MemoryStore::new();
        store.set_location_url(Some(url("https://meet.example.com/room")));
        let conference = Conference::new(url("https://meet.example.com/room"));

        assert!(plan(
            &LifecycleEvent::ConferenceWillJoin { conference },
            &store.snapshot(),
        )
        .is_none());
    }

    #[test]
    fn test_early_will_join_requires_valid_room_and_location() {
        let store = MemoryStore::new();

        // No location known yet: skipped
        assert!(plan(
            &LifecycleEvent::RoomSelected {
                room: "standup".to_string()
            },
            &store.snapshot(),
        )
        .is_none());

        store.set_location_url(Some(url("https://meet.example.com/standup?jwt=x")));

        // Invalid room: skipped
        assert!(plan(
            &LifecycleEvent::RoomSelected {
                room: "bad room".to_string()
            },
            &store.snapshot(),
        )
        .is_none());

        let envelope = plan(
            &LifecycleEvent::RoomSelected {
                room: "standup".to_string()
            },
            &store.snapshot(),
        )
        .unwrap();
        assert_eq!(envelope.name, OutboundEventName::ConferenceWillJoin);
        assert_eq!(envelope.url(), Some("https://meet.example.com/standup"));
    }

    #[test]
    fn test_left_is_renamed_to_terminated() {
        let store = MemoryStore::new();
        let conference = Conference::new(url("https://meet.example.com/room"));
        // Conference already removed from state when the event is processed.

        let envelope = plan(
            &LifecycleEvent::ConferenceLeft { conference },
            &store.snapshot(),
        )
        .unwrap();
        assert_eq!(envelope.name, OutboundEventName::ConferenceTerminated);
        assert_eq!(envelope.url(), Some("https://meet.example.com/room"));
        assert_eq!(envelope.error(), None);
    }

    #[test]
    fn test_left_is_swallowed_while_same_url_still_active() {
        let store = MemoryStore::new();
        let remaining = Conference::new(url("https://meet.example.com/room?jwt=new"));
        let leaving = Conference::new(url("https://meet.example.com/room?jwt=old"));
        store.add_conference(remaining);

        // First close: another conference on the same normalized URL is
        // still active, so nothing goes out.
        assert!(plan(
            &LifecycleEvent::ConferenceLeft {
                conference: leaving.clone()
            },
            &store.snapshot(),
        )
        .is_none());

        // Last close: exactly one terminated event.
        let empty_store = MemoryStore::new();
        let envelope = plan(
            &LifecycleEvent::ConferenceLeft {
                conference: leaving
            },
            &empty_store.snapshot(),
        )
        .unwrap();
        assert_eq!(envelope.name, OutboundEventName::ConferenceTerminated);
    }

    #[test]
    fn test_recoverable_conference_failure_stays_internal() {
        let store = MemoryStore::new();
        let conference = Conference::new(url("https://meet.example.com/room"));
        let error = ErrorValue::Failure(FailureError::new("conference.passwordRequired", true));

        assert!(plan(
            &LifecycleEvent::ConferenceFailed { conference, error },
            &store.snapshot(),
        )
        .is_none());
    }

    #[test]
    fn test_fatal_conference_failure_terminates_with_error() {
        let store = MemoryStore::new();
        let conference = Conference::new(url("https://meet.example.com/room?jwt=abc"));

        let envelope = plan(
            &LifecycleEvent::ConferenceFailed {
                conference,
                error: fatal("conference.destroyed"),
            },
            &store.snapshot(),
        )
        .unwrap();

        assert_eq!(envelope.name, OutboundEventName::ConferenceTerminated);
        assert_eq!(envelope.url(), Some("https://meet.example.com/room"));
        assert_eq!(envelope.error(), Some("conference.destroyed"));
    }

    #[test]
    fn test_connection_failed_without_conference_synthesizes_terminated() {
        let store = MemoryStore::new();
        store.set_location_url(Some(url("https://meet.example.com/room?jwt=abc")));
        let connection = Connection::new(url("https://meet.example.com/room"));

        let envelope = plan(
            &LifecycleEvent::ConnectionFailed {
                connection,
                error: fatal("connection.otherError"),
            },
            &store.snapshot(),
        )
        .unwrap();

        assert_eq!(envelope.name, OutboundEventName::ConferenceTerminated);
        assert_eq!(envelope.url(), Some("https://meet.example.com/room"));
        assert_eq!(envelope.error(), Some("connection.otherError"));
    }

    #[test]
    fn test_connection_failed_with_conference_defers_to_conference_events() {
        let store = MemoryStore::new();
        store.set_location_url(Some(url("https://meet.example.com/room")));
        let connection = Connection::new(url("https://meet.example.com/room"));
        let conference =
            Conference::on_connection(url("https://meet.example.com/room"), &connection);
        store.add_conference(conference);

        assert!(plan(
            &LifecycleEvent::ConnectionFailed {
                connection,
                error: fatal("connection.otherError"),
            },
            &store.snapshot(),
        )
        .is_none());
    }

    #[test]
    fn test_recoverable_connection_failure_stays_internal() {
        let store = MemoryStore::new();
        store.set_location_url(Some(url("https://meet.example.com/room")));
        let connection = Connection::new(url("https://meet.example.com/room"));
        let error = ErrorValue::Failure(FailureError::new("connection.passwordRequired", true));

        assert!(plan(
            &LifecycleEvent::ConnectionFailed { connection, error },
            &store.snapshot(),
        )
        .is_none());
    }

    #[test]
    fn test_bare_connection_disconnect_uses_connection_url() {
        let store = MemoryStore::new();
        // The active location has already moved on.
        store.set_location_url(Some(url("https://meet.example.com/next")));
        let connection = Connection::new(url("https://meet.example.com/old?jwt=abc"));

        let envelope = plan(
            &LifecycleEvent::ConnectionDisconnected { connection },
            &store.snapshot(),
        )
        .unwrap();

        assert_eq!(envelope.name, OutboundEventName::ConferenceTerminated);
        assert_eq!(envelope.url(), Some("https://meet.example.com/old"));
    }

    #[test]
    fn test_disconnect_with_conference_is_swallowed() {
        let store = MemoryStore::new();
        let connection = Connection::new(url("https://meet.example.com/room"));
        let _conference =
            Conference::on_connection(url("https://meet.example.com/room"), &connection);

        assert!(plan(
            &LifecycleEvent::ConnectionDisconnected { connection },
            &store.snapshot(),
        )
        .is_none());
    }

    #[test]
    fn test_config_load_error_terminates() {
        let store = MemoryStore::new();

        let envelope = plan(
            &LifecycleEvent::ConfigLoadError {
                location_url: Some(url("https://meet.example.com/room?x=1")),
                error: ErrorValue::from("config fetch failed"),
            },
            &store.snapshot(),
        )
        .unwrap();
        assert_eq!(envelope.name, OutboundEventName::ConferenceTerminated);
        assert_eq!(envelope.url(), Some("https://meet.example.com/room"));
        assert_eq!(envelope.error(), Some("config fetch failed"));

        // Without a location, the url field is simply omitted.
        let envelope = plan(
            &LifecycleEvent::ConfigLoadError {
                location_url: None,
                error: ErrorValue::from("config fetch failed"),
            },
            &store.snapshot(),
        )
        .unwrap();
        assert_eq!(envelope.url(), None);
    }

    #[test]
    fn test_pip_and_clicks_pass_through() {
        let store = MemoryStore::new();
        let snapshot = store.snapshot();

        assert_eq!(
            plan(&LifecycleEvent::EnteredPictureInPicture, &snapshot)
                .unwrap()
                .name,
            OutboundEventName::EnterPictureInPicture
        );
        assert_eq!(
            plan(
                &LifecycleEvent::UiClick {
                    target: ClickTarget::LargeVideo
                },
                &snapshot
            )
            .unwrap()
            .name,
            OutboundEventName::LargeVideoClick
        );
        assert_eq!(
            plan(
                &LifecycleEvent::UiClick {
                    target: ClickTarget::ThumbnailVideo
                },
                &snapshot
            )
            .unwrap()
            .name,
            OutboundEventName::ThumbnailVideoClick
        );
        assert_eq!(
            plan(
                &LifecycleEvent::UiClick {
                    target: ClickTarget::LocalVideo
                },
                &snapshot
            )
            .unwrap()
            .name,
            OutboundEventName::LocalVideoClick
        );
    }
}
