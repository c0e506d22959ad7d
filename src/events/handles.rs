//! Conference and connection handles
//!
//! Live handles shared between the application's feature states and the
//! lifecycle event stream. They stay internal: only derived primitive fields
//! (normalized URLs, stringified errors) ever cross the host boundary.

use parking_lot::RwLock;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

/// Identity of a signaling connection, used to associate conferences with
/// the connection they were created on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal conference handle.
///
/// The call id is recorded by the telephony integration when the conference
/// becomes a system-visible call, and cleared when the call ends.
#[derive(Debug)]
pub struct Conference {
    url: Url,
    call_id: RwLock<Option<Uuid>>,
    connection_id: Option<ConnectionId>,
}

impl Conference {
    /// Create a conference handle not associated with any connection.
    pub fn new(url: Url) -> Arc<Self> {
        Arc::new(Self {
            url,
            call_id: RwLock::new(None),
            connection_id: None,
        })
    }

    /// Create a conference handle on an established connection and attach
    /// it to that connection.
    pub fn on_connection(url: Url, connection: &Arc<Connection>) -> Arc<Self> {
        let conference = Arc::new(Self {
            url,
            call_id: RwLock::new(None),
            connection_id: Some(connection.id()),
        });
        connection.attach_conference(&conference);
        conference
    }

    /// Location URL of this conference
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Call id recorded by the telephony integration, if any
    pub fn call_id(&self) -> Option<Uuid> {
        *self.call_id.read()
    }

    /// Record or clear the call id
    pub fn set_call_id(&self, call_id: Option<Uuid>) {
        *self.call_id.write() = call_id;
    }

    /// Connection this conference was created on, if any
    pub fn connection_id(&self) -> Option<ConnectionId> {
        self.connection_id
    }
}

/// Internal signaling connection handle.
///
/// A connection may outlive the state that created it, so it carries its own
/// location URL rather than relying on whatever URL is currently active.
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    url: Url,
    conference: RwLock<Option<Arc<Conference>>>,
}

impl Connection {
    pub fn new(url: Url) -> Arc<Self> {
        Arc::new(Self {
            id: ConnectionId::new(),
            url,
            conference: RwLock::new(None),
        })
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Location URL this connection was established for
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Conference created on this connection, if one ever was
    pub fn conference(&self) -> Option<Arc<Conference>> {
        self.conference.read().clone()
    }

    pub(crate) fn attach_conference(&self, conference: &Arc<Conference>) {
        *self.conference.write() = Some(conference.clone());
    }
}
