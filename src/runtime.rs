//! Lifecycle event pump
//!
//! Drives the adapter from a single logical event queue. Events are
//! processed one at a time, in delivery order; there is no reordering,
//! batching or retrying.

use crate::adapter::NotificationAdapter;
use crate::events::LifecycleEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawn a task that feeds queued lifecycle events to the adapter.
///
/// Returns when the sending side of the queue is dropped. The adapter is
/// owned by the task, so handler invocations never overlap.
pub fn spawn_event_pump(
    mut adapter: NotificationAdapter,
    mut events: mpsc::UnboundedReceiver<LifecycleEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            adapter.handle_event(&event);
        }
        tracing::debug!("lifecycle event queue closed, stopping pump");
    })
}
