//! Notification sinks
//!
//! A registry may be wired to an [`EventSink`] at construction. The sink is
//! invoked synchronously, once per successful registration, after the state
//! mutation has committed. Sink behavior cannot undo a registration: the
//! registry's own map and history remain the source of truth, and a sink
//! panicking or dropping notifications only degrades observability.
//!
//! [`MemoryEventLog`] is the provided sink: an ordered in-memory record of
//! every notification, readable back without touching the registry.

use parking_lot::RwLock;
use registry_core::VersionAdded;

/// Receiver of registration notifications
///
/// Implementations must tolerate concurrent delivery. Notifications arrive
/// after the corresponding binding is visible to readers, so a sink may call
/// back into the registry.
pub trait EventSink: Send + Sync {
    /// Called once per successful registration
    fn version_added(&self, event: &VersionAdded);
}

/// In-memory sink recording every notification in delivery order
#[derive(Default)]
pub struct MemoryEventLog {
    events: RwLock<Vec<VersionAdded>>,
}

impl MemoryEventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded notifications, in delivery order
    pub fn events(&self) -> Vec<VersionAdded> {
        self.events.read().clone()
    }

    /// Number of recorded notifications
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether no notification has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl EventSink for MemoryEventLog {
    fn version_added(&self, event: &VersionAdded) {
        self.events.write().push(event.clone());
    }
}
