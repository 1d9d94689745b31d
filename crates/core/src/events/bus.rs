//! In-process event bus.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use log::{debug, error};

use super::{EventKind, MonitorEvent};

/// Trait for receiving monitor events.
///
/// # Design Rules
///
/// - `on_event()` must be fast and non-blocking (no network calls, no I/O)
/// - Implementations queue work for anything slow
/// - A failing listener must not affect the publisher or other listeners;
///   the bus isolates each invocation
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &MonitorEvent);
}

/// Synchronous publish/subscribe bus.
///
/// Delivery to subscribers of the same event kind follows subscription
/// order. Publishing is fire-and-forget from the publisher's perspective:
/// a panicking listener is caught and logged, and delivery continues with
/// the remaining listeners.
#[derive(Default)]
pub struct EventBus {
    subscribers: RwLock<HashMap<EventKind, Vec<Arc<dyn EventListener>>>>,
    closed: AtomicBool,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for one event kind. Listeners are invoked in
    /// the order they subscribed.
    pub fn subscribe(&self, kind: EventKind, listener: Arc<dyn EventListener>) {
        self.subscribers
            .write()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(listener);
    }

    /// Delivers `event` synchronously to every subscriber of its kind.
    pub fn publish(&self, event: &MonitorEvent) {
        if self.closed.load(Ordering::Acquire) {
            debug!("Event bus is closed; dropping {:?} event", event.kind());
            return;
        }

        // Snapshot the listener list so callbacks run outside the lock.
        let listeners: Vec<Arc<dyn EventListener>> = self
            .subscribers
            .read()
            .unwrap()
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();

        for listener in listeners {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener.on_event(event)));
            if outcome.is_err() {
                error!(
                    "Event listener panicked while handling {:?}; continuing with remaining listeners",
                    event.kind()
                );
            }
        }
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers
            .read()
            .unwrap()
            .get(&kind)
            .map_or(0, |listeners| listeners.len())
    }

    /// Drops all subscribers and rejects further publishes. Part of the
    /// explicit shutdown lifecycle; publishing after close is a logged no-op.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.subscribers.write().unwrap().clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// No-op listener for contexts that don't care about an event kind.
#[derive(Clone, Default)]
pub struct NoOpListener;

impl EventListener for NoOpListener {
    fn on_event(&self, _event: &MonitorEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Test listener that records every event it receives.
#[derive(Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<MonitorEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded events.
    pub fn events(&self) -> Vec<MonitorEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventListener for RecordingListener {
    fn on_event(&self, event: &MonitorEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
