//! Event sink seam and ready-made sink implementations.

use parking_lot::Mutex;

use crate::event::SelfDescribingEvent;

/// A consumer of tracked events.
///
/// Trackers call [`track`] for every event they synthesize and never learn
/// what happens afterwards; buffering, transport, and inspection all live
/// behind this seam.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: trackers deliver events from a
/// dispatch worker while the owning application holds its own handle.
///
/// [`track`]: EventSink::track
pub trait EventSink: Send + Sync {
    /// Accept one tracked event.
    fn track(&self, event: SelfDescribingEvent);
}

/// An in-memory sink that retains every tracked event for inspection.
///
/// This is the sink to hand a tracker in tests: post notifications, flush the
/// bus, then assert on [`events`](CollectingSink::events).
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<SelfDescribingEvent>>,
}

impl CollectingSink {
    /// Create an empty collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of every event tracked so far.
    pub fn events(&self) -> Vec<SelfDescribingEvent> {
        self.events.lock().clone()
    }

    /// Get the number of events tracked so far.
    pub fn count(&self) -> usize {
        self.events.lock().len()
    }

    /// Discard all retained events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for CollectingSink {
    fn track(&self, event: SelfDescribingEvent) {
        self.events.lock().push(event);
    }
}

/// A sink that forwards every event to the tracing subscriber.
///
/// Useful as a development default when no real pipeline is wired up.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn track(&self, event: SelfDescribingEvent) {
        tracing::debug!(schema = %event.schema, payload = %event.payload, "tracked event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_event() -> SelfDescribingEvent {
        SelfDescribingEvent::new("iglu:com.example/thing/jsonschema/1-0-0", json!({"n": 1}))
    }

    #[test]
    fn test_collecting_sink_retains_events() {
        let sink = CollectingSink::new();
        assert_eq!(sink.count(), 0);

        sink.track(sample_event());
        sink.track(sample_event());

        assert_eq!(sink.count(), 2);
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.events()[0].payload["n"], 1);
    }

    #[test]
    fn test_collecting_sink_clear() {
        let sink = CollectingSink::new();
        sink.track(sample_event());
        sink.clear();
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_tracing_sink_accepts_events() {
        // Just exercises the path; output goes to whatever subscriber is set
        TracingSink::new().track(sample_event());
    }
}
