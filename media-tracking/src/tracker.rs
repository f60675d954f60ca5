//! Media tracking session registry.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use playback_bus::{NotificationBus, Player};
use tracker_events::EventSink;

use crate::attributor::PlaybackAttributor;
use crate::config::MediaTrackingConfiguration;
use crate::error::{MediaTrackingError, Result};
use crate::session::{MediaTrackingHandle, TrackedSession};

/// Registry of active media tracking sessions.
///
/// One tracker serves any number of concurrent sessions, each keyed by its
/// caller-assigned id. Starting a session registers a [`PlaybackAttributor`]
/// on the notification bus scoped to that session's player; ending it removes
/// the session and tears the registration down. Because the bus processes
/// teardown on its dispatch queue, a flushed `end_media_tracking` guarantees
/// no further events for that id.
///
/// # Example
///
/// ```rust,ignore
/// let tracker = MediaTracker::new(bus, sink);
/// let handle = tracker.start_media_tracking(
///     player,
///     MediaTrackingConfiguration::new("media1"),
/// )?;
/// // ...
/// tracker.end_media_tracking(handle.id())?;
/// ```
pub struct MediaTracker {
    /// The notification stream sessions subscribe to
    bus: Arc<dyn NotificationBus>,

    /// Where attributed events go
    sink: Arc<dyn EventSink>,

    /// Active sessions keyed by caller-assigned id
    sessions: DashMap<String, TrackedSession>,
}

impl MediaTracker {
    /// Create a tracker over the given bus and sink.
    pub fn new(bus: Arc<dyn NotificationBus>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            bus,
            sink,
            sessions: DashMap::new(),
        }
    }

    /// Start tracking playback of `player` under `configuration.id`.
    ///
    /// Registers the session and subscribes its attributor to the bus.
    /// Fails with [`MediaTrackingError::DuplicateSessionId`] if a session
    /// with this id is already active; the existing session is untouched.
    pub fn start_media_tracking(
        &self,
        player: Player,
        configuration: MediaTrackingConfiguration,
    ) -> Result<MediaTrackingHandle> {
        let id = configuration.id.clone();

        // Reserve the id before touching the bus so concurrent starts with
        // the same id cannot both subscribe.
        let Entry::Vacant(vacant) = self.sessions.entry(id.clone()) else {
            tracing::warn!(session = %id, "Rejecting duplicate media tracking id");
            return Err(MediaTrackingError::DuplicateSessionId(id));
        };

        let attributor =
            PlaybackAttributor::new(player.clone(), configuration.clone(), Arc::clone(&self.sink));
        let listener_id = self.bus.subscribe(Box::new(attributor))?;

        vacant.insert(TrackedSession {
            id: id.clone(),
            player,
            config: configuration,
            listener_id,
        });

        tracing::debug!(session = %id, %listener_id, "Started media tracking");
        Ok(MediaTrackingHandle::new(id))
    }

    /// Stop tracking the session with the given id.
    ///
    /// Idempotent: unknown ids are a no-op. On success the session's bus
    /// registration is removed; once the bus has processed the removal
    /// (observable via its `flush`), no further events are emitted for this
    /// id even if notifications referencing its former item remain in flight.
    pub fn end_media_tracking(&self, id: &str) -> Result<()> {
        let Some((_, session)) = self.sessions.remove(id) else {
            tracing::debug!(session = %id, "end_media_tracking for unknown id, ignoring");
            return Ok(());
        };

        self.bus.unsubscribe(session.listener_id)?;
        tracing::debug!(session = %id, listener_id = %session.listener_id, "Ended media tracking");
        Ok(())
    }

    /// Check whether a session with the given id is active.
    pub fn is_tracking(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    /// Get a handle to the player an active session is observing.
    pub fn tracked_player(&self, id: &str) -> Option<Player> {
        self.sessions.get(id).map(|s| s.player.clone())
    }

    /// Get an active session's configuration as frozen at start time.
    pub fn session_configuration(&self, id: &str) -> Option<MediaTrackingConfiguration> {
        self.sessions.get(id).map(|s| s.config.clone())
    }

    /// Get the number of active sessions.
    pub fn active_session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl Drop for MediaTracker {
    fn drop(&mut self) {
        let ids: Vec<String> = self.sessions.iter().map(|s| s.id.clone()).collect();
        if !ids.is_empty() {
            tracing::debug!("MediaTracker dropping with {} active session(s)", ids.len());
        }
        for id in ids {
            if let Err(e) = self.end_media_tracking(&id) {
                tracing::warn!(session = %id, "Failed to end session during drop: {}", e);
            }
        }
    }
}
