//! Tracked session bookkeeping.

use playback_bus::{ListenerId, Player};

use crate::config::MediaTrackingConfiguration;

/// An active media tracking registration.
///
/// Binds a caller-assigned id to the observed player, the immutable session
/// configuration, and the bus listener that performs attribution. Created by
/// [`start_media_tracking`], destroyed by [`end_media_tracking`]; while it
/// exists, its listener id is registered on the notification bus and its
/// player and configuration are available through the tracker's
/// introspection accessors ([`tracked_player`], [`session_configuration`]).
///
/// [`tracked_player`]: crate::MediaTracker::tracked_player
/// [`session_configuration`]: crate::MediaTracker::session_configuration
///
/// [`start_media_tracking`]: crate::MediaTracker::start_media_tracking
/// [`end_media_tracking`]: crate::MediaTracker::end_media_tracking
#[derive(Debug)]
pub struct TrackedSession {
    /// Caller-assigned session id (duplicates `config.id` for cheap access)
    pub id: String,
    /// The observed player; shared handle, never owned
    pub player: Player,
    /// Configuration frozen at start time
    pub config: MediaTrackingConfiguration,
    /// Bus registration to tear down on end
    pub listener_id: ListenerId,
}

/// Handle returned from a successful `start_media_tracking` call.
///
/// Carries the session id for later teardown. Dropping the handle does not
/// end tracking; sessions end only via `end_media_tracking`.
#[derive(Debug, Clone)]
pub struct MediaTrackingHandle {
    id: String,
}

impl MediaTrackingHandle {
    pub(crate) fn new(id: String) -> Self {
        Self { id }
    }

    /// Get the session id this handle refers to.
    pub fn id(&self) -> &str {
        &self.id
    }
}
