//! Semantic media events and their schemas.

use playback_bus::{NotificationKind, PlaybackNotification};
use serde_json::json;
use tracker_events::SelfDescribingEvent;

use crate::config::MediaTrackingConfiguration;

/// Schema for the media end event.
pub const SCHEMA_MEDIA_END: &str = "iglu:com.mediatrack.media/end_event/jsonschema/1-0-0";

/// Schema for the media buffer start event.
pub const SCHEMA_MEDIA_BUFFER_START: &str =
    "iglu:com.mediatrack.media/buffer_start_event/jsonschema/1-0-0";

/// Schema for the media error event.
pub const SCHEMA_MEDIA_ERROR: &str = "iglu:com.mediatrack.media/error_event/jsonschema/1-0-0";

/// The semantic media events this tracker can synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEventKind {
    /// Playback reached the end of the item
    End,
    /// Playback paused to buffer
    BufferStart,
    /// Playback failed before the end of the item
    Error,
}

impl MediaEventKind {
    /// Map a raw notification kind to a semantic event kind.
    ///
    /// Returns `None` for kinds this tracker does not interpret; those
    /// notifications are dropped without error.
    pub fn from_notification(kind: &NotificationKind) -> Option<Self> {
        match kind {
            NotificationKind::PlayedToEnd => Some(Self::End),
            NotificationKind::PlaybackStalled => Some(Self::BufferStart),
            NotificationKind::FailedToPlayToEnd => Some(Self::Error),
            NotificationKind::Other(_) => None,
        }
    }

    /// Get the schema identifier for this event kind.
    pub fn schema(&self) -> &'static str {
        match self {
            Self::End => SCHEMA_MEDIA_END,
            Self::BufferStart => SCHEMA_MEDIA_BUFFER_START,
            Self::Error => SCHEMA_MEDIA_ERROR,
        }
    }
}

/// Build the self-describing event for an attributed notification.
pub(crate) fn build_media_event(
    kind: MediaEventKind,
    config: &MediaTrackingConfiguration,
    notification: &PlaybackNotification,
) -> SelfDescribingEvent {
    SelfDescribingEvent::new(
        kind.schema(),
        json!({
            "mediaSessionId": config.id,
            "label": config.label,
            "mediaUrl": notification.item.url().as_str(),
        }),
    )
}
