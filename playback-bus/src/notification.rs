//! Playback lifecycle notification types.

use crate::item::MediaItem;

/// The kind of playback lifecycle transition a notification announces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// The item played through to its end.
    PlayedToEnd,
    /// Playback stalled waiting for data.
    PlaybackStalled,
    /// The item failed before reaching its end.
    FailedToPlayToEnd,
    /// A kind this SDK does not interpret, carried verbatim.
    Other(String),
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayedToEnd => write!(f, "played-to-end"),
            Self::PlaybackStalled => write!(f, "playback-stalled"),
            Self::FailedToPlayToEnd => write!(f, "failed-to-play-to-end"),
            Self::Other(name) => write!(f, "other:{}", name),
        }
    }
}

/// A playback lifecycle notification posted on the bus.
///
/// The originating item travels as a handle so that identity survives
/// delivery: the consumer can check whether the notification's item is the
/// exact item a tracked player currently has loaded.
#[derive(Debug, Clone)]
pub struct PlaybackNotification {
    /// Which lifecycle transition occurred.
    pub kind: NotificationKind,
    /// The item the transition occurred on.
    pub item: MediaItem,
}

impl PlaybackNotification {
    /// Create a new notification for the given kind and item.
    pub fn new(kind: NotificationKind, item: MediaItem) -> Self {
        Self { kind, item }
    }
}
