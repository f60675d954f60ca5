//! Per-session notification attribution.

use std::sync::Arc;

use playback_bus::{NotificationListener, PlaybackNotification, Player};
use tracker_events::EventSink;

use crate::config::MediaTrackingConfiguration;
use crate::event::{build_media_event, MediaEventKind};

/// The listener registered on the bus for one tracking session.
///
/// For every incoming notification it decides whether the notification
/// belongs to this session: the originating item must be the exact item the
/// observed player has loaded at notification time. Matches are turned into
/// semantic events and forwarded to the sink; everything else is dropped
/// silently. Teardown is structural: the attributor stops receiving the
/// moment its bus registration is removed, so it carries no state of its own.
pub struct PlaybackAttributor {
    player: Player,
    config: MediaTrackingConfiguration,
    sink: Arc<dyn EventSink>,
}

impl PlaybackAttributor {
    /// Create an attributor for one session.
    pub fn new(
        player: Player,
        config: MediaTrackingConfiguration,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            player,
            config,
            sink,
        }
    }
}

impl NotificationListener for PlaybackAttributor {
    fn on_notification(&self, notification: &PlaybackNotification) {
        let Some(kind) = MediaEventKind::from_notification(&notification.kind) else {
            tracing::trace!(
                session = %self.config.id,
                kind = %notification.kind,
                "Ignoring uninterpreted notification kind"
            );
            return;
        };

        // Identity, not equality: a different item with the same URL is not
        // this session's item.
        let Some(current) = self.player.current_item() else {
            return;
        };
        if !current.same_item(&notification.item) {
            tracing::trace!(
                session = %self.config.id,
                "Notification item does not match tracked item, dropping"
            );
            return;
        }

        tracing::debug!(
            session = %self.config.id,
            kind = %notification.kind,
            "Attributed playback notification"
        );
        self.sink
            .track(build_media_event(kind, &self.config, notification));
    }
}
