//! End-to-end attribution tests: a tracker, a live notification bus, and a
//! collecting sink. The bus's `flush()` barrier stands in for the settling
//! delay a real playback runtime would need.

use std::sync::Arc;

use media_tracking::{MediaTracker, MediaTrackingConfiguration};
use playback_bus::{
    MediaItem, NotificationBus, NotificationCenter, NotificationKind, Player,
    PlaybackNotification,
};
use tracker_events::CollectingSink;

struct Fixture {
    bus: Arc<NotificationCenter>,
    sink: Arc<CollectingSink>,
    tracker: MediaTracker,
}

impl Fixture {
    fn new() -> Self {
        let bus = Arc::new(NotificationCenter::new());
        let sink = Arc::new(CollectingSink::new());
        let tracker = MediaTracker::new(bus.clone(), sink.clone());
        Self { bus, sink, tracker }
    }

    fn post_and_settle(&self, kind: NotificationKind, item: &MediaItem) {
        self.bus
            .post(PlaybackNotification::new(kind, item.clone()))
            .unwrap();
        self.bus.flush().unwrap();
    }
}

fn tracked_item() -> MediaItem {
    MediaItem::parse("https://example.com/tracked.mp4").unwrap()
}

fn unrelated_item() -> MediaItem {
    MediaItem::parse("https://example.com/unrelated.mp4").unwrap()
}

#[test]
fn does_not_track_notifications_from_unrelated_item() {
    let f = Fixture::new();
    let item = tracked_item();
    f.tracker
        .start_media_tracking(
            Player::with_item(item),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::PlayedToEnd, &unrelated_item());

    assert_eq!(
        f.sink.count(),
        0,
        "Should not track events from an unrelated item"
    );

    f.tracker.end_media_tracking("media1").unwrap();
}

#[test]
fn tracks_notification_from_tracked_item() {
    let f = Fixture::new();
    let item = tracked_item();
    f.tracker
        .start_media_tracking(
            Player::with_item(item.clone()),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::PlayedToEnd, &item);

    let events = f.sink.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].schema.contains("end"));

    f.tracker.end_media_tracking("media1").unwrap();
}

#[test]
fn does_not_track_buffer_start_from_unrelated_item() {
    let f = Fixture::new();
    let item = tracked_item();
    f.tracker
        .start_media_tracking(
            Player::with_item(item),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::PlaybackStalled, &unrelated_item());

    assert_eq!(
        f.sink.count(),
        0,
        "Should not track buffer start from an unrelated item"
    );

    f.tracker.end_media_tracking("media1").unwrap();
}

#[test]
fn tracks_buffer_start_from_tracked_item() {
    let f = Fixture::new();
    let item = tracked_item();
    f.tracker
        .start_media_tracking(
            Player::with_item(item.clone()),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::PlaybackStalled, &item);

    let events = f.sink.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].schema.contains("buffer_start"));
}

#[test]
fn tracks_playback_failure_from_tracked_item() {
    let f = Fixture::new();
    let item = tracked_item();
    f.tracker
        .start_media_tracking(
            Player::with_item(item.clone()),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::FailedToPlayToEnd, &item);

    let events = f.sink.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].schema.contains("error"));
}

#[test]
fn identical_url_does_not_confuse_attribution() {
    let f = Fixture::new();
    let item = tracked_item();
    // Same URL, different item
    let lookalike = MediaItem::parse(item.url().as_str()).unwrap();
    f.tracker
        .start_media_tracking(
            Player::with_item(item),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::PlayedToEnd, &lookalike);

    assert_eq!(f.sink.count(), 0);
}

#[test]
fn no_events_after_end_media_tracking() {
    let f = Fixture::new();
    let item = tracked_item();
    f.tracker
        .start_media_tracking(
            Player::with_item(item.clone()),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();

    f.tracker.end_media_tracking("media1").unwrap();
    f.post_and_settle(NotificationKind::PlayedToEnd, &item);
    f.post_and_settle(NotificationKind::PlaybackStalled, &item);

    assert_eq!(
        f.sink.count(),
        0,
        "Ended session must not emit for its former item"
    );
}

#[test]
fn unknown_notification_kind_is_ignored() {
    let f = Fixture::new();
    let item = tracked_item();
    f.tracker
        .start_media_tracking(
            Player::with_item(item.clone()),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::Other("time-jumped".to_string()), &item);

    assert_eq!(f.sink.count(), 0);
}

#[test]
fn notification_matches_at_most_one_session() {
    let f = Fixture::new();
    let first_item = tracked_item();
    let second_item = MediaItem::parse("https://example.com/other.mp4").unwrap();

    f.tracker
        .start_media_tracking(
            Player::with_item(first_item.clone()),
            MediaTrackingConfiguration::new("media1"),
        )
        .unwrap();
    f.tracker
        .start_media_tracking(
            Player::with_item(second_item),
            MediaTrackingConfiguration::new("media2"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::PlayedToEnd, &first_item);

    let events = f.sink.events();
    assert_eq!(events.len(), 1, "Only the owning session may emit");
    assert_eq!(events[0].payload["mediaSessionId"], "media1");
}

#[test]
fn event_payload_carries_session_details() {
    let f = Fixture::new();
    let item = tracked_item();
    f.tracker
        .start_media_tracking(
            Player::with_item(item.clone()),
            MediaTrackingConfiguration::new("media1").with_label("Trailer"),
        )
        .unwrap();

    f.post_and_settle(NotificationKind::PlayedToEnd, &item);

    let events = f.sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload["mediaSessionId"], "media1");
    assert_eq!(events[0].payload["label"], "Trailer");
    assert_eq!(events[0].payload["mediaUrl"], item.url().as_str());
}

#[test]
fn session_follows_player_item_changes() {
    let f = Fixture::new();
    let first = tracked_item();
    let second = MediaItem::parse("https://example.com/next.mp4").unwrap();
    let player = Player::with_item(first.clone());
    f.tracker
        .start_media_tracking(player.clone(), MediaTrackingConfiguration::new("media1"))
        .unwrap();

    // Player advances to a new item; notifications for the old one no
    // longer belong to this session, notifications for the new one do.
    player.load_item(second.clone());
    f.post_and_settle(NotificationKind::PlayedToEnd, &first);
    assert_eq!(f.sink.count(), 0);

    f.post_and_settle(NotificationKind::PlayedToEnd, &second);
    assert_eq!(f.sink.count(), 1);
}
