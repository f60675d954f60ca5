//! Bus and listener traits for playback notifications.

use crate::error::BusResult;
use crate::notification::PlaybackNotification;

/// Unique identifier for a bus listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Create a new ListenerId with the given value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// A consumer of playback notifications.
///
/// Listeners are invoked from the bus's dispatch worker, one notification at
/// a time, in posting order. Implementations must not block for long, since they
/// share the dispatch loop with every other listener.
pub trait NotificationListener: Send {
    /// Handle one notification.
    fn on_notification(&self, notification: &PlaybackNotification);
}

/// The process-wide playback notification stream.
///
/// This is the seam between the playback runtime and its consumers: the
/// runtime posts lifecycle notifications, consumers register listeners.
/// Implementations must guarantee that [`unsubscribe`] is atomic with respect
/// to delivery: after an unsubscribe has been processed, the listener
/// receives nothing, even for notifications still in flight when the caller
/// asked to unsubscribe.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single bus can be shared
/// between the playback runtime and any number of consumers.
///
/// [`unsubscribe`]: NotificationBus::unsubscribe
pub trait NotificationBus: Send + Sync {
    /// Register a listener for all subsequent notifications.
    ///
    /// Returns the id to pass to [`unsubscribe`](NotificationBus::unsubscribe)
    /// for teardown.
    fn subscribe(&self, listener: Box<dyn NotificationListener>) -> BusResult<ListenerId>;

    /// Remove a listener.
    ///
    /// Unknown ids are a no-op, not an error; unsubscribing twice is safe.
    /// Once this request has been processed by the dispatch loop, the
    /// listener is never invoked again.
    fn unsubscribe(&self, id: ListenerId) -> BusResult<()>;

    /// Post a notification to every registered listener.
    ///
    /// Delivery is asynchronous; use [`flush`](NotificationBus::flush) to
    /// wait for it. Posting with no listeners registered is not an error.
    fn post(&self, notification: PlaybackNotification) -> BusResult<()>;

    /// Block until every previously issued command has been processed.
    ///
    /// When this returns, all earlier posts have been delivered and all
    /// earlier unsubscribes have taken effect. This is the deterministic
    /// replacement for sleeping a settling delay after a post.
    fn flush(&self) -> BusResult<()>;
}
