//! # media-tracking
//!
//! Media playback event tracking for the mediatrack SDK.
//!
//! A caller registers a player for tracking under an id of their choosing;
//! from then on, playback lifecycle notifications whose originating item is
//! the exact item loaded into that player are turned into semantic tracking
//! events and forwarded to the configured event sink. Notifications from any
//! other item are dropped silently.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use media_tracking::{MediaTracker, MediaTrackingConfiguration};
//! use playback_bus::{MediaItem, NotificationCenter, Player};
//! use tracker_events::TracingSink;
//!
//! let bus = Arc::new(NotificationCenter::new());
//! let tracker = MediaTracker::new(bus, Arc::new(TracingSink::new()));
//!
//! let item = MediaItem::parse("https://example.com/movie.mp4")?;
//! let player = Player::with_item(item);
//! tracker.start_media_tracking(player, MediaTrackingConfiguration::new("media1"))?;
//! // ... playback runtime posts notifications on the bus ...
//! tracker.end_media_tracking("media1")?;
//! ```

mod attributor;
mod config;
mod error;
mod event;
pub mod logging;
mod session;
mod tracker;

pub use attributor::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use session::*;
pub use tracker::*;
