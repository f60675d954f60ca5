//! Shared player handles exposing the currently loaded item.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::item::MediaItem;

/// A shared handle to a media player.
///
/// The player owns its playback state elsewhere; this handle only exposes what
/// consumers such as the media tracker need: the currently loaded item.
/// Cloning yields another handle to the same player, so observers never
/// control or extend the player's lifetime beyond their own handle.
#[derive(Debug, Clone, Default)]
pub struct Player {
    current: Arc<RwLock<Option<MediaItem>>>,
}

impl Player {
    /// Create a player with no item loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player with an item already loaded.
    pub fn with_item(item: MediaItem) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(item))),
        }
    }

    /// Get a handle to the currently loaded item, if any.
    pub fn current_item(&self) -> Option<MediaItem> {
        self.current.read().clone()
    }

    /// Load a new item, replacing whatever was loaded before.
    pub fn load_item(&self, item: MediaItem) {
        *self.current.write() = Some(item);
    }

    /// Unload the current item.
    pub fn clear_item(&self) {
        *self.current.write() = None;
    }
}
