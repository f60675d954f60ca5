//! Media item handles with identity semantics.

use std::sync::Arc;

use url::Url;

#[derive(Debug)]
struct ItemInner {
    url: Url,
}

/// A handle to a single loadable media resource.
///
/// Cloning a `MediaItem` clones the handle, not the item: every clone refers
/// to the same underlying resource and compares equal under [`same_item`].
/// Two items constructed separately are always distinct, even when their URLs
/// are identical; a player queue can legitimately contain the same URL twice.
///
/// There is deliberately no `PartialEq` implementation. Attribution decisions
/// must go through [`same_item`] so value comparison cannot be reached by
/// accident.
///
/// [`same_item`]: MediaItem::same_item
#[derive(Debug, Clone)]
pub struct MediaItem {
    inner: Arc<ItemInner>,
}

impl MediaItem {
    /// Create a new media item for the given resource URL.
    pub fn new(url: Url) -> Self {
        Self {
            inner: Arc::new(ItemInner { url }),
        }
    }

    /// Create a new media item, parsing the URL from a string.
    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// Get the resource URL of this item.
    pub fn url(&self) -> &Url {
        &self.inner.url
    }

    /// Check whether two handles refer to the same item.
    ///
    /// This is identity, not equality: items created separately never match,
    /// regardless of URL.
    pub fn same_item(&self, other: &MediaItem) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Display for MediaItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.url)
    }
}
