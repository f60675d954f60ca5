//! Per-session tracking configuration.

/// Configuration for one media tracking session.
///
/// Immutable once tracking starts; the id must be unique among active
/// sessions and is the key for [`end_media_tracking`].
///
/// [`end_media_tracking`]: crate::MediaTracker::end_media_tracking
#[derive(Debug, Clone)]
pub struct MediaTrackingConfiguration {
    /// Caller-assigned session id
    pub id: String,
    /// Optional human-readable label included in event payloads
    pub label: Option<String>,
}

impl MediaTrackingConfiguration {
    /// Create a configuration with the given session id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Attach a label that will be included in every event payload.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_builder() {
        let config = MediaTrackingConfiguration::new("media1").with_label("Trailer");
        assert_eq!(config.id, "media1");
        assert_eq!(config.label.as_deref(), Some("Trailer"));
    }

    #[test]
    fn test_configuration_without_label() {
        let config = MediaTrackingConfiguration::new("media1");
        assert!(config.label.is_none());
    }
}
