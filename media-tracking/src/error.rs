//! Error types for the media-tracking crate.

use playback_bus::BusError;

/// Errors that can occur when managing media tracking sessions.
#[derive(Debug, thiserror::Error)]
pub enum MediaTrackingError {
    /// A session with this id is already being tracked
    #[error("Media tracking session already exists for id: {0}")]
    DuplicateSessionId(String),

    /// The notification bus rejected an operation
    #[error("Notification bus error: {0}")]
    Bus(#[from] BusError),
}

/// Result type for media tracking operations.
pub type Result<T> = std::result::Result<T, MediaTrackingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let error = MediaTrackingError::DuplicateSessionId("media1".to_string());
        assert!(error.to_string().contains("media1"));
        assert!(error.to_string().contains("already exists"));
    }

    #[test]
    fn test_bus_error_conversion() {
        let error: MediaTrackingError = BusError::WorkerDisconnected.into();
        assert!(matches!(error, MediaTrackingError::Bus(_)));
    }
}
