//! Error types for the playback-bus crate.

/// Errors that can occur when talking to the notification bus.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    /// The dispatch worker has shut down and can no longer accept commands
    #[error("Notification dispatch worker has disconnected")]
    WorkerDisconnected,

    /// The worker dropped a flush acknowledgement before replying
    #[error("Flush failed: dispatch worker dropped the acknowledgement")]
    FlushFailed,
}

/// Convenience type alias for Results using BusError.
pub type BusResult<T> = std::result::Result<T, BusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = BusError::WorkerDisconnected;
        assert_eq!(
            error.to_string(),
            "Notification dispatch worker has disconnected"
        );

        let error = BusError::FlushFailed;
        assert!(error.to_string().contains("Flush failed"));
    }
}
