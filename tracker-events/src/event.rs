//! Self-describing event envelope.

use serde::{Deserialize, Serialize};

/// An event tagged with the schema its payload conforms to.
///
/// The schema is a URI-style identifier (vendor/name/format/version); the
/// payload is an arbitrary JSON document. Validation against the schema is
/// out of scope here; sinks and collectors own that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfDescribingEvent {
    /// Schema identifier for the payload
    pub schema: String,
    /// Event payload
    pub payload: serde_json::Value,
}

impl SelfDescribingEvent {
    /// Create a new event with the given schema and payload.
    pub fn new(schema: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            schema: schema.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_construction() {
        let event = SelfDescribingEvent::new(
            "iglu:com.example/thing/jsonschema/1-0-0",
            json!({"key": "value"}),
        );
        assert_eq!(event.schema, "iglu:com.example/thing/jsonschema/1-0-0");
        assert_eq!(event.payload["key"], "value");
    }

    #[test]
    fn test_event_serializes() {
        let event = SelfDescribingEvent::new("iglu:com.example/thing/jsonschema/1-0-0", json!({}));
        let text = serde_json::to_string(&event).unwrap();
        assert!(text.contains("iglu:com.example"));
    }
}
