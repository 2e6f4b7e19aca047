//! Correlation types for tracking a single analysis run
//!
//! A run is identified by a [`RequestId`]. The CLI records it on the tracing
//! span that wraps the pipeline and on the exported deployment plan, so log
//! lines and exported artifacts can be matched up afterwards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single analysis run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new time-ordered RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization or fixed ids in tests)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through a run for correlation
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    /// Where the input came from (file path, `sample`, ...)
    pub source: Option<String>,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            source: None,
        }
    }

    /// Create a context with an existing RequestId
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            source: None,
        }
    }

    /// Record the input source on the context
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::from_string("run-1".to_string());
        assert_eq!(format!("{}", id), "run-1");
    }

    #[test]
    fn test_request_context_with_source() {
        let ctx = RequestContext::new().with_source("input.json");
        assert!(!ctx.request_id.as_str().is_empty());
        assert_eq!(ctx.source.as_deref(), Some("input.json"));
    }

    #[test]
    fn test_request_id_serializes_as_plain_string() {
        let id = RequestId::from_string("abc".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
