//! Error types for the schema registry.
//!
//! Factories are total and never fail, so every variant here originates at
//! a run-time boundary: parsing a vocabulary member from a string, or
//! decoding an event payload of unknown origin in [`crate::wire`].

use thiserror::Error;

use crate::registry::ActionType;

/// Errors raised when untyped input meets the registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The `action` tag does not name a registered event kind.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// A string is not a member of a closed vocabulary.
    #[error("unknown {vocabulary} member: {value}")]
    UnknownMember {
        /// Name of the vocabulary that was consulted.
        vocabulary: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The payload is not a JSON object.
    #[error("event payload must be a JSON object")]
    NotAnObject,

    /// The payload has no string `action` field.
    #[error("event payload has no string `action` field")]
    MissingAction,

    /// The payload names a known action but its fields do not match the schema.
    #[error("payload does not match the {action} schema: {source}")]
    ShapeMismatch {
        /// Action the payload was tagged with.
        action: ActionType,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convenience type alias for registry results.
pub type Result<T> = std::result::Result<T, SchemaError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
