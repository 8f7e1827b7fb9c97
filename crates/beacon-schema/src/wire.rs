//! Runtime guard for records arriving from outside the type system.
//!
//! Factories only build well-formed events, but payloads replayed from logs
//! or forwarded by older clients are plain JSON. [`decode`] validates such a
//! payload against the schema registered for its `action` tag and, for the
//! kinds in [`LEGACY_ACTION_TYPES`](crate::LEGACY_ACTION_TYPES), falls back
//! to the legacy screen-convention shape when allowed.

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{Result, SchemaError};
use crate::legacy::LegacyEvent;
use crate::registry::{ActionType, Event};

/// Controls how strictly [`decode`] treats incoming payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Accept the legacy screen-convention shape for kinds that have one.
    pub accept_legacy: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            accept_legacy: true,
        }
    }
}

impl DecodeOptions {
    /// Only current-convention shapes are accepted.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            accept_legacy: false,
        }
    }
}

/// A validated record.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodedEvent {
    /// Payload matched the current schema for its tag.
    Current(Event),
    /// Payload matched the legacy shape for its tag.
    Legacy(LegacyEvent),
}

impl DecodedEvent {
    /// Action tag of the decoded record.
    #[must_use]
    pub fn action(&self) -> ActionType {
        match self {
            Self::Current(event) => event.action(),
            Self::Legacy(event) => event.action(),
        }
    }

    /// Whether the record arrived in the legacy shape.
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    /// Re-encode the record in whichever shape it was decoded from.
    pub fn to_wire(&self) -> Result<Value> {
        match self {
            Self::Current(event) => event.to_wire(),
            Self::Legacy(event) => event.to_wire(),
        }
    }
}

/// Encode a current-convention event as its downstream record.
pub fn encode(event: impl Into<Event>) -> Result<Value> {
    event.into().to_wire()
}

/// Encode a legacy event as its downstream record.
pub fn encode_legacy(event: impl Into<LegacyEvent>) -> Result<Value> {
    event.into().to_wire()
}

/// Read the `action` tag of a payload without validating the rest.
pub fn action_of(value: &Value) -> Result<ActionType> {
    let object = value.as_object().ok_or(SchemaError::NotAnObject)?;
    let tag = object
        .get("action")
        .and_then(Value::as_str)
        .ok_or(SchemaError::MissingAction)?;
    tag.parse()
}

/// Validate a payload against the schema registered for its tag.
///
/// The current shape is always tried first. The legacy shape is only tried
/// when `options.accept_legacy` is set and the tag has one; accepting it is
/// logged at `warn` so unmigrated senders stay visible.
pub fn decode(value: Value, options: &DecodeOptions) -> Result<DecodedEvent> {
    let action = action_of(&value)?;
    let fallback = options.accept_legacy && action.has_legacy_shape();

    let current_err = if fallback {
        match serde_json::from_value::<Event>(value.clone()) {
            Ok(event) => return Ok(accepted(DecodedEvent::Current(event))),
            Err(err) => err,
        }
    } else {
        match serde_json::from_value::<Event>(value) {
            Ok(event) => return Ok(accepted(DecodedEvent::Current(event))),
            Err(source) => return Err(SchemaError::ShapeMismatch { action, source }),
        }
    };

    match serde_json::from_value::<LegacyEvent>(value) {
        Ok(event) => {
            warn!(
                action = %action,
                table = action.table_name(),
                "accepted legacy screen-convention payload"
            );
            Ok(DecodedEvent::Legacy(event))
        }
        Err(_) => Err(SchemaError::ShapeMismatch {
            action,
            source: current_err,
        }),
    }
}

/// [`decode`] for a raw JSON string.
pub fn decode_str(input: &str, options: &DecodeOptions) -> Result<DecodedEvent> {
    let value: Value = serde_json::from_str(input)?;
    decode(value, options)
}

fn accepted(decoded: DecodedEvent) -> DecodedEvent {
    debug!(action = %decoded.action(), "decoded event");
    decoded
}
