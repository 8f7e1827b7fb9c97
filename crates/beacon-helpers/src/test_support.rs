//! Shared helpers for factory tests.

use beacon_schema::{Event, LegacyEvent};
use serde_json::Value;

/// Downstream record for a current-convention event.
pub(crate) fn wire(event: impl Into<Event>) -> Value {
    event.into().to_wire().unwrap()
}

/// Downstream record for a legacy event.
pub(crate) fn legacy_wire(event: impl Into<LegacyEvent>) -> Value {
    event.into().to_wire().unwrap()
}

/// Sorted key set of a wire object.
pub(crate) fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}
