//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase", default)]`, so a partial
//! settings file only needs the keys it changes.

use beacon_schema::DecodeOptions;
use serde::{Deserialize, Serialize};

/// Root settings type.
///
/// ```json
/// {
///   "version": "0.1.0",
///   "wire": { "acceptLegacy": false },
///   "logging": { "level": "debug", "json": true }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeaconSettings {
    /// Settings schema version.
    pub version: String,
    /// Wire boundary behavior.
    pub wire: WireSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for BeaconSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            wire: WireSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// How untyped payloads are validated at the wire boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireSettings {
    /// Accept payloads in the legacy screen convention for kinds that have
    /// one. Turn off once every sender has migrated.
    pub accept_legacy: bool,
}

impl Default for WireSettings {
    fn default() -> Self {
        Self {
            accept_legacy: true,
        }
    }
}

impl WireSettings {
    /// Options for [`beacon_schema::wire::decode`].
    #[must_use]
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            accept_legacy: self.accept_legacy,
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default filter level (`trace`, `debug`, `info`, `warn`, `error`).
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Emit one JSON object per line instead of compact text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
