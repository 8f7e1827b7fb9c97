//! # beacon-settings
//!
//! Layered configuration for the beacon registry.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`BeaconSettings::default()`]
//! 2. **User file**: `~/.beacon/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `BEACON_*` overrides (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use beacon_settings::get_settings;
//!
//! let options = get_settings().wire.decode_options();
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, apply_overrides_with, deep_merge, load_settings, load_settings_from_path,
    settings_path,
};
pub use types::*;

use std::sync::OnceLock;

/// Global settings singleton.
static SETTINGS: OnceLock<BeaconSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.beacon/settings.json` with env var
/// overrides. On subsequent calls, returns the cached value. If loading
/// fails, the error is logged and compiled defaults are used.
pub fn get_settings() -> &'static BeaconSettings {
    SETTINGS.get_or_init(|| {
        load_settings().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            BeaconSettings::default()
        })
    })
}

/// Initialize the global settings with a specific value.
///
/// Returns the provided settings back if the global was already initialized.
pub fn init_settings(settings: BeaconSettings) -> std::result::Result<(), BeaconSettings> {
    SETTINGS.set(settings)
}
