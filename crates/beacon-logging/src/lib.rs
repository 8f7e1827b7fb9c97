//! # beacon-logging
//!
//! `tracing` subscriber setup for hosts embedding the registry, plus an
//! in-memory capture layer for asserting on log output in tests.
//!
//! The registry itself only emits events (`debug` on every decoded payload,
//! `warn` when a legacy shape is accepted); installing a subscriber is the
//! host's call.

#![deny(unsafe_code)]

pub mod test_utils;

pub use test_utils::{CapturedEvent, CapturedLogs, capture_logs};

use beacon_settings::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with compact stderr output.
///
/// Call once at application startup. Subsequent calls are no-ops.
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init is a no-op if a global subscriber is already set
    let _ = subscriber.try_init();
}

/// Initialize the global tracing subscriber with one JSON object per line on
/// stderr, for hosts shipping their logs to a collector.
pub fn init_json_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json();

    let _ = subscriber.try_init();
}

/// Initialize the global subscriber from [`LoggingSettings`].
pub fn init_from_settings(settings: &LoggingSettings) {
    if settings.json {
        init_json_subscriber(&settings.level);
    } else {
        init_subscriber(&settings.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_subscriber_does_not_panic() {
        // Repeated calls are no-ops after the first
        init_subscriber("warn");
        init_subscriber("debug");
        init_json_subscriber("info");
    }

    #[test]
    fn init_from_default_settings_does_not_panic() {
        init_from_settings(&LoggingSettings::default());
    }
}
