//! Structured logging and timing for iconkit
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout to the
//! human-readable progress lines printed by the CLI. The filter defaults to
//! `warn` and can be overridden with `RUST_LOG`.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with the default configuration
pub fn init() -> anyhow::Result<()> {
    init_with_config(TelemetryConfig::default())
}

/// Initialize logging with a custom configuration
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.show_target)
            .with_file(config.show_file)
            .with_line_number(config.show_line_number)
            .compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Telemetry initialized");

    Ok(())
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub show_target: bool,
    pub show_file: bool,
    pub show_line_number: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            show_target: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

/// Timer for measuring a pipeline phase
pub struct Timer {
    name: &'static str,
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Time elapsed so far
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and log the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        tracing::info!(
            phase = self.name,
            duration_ms = duration.as_millis() as u64,
            "Phase completed"
        );
        duration
    }
}

/// Run `f` inside an info span named after the phase, logging its duration
pub fn timed<T>(name: &'static str, f: impl FnOnce() -> T) -> T {
    let _span = tracing::info_span!("phase", name).entered();
    let timer = Timer::start(name);
    let result = f();
    timer.stop();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_quiet() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "warn");
        assert!(!config.show_target);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::start("test_operation");
        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.stop();
        assert!(duration.as_millis() >= 10);
    }

    #[test]
    fn test_timed_returns_value() {
        assert_eq!(timed("answer", || 6 * 7), 42);
    }

    #[test]
    fn test_config_round_trip_fields() {
        let config = TelemetryConfig {
            log_level: "debug".to_string(),
            show_file: true,
            ..TelemetryConfig::default()
        };
        assert_eq!(config.log_level, "debug");
        assert!(config.show_file);
        assert!(!config.show_line_number);
    }
}
