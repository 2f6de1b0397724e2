//! # Probe Telemetry
//!
//! Structured logging for the denormal probe.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use probe_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::from_env())?;
//!     // Logs emitted here go to stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PROBE_LOG` | `warn` | Log level filter (falls back to `RUST_LOG`) |
//! | `PROBE_JSON_LOGS` | `false` | Emit JSON instead of plain text |
//! | `PROBE_CONSOLE_OUTPUT` | `true` | Disable to silence logs entirely |
//! | `NO_COLOR` | unset | Disable ANSI colors |

mod config;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_LOG_LEVEL};
pub use tracing_setup::TracingGuard;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter directive {directive:?}: {reason}")]
    Filter { directive: String, reason: String },
}

/// Initialize structured logging.
///
/// Returns a guard that must be held for as long as logs should be emitted.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let tracing_guard = tracing_setup::init_tracing(&config)?;

    Ok(TelemetryGuard {
        _tracing: tracing_guard,
    })
}

/// Guard that keeps telemetry active. Drop to restore the previous subscriber.
pub struct TelemetryGuard {
    _tracing: TracingGuard,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!("Shutting down telemetry");
    }
}

/// Create a span for one probe stage.
///
/// # Example
///
/// ```rust,ignore
/// use probe_telemetry::stage_span;
///
/// let _span = stage_span!("sweep", precision = "Float").entered();
/// ```
#[macro_export]
macro_rules! stage_span {
    ($name:expr) => {
        tracing::info_span!("stage", stage = $name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!("stage", stage = $name, $($field)*)
    };
}
