//! Tracing subscriber setup.
//!
//! Logs are written to stderr so they never interleave with the probe report
//! on stdout. The subscriber is installed as the default for the current
//! thread; the probe is single-threaded, and tests can install their own
//! subscriber without fighting over the global one.

use std::io;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Guard that restores the previous subscriber on drop.
pub struct TracingGuard {
    // Field order matters: the root span must close before the subscriber goes.
    _root_span: tracing::span::EnteredSpan,
    _default: DefaultGuard,
}

/// Build the env filter for a configured level.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter {
        directive: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the fmt subscriber described by `config`.
pub fn init_tracing(config: &TelemetryConfig) -> Result<TracingGuard, TelemetryError> {
    let env_filter = build_filter(config)?;

    // JSON output for log shippers, plain text for terminals
    let json_layer = (config.console_output && config.json_logs).then(|| {
        fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    let plain_layer = (config.console_output && !config.json_logs).then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(config.ansi)
    });

    let default = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(plain_layer)
        .set_default();

    let root_span = tracing::info_span!("probe", service = %config.service_name).entered();

    tracing::debug!(
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Tracing initialized"
    );

    Ok(TracingGuard {
        _root_span: root_span,
        _default: default,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filter_directives() {
        for level in ["warn", "debug", "denormal_probe=trace,info"] {
            let config = TelemetryConfig::default().with_log_level(level);
            assert!(build_filter(&config).is_ok(), "directive {level} rejected");
        }
    }

    #[test]
    fn test_invalid_filter_directive() {
        let config = TelemetryConfig::default().with_log_level("denormal_probe=[");
        let err = build_filter(&config).unwrap_err();
        assert!(matches!(err, TelemetryError::Filter { .. }));
    }

    #[test]
    fn test_guard_enables_configured_level() {
        let config = TelemetryConfig::default().with_log_level("debug");
        let _guard = init_tracing(&config).unwrap();
        assert!(tracing::enabled!(tracing::Level::DEBUG));
        assert!(!tracing::enabled!(tracing::Level::TRACE));
    }
}
