//! Denormal Probe: times f32/f64 multiplication chains in the normal,
//! quick-underflow and sustained-denormal regimes and prints the penalty.
//!
//! ## Usage
//!
//! ```bash
//! # Meaningful numbers need an optimized build
//! cargo run --release -p denormal-probe
//!
//! # Diagnostic logs on stderr
//! PROBE_LOG=debug cargo run --release -p denormal-probe
//! ```

use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use denormal_probe::{DenormalProbe, ProbeConfig, ReportWriter};
use probe_telemetry::{init_telemetry, TelemetryConfig};

fn main() -> Result<()> {
    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize logging")?;

    let probe = DenormalProbe::new(ProbeConfig::default()).context("Invalid probe configuration")?;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(BufWriter::new(stdout.lock()));

    let report = probe.run(&mut writer).context("Probe run failed")?;
    writer.finish().context("Failed to flush report")?;

    tracing::info!(
        single_penalty = ?report.single.denormal_penalty(),
        double_penalty = ?report.double.denormal_penalty(),
        "Probe finished"
    );

    Ok(())
}
