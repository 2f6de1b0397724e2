//! Human-readable report rendering
//!
//! Every `write_*` call flushes, so a line appears as soon as its
//! measurement finishes. Nothing here runs inside a timed region.

use std::io::Write;

use crate::domain::{DecayPhase, EnvironmentReport, MeasurementResult, Precision, ProbeFloat};
use crate::error::ProbeError;

const RULE: &str = "==============================================";

/// Writes probe output to any `Write` sink
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Title and environment block.
    pub fn write_header(&mut self, env: &EnvironmentReport) -> Result<(), ProbeError> {
        writeln!(self.out, "Debug vs Release Denormal Performance Comparison")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Current build configuration: {}", env.build_profile)?;
        if env.build_profile.is_optimized() {
            writeln!(self.out, "Compiled with RELEASE optimizations")?;
        } else {
            writeln!(self.out, "Compiled with DEBUG symbols")?;
        }
        writeln!(
            self.out,
            "Debugger attached: {}",
            yes_no_unknown(env.debugger_attached)
        )?;
        writeln!(self.out, "Optimizations enabled: {}", env.build_profile.is_optimized())?;
        match env.float_control {
            Some(control) => writeln!(
                self.out,
                "Flush-to-zero: {}, denormals-are-zero: {}",
                control.flush_to_zero, control.denormals_are_zero
            )?,
            None => writeln!(self.out, "Flush-to-zero: unknown")?,
        }
        writeln!(self.out, "Target architecture: {}", env.target_arch)?;
        writeln!(self.out)?;
        self.flush()
    }

    pub fn write_warmup_done(&mut self) -> Result<(), ProbeError> {
        writeln!(self.out, "Warmup completed")?;
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "PERFORMANCE TESTS")?;
        writeln!(self.out, "{RULE}")?;
        self.flush()
    }

    pub fn write_precision_header(&mut self, precision: Precision) -> Result<(), ProbeError> {
        writeln!(self.out)?;
        writeln!(self.out, "{precision} Performance:")?;
        self.flush()
    }

    /// One regime line: label, milliseconds, final value, denormal flag.
    pub fn write_measurement<T: ProbeFloat>(
        &mut self,
        result: &MeasurementResult<T>,
    ) -> Result<(), ProbeError> {
        writeln!(
            self.out,
            "  {:<18}: {:>4} ms (final: {:.2E}, denormal: {})",
            result.label,
            result.elapsed_ms(),
            result.final_value,
            result.is_denormal
        )?;
        self.flush()
    }

    pub fn write_penalty(&mut self, penalty: Option<f64>) -> Result<(), ProbeError> {
        match penalty {
            Some(ratio) => writeln!(self.out, "  Denormal penalty: {ratio:.1}x slower")?,
            None => writeln!(
                self.out,
                "  Denormal penalty: n/a (normal run took no measurable time)"
            )?,
        }
        self.flush()
    }

    pub fn write_sweep_header(&mut self) -> Result<(), ProbeError> {
        writeln!(self.out)?;
        writeln!(self.out, "Denormal Persistence Test:")?;
        writeln!(self.out)?;
        writeln!(self.out, "Testing how long numbers stay denormal:")?;
        self.flush()
    }

    /// One sweep line: label, milliseconds, denormal percentage, where it ended.
    pub fn write_sweep<T: ProbeFloat>(
        &mut self,
        result: &MeasurementResult<T>,
    ) -> Result<(), ProbeError> {
        let name = format!("{} {}", result.precision, result.label);
        writeln!(
            self.out,
            "  {:<21}: {:>4} ms ({:.1}% denormal operations, final: {:.2E} {})",
            name,
            result.elapsed_ms(),
            result.denormal_percentage().unwrap_or(0.0),
            result.final_value,
            phase_name(result.final_phase())
        )?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<(), ProbeError> {
        self.out.flush()?;
        Ok(())
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> Result<W, ProbeError> {
        self.flush()?;
        Ok(self.out)
    }
}

fn yes_no_unknown(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "unknown",
    }
}

fn phase_name(phase: DecayPhase) -> &'static str {
    match phase {
        DecayPhase::Normal => "normal",
        DecayPhase::Denormal => "denormal",
        DecayPhase::Zero => "zero",
    }
}
