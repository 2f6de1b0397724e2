//! Measurement inputs and outputs

use std::time::Duration;

use serde::Serialize;

use super::environment::EnvironmentReport;
use super::phase::DecayPhase;
use super::precision::{Precision, ProbeFloat};

/// One timed test case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementRun<T> {
    pub label: String,
    pub initial: T,
    pub multiplier: T,
    pub iterations: u64,
}

/// Outcome of a timed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementResult<T> {
    pub label: String,
    pub precision: Precision,
    pub iterations: u64,
    pub elapsed: Duration,
    pub final_value: T,
    pub is_denormal: bool,
    /// Fraction of iterations whose value was denormal; only sweeps count this
    pub denormal_ratio: Option<f64>,
}

impl<T: ProbeFloat> MeasurementResult<T> {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Denormal iterations as a percentage, when counted.
    pub fn denormal_percentage(&self) -> Option<f64> {
        self.denormal_ratio.map(|r| r * 100.0)
    }

    pub fn final_phase(&self) -> DecayPhase {
        DecayPhase::of(self.final_value)
    }
}

/// Ratio of two durations, `None` when the baseline is zero.
pub fn penalty_ratio(slow: Duration, baseline: Duration) -> Option<f64> {
    let baseline = baseline.as_secs_f64();
    if baseline <= 0.0 {
        return None;
    }
    Some(slow.as_secs_f64() / baseline)
}

/// The three regime results for one precision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisionReport<T> {
    pub precision: Precision,
    pub normal: MeasurementResult<T>,
    pub quick_underflow: MeasurementResult<T>,
    pub sustained_denormal: MeasurementResult<T>,
}

impl<T: ProbeFloat> PrecisionReport<T> {
    /// Sustained-denormal time over normal time.
    pub fn denormal_penalty(&self) -> Option<f64> {
        penalty_ratio(self.sustained_denormal.elapsed, self.normal.elapsed)
    }
}

/// Everything one probe run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub environment: EnvironmentReport,
    pub single: PrecisionReport<f32>,
    pub double: PrecisionReport<f64>,
    pub single_sweeps: Vec<MeasurementResult<f32>>,
    pub double_sweeps: Vec<MeasurementResult<f64>>,
}
