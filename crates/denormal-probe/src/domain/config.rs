//! Probe configuration and validation
//!
//! Every parameter is a compiled-in constant; [`ProbeConfig::default`] is the
//! configuration the binary runs. The builder exists so tests and benches can
//! shrink iteration counts without touching the regimes.
//!
//! # Example
//!
//! ```ignore
//! use denormal_probe::domain::ProbeConfigBuilder;
//!
//! let config = ProbeConfigBuilder::new()
//!     .warmup_iterations(10_000)
//!     .test_iterations(100_000)
//!     .build()?;
//! ```

use serde::Serialize;

use super::precision::ProbeFloat;
use super::results::MeasurementRun;
use crate::error::ProbeError;

/// Iterations of the untimed warm-up kernel
pub const WARMUP_ITERATIONS: u64 = 1_000_000;

/// Iterations of every timed loop
pub const TEST_ITERATIONS: u64 = 50_000_000;

/// One multiplication chain: where it starts and what it multiplies by
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Regime<T> {
    pub label: String,
    pub initial: T,
    pub multiplier: T,
}

impl<T: ProbeFloat> Regime<T> {
    pub fn new(label: impl Into<String>, initial: T, multiplier: T) -> Self {
        Self {
            label: label.into(),
            initial,
            multiplier,
        }
    }

    /// Bind this regime to an iteration count.
    pub fn to_run(&self, iterations: u64) -> MeasurementRun<T> {
        MeasurementRun {
            label: self.label.clone(),
            initial: self.initial,
            multiplier: self.multiplier,
            iterations,
        }
    }

    fn validate(&self) -> Result<(), ProbeError> {
        let initial = self.initial.to_f64();
        if !initial.is_finite() || initial <= 0.0 {
            return Err(ProbeError::InvalidInitial {
                label: self.label.clone(),
                value: initial,
            });
        }

        let multiplier = self.multiplier.to_f64();
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ProbeError::InvalidMultiplier {
                label: self.label.clone(),
                value: multiplier,
            });
        }

        Ok(())
    }
}

/// The three timed regimes for one precision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeSet<T> {
    pub normal: Regime<T>,
    pub quick_underflow: Regime<T>,
    pub sustained_denormal: Regime<T>,
}

impl Default for RegimeSet<f32> {
    fn default() -> Self {
        Self {
            normal: Regime::new("Normal Float", 1.0, 1.000_001),
            quick_underflow: Regime::new("Quick Underflow", 1e-37, 0.1),
            sustained_denormal: Regime::new(
                "Sustained Denormal",
                <f32 as ProbeFloat>::SMALLEST_DENORMAL,
                0.999_999,
            ),
        }
    }
}

impl Default for RegimeSet<f64> {
    fn default() -> Self {
        Self {
            normal: Regime::new("Normal Double", 1.0, 1.000_001),
            quick_underflow: Regime::new("Quick Underflow", 1e-307, 0.1),
            sustained_denormal: Regime::new(
                "Sustained Denormal",
                <f64 as ProbeFloat>::SMALLEST_DENORMAL,
                0.999_999,
            ),
        }
    }
}

impl<T: ProbeFloat> RegimeSet<T> {
    pub fn iter(&self) -> impl Iterator<Item = &Regime<T>> {
        [&self.normal, &self.quick_underflow, &self.sustained_denormal].into_iter()
    }

    fn validate(&self) -> Result<(), ProbeError> {
        self.iter().try_for_each(Regime::validate)
    }
}

/// Persistence sweep: several decay factors, each with its own start value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPlan<T> {
    pub decays: Vec<Regime<T>>,
}

impl Default for SweepPlan<f32> {
    fn default() -> Self {
        let start = 1e-40f32;
        Self {
            decays: vec![
                Regime::new("Aggressive Decay", start, 0.9),
                Regime::new("Moderate Decay", start, 0.99),
                Regime::new("Slow Decay", start, 0.999_999),
            ],
        }
    }
}

impl Default for SweepPlan<f64> {
    fn default() -> Self {
        let start = 1e-320f64;
        Self {
            decays: vec![
                Regime::new("Aggressive Decay", start, 0.9),
                Regime::new("Moderate Decay", start, 0.99),
                Regime::new("Slow Decay", start, 0.999_999),
            ],
        }
    }
}

impl<T: ProbeFloat> SweepPlan<T> {
    /// A plan with a single decay factor.
    pub fn single(label: impl Into<String>, start: T, multiplier: T) -> Self {
        Self {
            decays: vec![Regime::new(label, start, multiplier)],
        }
    }

    fn validate(&self) -> Result<(), ProbeError> {
        for decay in &self.decays {
            decay.validate()?;
            let m = decay.multiplier.to_f64();
            if m >= 1.0 {
                return Err(ProbeError::NonDecayingMultiplier {
                    label: decay.label.clone(),
                    value: m,
                });
            }
        }
        Ok(())
    }
}

/// Complete probe configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeConfig {
    pub warmup_iterations: u64,
    pub test_iterations: u64,
    pub single: RegimeSet<f32>,
    pub double: RegimeSet<f64>,
    pub single_sweep: SweepPlan<f32>,
    pub double_sweep: SweepPlan<f64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: WARMUP_ITERATIONS,
            test_iterations: TEST_ITERATIONS,
            single: RegimeSet::default(),
            double: RegimeSet::default(),
            single_sweep: SweepPlan::default(),
            double_sweep: SweepPlan::default(),
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.warmup_iterations == 0 {
            return Err(ProbeError::ZeroIterations { stage: "warmup" });
        }
        if self.test_iterations == 0 {
            return Err(ProbeError::ZeroIterations { stage: "test" });
        }
        self.single.validate()?;
        self.double.validate()?;
        self.single_sweep.validate()?;
        self.double_sweep.validate()
    }
}

/// Builder for ProbeConfig with validation
#[derive(Default)]
pub struct ProbeConfigBuilder {
    warmup_iterations: Option<u64>,
    test_iterations: Option<u64>,
    single: Option<RegimeSet<f32>>,
    double: Option<RegimeSet<f64>>,
    single_sweep: Option<SweepPlan<f32>>,
    double_sweep: Option<SweepPlan<f64>>,
}

impl ProbeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warmup_iterations(mut self, n: u64) -> Self {
        self.warmup_iterations = Some(n);
        self
    }

    pub fn test_iterations(mut self, n: u64) -> Self {
        self.test_iterations = Some(n);
        self
    }

    pub fn single(mut self, regimes: RegimeSet<f32>) -> Self {
        self.single = Some(regimes);
        self
    }

    pub fn double(mut self, regimes: RegimeSet<f64>) -> Self {
        self.double = Some(regimes);
        self
    }

    pub fn single_sweep(mut self, plan: SweepPlan<f32>) -> Self {
        self.single_sweep = Some(plan);
        self
    }

    pub fn double_sweep(mut self, plan: SweepPlan<f64>) -> Self {
        self.double_sweep = Some(plan);
        self
    }

    /// Build the configuration, validating every regime.
    pub fn build(self) -> Result<ProbeConfig, ProbeError> {
        let defaults = ProbeConfig::default();
        let config = ProbeConfig {
            warmup_iterations: self.warmup_iterations.unwrap_or(defaults.warmup_iterations),
            test_iterations: self.test_iterations.unwrap_or(defaults.test_iterations),
            single: self.single.unwrap_or(defaults.single),
            double: self.double.unwrap_or(defaults.double),
            single_sweep: self.single_sweep.unwrap_or(defaults.single_sweep),
            double_sweep: self.double_sweep.unwrap_or(defaults.double_sweep),
        };
        config.validate()?;
        Ok(config)
    }
}
