//! # Denormal Probe
//!
//! Measures how much slower floating-point multiplication gets when the
//! operands are denormal (subnormal) instead of normal.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure numeric logic, no I/O
//!   - `ProbeFloat`: `f32`/`f64` with their IEEE-754 thresholds and classifier
//!   - `DecayPhase`/`PhaseTracker`: Normal → Denormal → Zero state machine
//!   - `ProbeConfig`/`ProbeConfigBuilder`: Compiled-in regimes with validation
//!
//! - **Ports Layer** (`ports/`): `MonotonicClock`, `AllocatorQuiescence`
//!
//! - **Adapters Layer** (`adapters/`): System clock, fence quiescence,
//!   environment detection (build profile, tracer, FTZ/DAZ)
//!
//! - **Service Layer** (`service/`): Warm-up, timed kernels, persistence
//!   sweeps and the `DenormalProbe` pipeline
//!
//! - **Report** (`report`): Line-oriented text output
//!
//! ## Regimes
//!
//! | Regime | Initial | Multiplier | Stays |
//! |--------|---------|------------|-------|
//! | Normal | 1.0 | 1.000001 | Normal |
//! | Quick underflow | 1e-37 / 1e-307 | 0.1 | Passes through denormal to zero |
//! | Sustained denormal | smallest denormal | 0.999999 | Denormal |
//!
//! ## Invariants
//!
//! - NaN, ±∞ and zero are never classified denormal.
//! - Nothing but the multiplication chain runs between clock start and stop.
//! - Under a multiplier in (0, 1) the decay phase never moves backwards.
//!
//! ## Usage Example
//!
//! ```ignore
//! use denormal_probe::{DenormalProbe, ProbeConfig, ReportWriter};
//!
//! let probe = DenormalProbe::new(ProbeConfig::default())?;
//! let mut writer = ReportWriter::new(std::io::stdout().lock());
//! let report = probe.run(&mut writer)?;
//! println!("penalty: {:?}", report.single.denormal_penalty());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod report;
pub mod service;

// Re-exports for convenience
pub use domain::{
    DecayPhase, MeasurementResult, MeasurementRun, Precision, ProbeConfig, ProbeConfigBuilder,
    ProbeFloat, ProbeReport,
};
pub use error::ProbeError;
pub use report::ReportWriter;
pub use service::{DenormalProbe, KernelRunner};
