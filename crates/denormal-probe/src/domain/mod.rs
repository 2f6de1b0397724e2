//! Domain Layer - Pure numeric logic
//!
//! This layer contains:
//! - Precision classes and the denormal classifier
//! - Decay phase state machine
//! - Probe configuration
//! - Measurement and environment result types
//!
//! RULES:
//! - No I/O operations
//! - No timing
//! - Pure functions where possible

pub mod config;
pub mod environment;
pub mod phase;
pub mod precision;
pub mod results;

pub use config::{
    ProbeConfig, ProbeConfigBuilder, Regime, RegimeSet, SweepPlan, TEST_ITERATIONS,
    WARMUP_ITERATIONS,
};
pub use environment::{BuildProfile, EnvironmentReport, FloatControl};
pub use phase::{Decay, DecayPhase, PhaseTracker};
pub use precision::{
    is_denormal_f32, is_denormal_f64, Precision, ProbeFloat, DOUBLE_SMALLEST_DENORMAL,
    DOUBLE_SMALLEST_NORMAL, SINGLE_SMALLEST_DENORMAL, SINGLE_SMALLEST_NORMAL,
};
pub use results::{penalty_ratio, MeasurementResult, MeasurementRun, PrecisionReport, ProbeReport};
