//! Error types for the denormal probe

use thiserror::Error;

use crate::domain::DecayPhase;

/// Errors that can occur while configuring or reporting a probe run
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Iteration count for {stage} must be greater than zero")]
    ZeroIterations { stage: &'static str },

    #[error("{label}: initial value {value:e} must be finite and positive")]
    InvalidInitial { label: String, value: f64 },

    #[error("{label}: multiplier {value:e} must be finite and positive")]
    InvalidMultiplier { label: String, value: f64 },

    #[error("{label}: decay multiplier {value} must lie strictly between 0 and 1")]
    NonDecayingMultiplier { label: String, value: f64 },

    #[error("Decay phase regressed from {from:?} to {to:?}")]
    PhaseRegression { from: DecayPhase, to: DecayPhase },

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}
