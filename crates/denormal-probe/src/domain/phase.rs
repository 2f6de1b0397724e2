//! Decay phases of a value under repeated multiplication by `0 < m < 1`
//!
//! ```text
//! Normal ──→ Denormal ──→ Zero
//! ```
//!
//! Magnitudes never increase, so phases only move left to right. A value
//! may skip `Denormal` entirely or settle in it: round-to-nearest maps a
//! denormal of `k` ulps back to `k` whenever `k * (1 - m) < 0.5`.

use serde::Serialize;

use super::precision::ProbeFloat;
use crate::error::ProbeError;

/// Range a value currently occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DecayPhase {
    /// At or above the smallest normal magnitude (also NaN and ±∞)
    Normal,
    /// Nonzero finite denormal
    Denormal,
    /// Exact zero
    Zero,
}

impl DecayPhase {
    /// Phase of a single value.
    pub fn of<T: ProbeFloat>(value: T) -> Self {
        if value == T::ZERO {
            DecayPhase::Zero
        } else if value.is_denormal() {
            DecayPhase::Denormal
        } else {
            DecayPhase::Normal
        }
    }

    /// Whether `next` may follow `self` during a decay.
    pub fn can_transition_to(self, next: DecayPhase) -> bool {
        next >= self
    }
}

/// Tracks a decay and rejects any backward transition.
#[derive(Debug, Clone)]
pub struct PhaseTracker {
    current: DecayPhase,
}

impl PhaseTracker {
    pub fn new<T: ProbeFloat>(initial: T) -> Self {
        Self {
            current: DecayPhase::of(initial),
        }
    }

    pub fn current(&self) -> DecayPhase {
        self.current
    }

    /// Record the next value of the decay.
    pub fn observe<T: ProbeFloat>(&mut self, value: T) -> Result<DecayPhase, ProbeError> {
        let next = DecayPhase::of(value);
        if !self.current.can_transition_to(next) {
            return Err(ProbeError::PhaseRegression {
                from: self.current,
                to: next,
            });
        }
        self.current = next;
        Ok(next)
    }
}

/// Iterator over `v * m, v * m * m, ...`
#[derive(Debug, Clone)]
pub struct Decay<T> {
    value: T,
    multiplier: T,
}

impl<T: ProbeFloat> Decay<T> {
    pub fn new(initial: T, multiplier: T) -> Self {
        Self {
            value: initial,
            multiplier,
        }
    }
}

impl<T: ProbeFloat> Iterator for Decay<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.value = self.value * self.multiplier;
        Some(self.value)
    }
}
