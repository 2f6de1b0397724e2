//! Floating-point precision classes and the denormal classifier
//!
//! INVARIANTS:
//! - NaN, ±infinity and exact zero are never denormal.
//! - A finite nonzero value is denormal iff its magnitude is below the
//!   smallest normal value of its precision.
//! - Thresholds are the IEEE-754 boundary constants, never computed.

use std::fmt;
use std::ops::Mul;

use serde::Serialize;

/// Smallest positive normal `f32` (2^-126 ≈ 1.175494e-38).
pub const SINGLE_SMALLEST_NORMAL: f32 = f32::MIN_POSITIVE;

/// Smallest positive normal `f64` (2^-1022 ≈ 2.225074e-308).
pub const DOUBLE_SMALLEST_NORMAL: f64 = f64::MIN_POSITIVE;

/// Smallest positive denormal `f32` (2^-149), the bit pattern `0x0000_0001`.
pub const SINGLE_SMALLEST_DENORMAL: f32 = 1.0e-45;

/// Smallest positive denormal `f64` (2^-1074), the bit pattern `0x1`.
pub const DOUBLE_SMALLEST_DENORMAL: f64 = 5.0e-324;

/// IEEE-754 precision class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Precision {
    /// binary32
    Single,
    /// binary64
    Double,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Single => write!(f, "Float"),
            Precision::Double => write!(f, "Double"),
        }
    }
}

/// A float width the probe can measure.
pub trait ProbeFloat:
    Copy
    + PartialEq
    + PartialOrd
    + Mul<Output = Self>
    + fmt::Debug
    + fmt::Display
    + fmt::UpperExp
    + Serialize
    + 'static
{
    /// Precision class of this type
    const PRECISION: Precision;
    /// Smallest positive normal value
    const SMALLEST_NORMAL: Self;
    /// Smallest positive denormal value
    const SMALLEST_DENORMAL: Self;
    /// Largest finite value; used as an unreachable sentinel
    const MAX: Self;
    const ZERO: Self;

    /// Whether this value is a nonzero finite denormal.
    fn is_denormal(self) -> bool;

    /// Absolute value.
    fn magnitude(self) -> Self;

    /// Lossless widening for reporting and validation.
    fn to_f64(self) -> f64;
}

impl ProbeFloat for f32 {
    const PRECISION: Precision = Precision::Single;
    const SMALLEST_NORMAL: Self = SINGLE_SMALLEST_NORMAL;
    const SMALLEST_DENORMAL: Self = SINGLE_SMALLEST_DENORMAL;
    const MAX: Self = f32::MAX;
    const ZERO: Self = 0.0;

    #[inline]
    fn is_denormal(self) -> bool {
        self.is_finite() && self != 0.0 && self.abs() < Self::SMALLEST_NORMAL
    }

    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl ProbeFloat for f64 {
    const PRECISION: Precision = Precision::Double;
    const SMALLEST_NORMAL: Self = DOUBLE_SMALLEST_NORMAL;
    const SMALLEST_DENORMAL: Self = DOUBLE_SMALLEST_DENORMAL;
    const MAX: Self = f64::MAX;
    const ZERO: Self = 0.0;

    #[inline]
    fn is_denormal(self) -> bool {
        self.is_finite() && self != 0.0 && self.abs() < Self::SMALLEST_NORMAL
    }

    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Classify a single-precision value.
#[inline]
pub fn is_denormal_f32(value: f32) -> bool {
    value.is_denormal()
}

/// Classify a double-precision value.
#[inline]
pub fn is_denormal_f64(value: f64) -> bool {
    value.is_denormal()
}
