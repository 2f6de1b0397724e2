//! Build and host facts printed before any timing
//!
//! None of these change what the probe does; they change how its numbers
//! should be read.

use std::fmt;

use serde::Serialize;

/// How the running binary was compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    /// Profile of the code this function was compiled into.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildProfile::Debug
        } else {
            BuildProfile::Release
        }
    }

    pub fn is_optimized(self) -> bool {
        self == BuildProfile::Release
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildProfile::Debug => write!(f, "DEBUG"),
            BuildProfile::Release => write!(f, "RELEASE"),
        }
    }
}

/// Hardware shortcuts that make denormal arithmetic free (and wrong)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloatControl {
    /// Denormal results are flushed to zero
    pub flush_to_zero: bool,
    /// Denormal inputs are treated as zero
    pub denormals_are_zero: bool,
}

impl FloatControl {
    /// Whether either mode hides the denormal penalty.
    pub fn masks_denormals(self) -> bool {
        self.flush_to_zero || self.denormals_are_zero
    }
}

/// Advisory context for a probe run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentReport {
    pub build_profile: BuildProfile,
    /// `None` when the platform offers no way to tell
    pub debugger_attached: Option<bool>,
    /// `None` off x86
    pub float_control: Option<FloatControl>,
    pub target_arch: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_profile_matches_debug_assertions() {
        let profile = BuildProfile::current();
        assert_eq!(profile.is_optimized(), !cfg!(debug_assertions));
    }

    #[test]
    fn test_profile_display() {
        assert_eq!(BuildProfile::Debug.to_string(), "DEBUG");
        assert_eq!(BuildProfile::Release.to_string(), "RELEASE");
    }

    #[test]
    fn test_masks_denormals() {
        let off = FloatControl {
            flush_to_zero: false,
            denormals_are_zero: false,
        };
        assert!(!off.masks_denormals());
        assert!(FloatControl { flush_to_zero: true, ..off }.masks_denormals());
        assert!(FloatControl { denormals_are_zero: true, ..off }.masks_denormals());
    }
}
