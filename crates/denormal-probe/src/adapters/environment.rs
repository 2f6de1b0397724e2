//! Host introspection for the environment report
//!
//! Every probe here is best effort. A platform that cannot answer yields
//! `None`, never an error.

use crate::domain::{BuildProfile, EnvironmentReport, FloatControl};

/// MXCSR flush-to-zero bit
const MXCSR_FTZ: u32 = 1 << 15;
/// MXCSR denormals-are-zero bit
const MXCSR_DAZ: u32 = 1 << 6;

/// Gather build and host facts.
pub fn detect_environment() -> EnvironmentReport {
    let report = EnvironmentReport {
        build_profile: BuildProfile::current(),
        debugger_attached: debugger_attached(),
        float_control: float_control(),
        target_arch: std::env::consts::ARCH,
    };

    tracing::debug!(
        profile = %report.build_profile,
        debugger = ?report.debugger_attached,
        float_control = ?report.float_control,
        arch = report.target_arch,
        "Environment detected"
    );

    if report.float_control.is_some_and(FloatControl::masks_denormals) {
        tracing::warn!("FTZ/DAZ is enabled; denormal timings will not show a penalty");
    }

    report
}

/// Whether a tracer (debugger, strace, profiler) is attached to this process.
#[cfg(target_os = "linux")]
pub fn debugger_attached() -> Option<bool> {
    match std::fs::read_to_string("/proc/self/status") {
        Ok(status) => parse_tracer_pid(&status).map(|pid| pid != 0),
        Err(e) => {
            tracing::debug!(error = %e, "Cannot read /proc/self/status");
            None
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub fn debugger_attached() -> Option<bool> {
    None
}

/// Extract `TracerPid` from the contents of `/proc/<pid>/status`.
pub fn parse_tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|value| value.trim().parse().ok())
}

/// Decode the FTZ/DAZ bits of an MXCSR value.
pub fn decode_mxcsr(csr: u32) -> FloatControl {
    FloatControl {
        flush_to_zero: csr & MXCSR_FTZ != 0,
        denormals_are_zero: csr & MXCSR_DAZ != 0,
    }
}

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
))]
#[allow(deprecated)]
pub fn float_control() -> Option<FloatControl> {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::_mm_getcsr;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::_mm_getcsr;

    // SAFETY: SSE is enabled for this target and reading MXCSR has no side effects.
    let csr = unsafe { _mm_getcsr() };
    Some(decode_mxcsr(csr))
}

#[cfg(not(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse"
)))]
pub fn float_control() -> Option<FloatControl> {
    None
}
