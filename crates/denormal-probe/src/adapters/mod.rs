//! Adapters Layer - connections to the host
//!
//! - `system`: clock and quiescence used by the timed kernel
//! - `environment`: build profile, debugger and FTZ/DAZ detection

pub mod environment;
pub mod system;

pub use environment::{debugger_attached, detect_environment, float_control};
pub use system::{FenceQuiescence, SystemClock};
