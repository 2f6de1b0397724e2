//! Service Layer - orchestration
//!
//! - `kernel`: warm-up, timed chains and the `KernelRunner`
//! - `probe_service`: `DenormalProbe`, the end-to-end pipeline

pub mod kernel;
pub mod probe_service;

pub use kernel::{classify_chain, multiply_chain, warm_up, KernelRunner};
pub use probe_service::DenormalProbe;
