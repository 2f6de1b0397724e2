//! Benchmark modules, one per probe stage

pub mod classifier;
pub mod kernel;
pub mod sweep;
