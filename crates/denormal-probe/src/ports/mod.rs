//! Ports Layer - trait definitions for hexagonal architecture

pub mod outbound;

pub use outbound::{AllocatorQuiescence, MonotonicClock};
