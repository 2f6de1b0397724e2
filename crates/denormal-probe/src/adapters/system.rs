//! Production implementations of the outbound ports

use std::sync::atomic::{compiler_fence, Ordering};
use std::time::{Duration, Instant};

use crate::ports::{AllocatorQuiescence, MonotonicClock};

/// `Instant`-backed clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl MonotonicClock for SystemClock {
    type Mark = Instant;

    #[inline]
    fn start(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn elapsed(&self, mark: Instant) -> Duration {
        mark.elapsed()
    }
}

/// Quiescence for a runtime without a collector.
///
/// There are no pauses to drain, so this only pins ordering: no setup work
/// may be moved past the fence into the timed region.
#[derive(Debug, Default, Clone, Copy)]
pub struct FenceQuiescence;

impl AllocatorQuiescence for FenceQuiescence {
    #[inline]
    fn quiesce(&self) {
        compiler_fence(Ordering::SeqCst);
    }
}
