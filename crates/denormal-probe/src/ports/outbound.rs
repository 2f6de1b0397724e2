//! Driven ports - what the timed kernel depends on
//!
//! The kernel never calls `Instant::now` directly. Routing every clock read
//! and every pre-timer setup step through these traits lets tests verify the
//! ordering quiesce → start → stop without timing anything.

use std::time::Duration;

/// Monotonic time source
pub trait MonotonicClock {
    /// Opaque point in time
    type Mark: Copy;

    /// Read the clock.
    fn start(&self) -> Self::Mark;

    /// Time elapsed since `mark`. Never negative.
    fn elapsed(&self, mark: Self::Mark) -> Duration;
}

/// Brings allocator/runtime state to rest before a timed region
pub trait AllocatorQuiescence {
    /// Must return only once all pending allocator work is done.
    fn quiesce(&self);
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    type Mark = C::Mark;

    fn start(&self) -> Self::Mark {
        (**self).start()
    }

    fn elapsed(&self, mark: Self::Mark) -> Duration {
        (**self).elapsed(mark)
    }
}

impl<Q: AllocatorQuiescence + ?Sized> AllocatorQuiescence for &Q {
    fn quiesce(&self) {
        (**self).quiesce()
    }
}
