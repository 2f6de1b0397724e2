//! Timed multiplication kernels
//!
//! Each timed region is exactly one call to an `#[inline(never)]` chain
//! function, bracketed as:
//!
//! ```text
//! quiesce → clock.start → chain → black_box(result) → clock.elapsed
//! ```
//!
//! Inputs pass through `black_box` so the chain cannot be constant-folded,
//! and the result passes through `black_box` before the clock is read so the
//! loop cannot be sunk past the measurement. After timing, the result is
//! compared against `T::MAX`; the branch is never taken but the compiler
//! cannot prove it.

use std::hint::black_box;

use probe_telemetry::stage_span;

use crate::adapters::{FenceQuiescence, SystemClock};
use crate::domain::{MeasurementResult, MeasurementRun, PhaseTracker, ProbeFloat};
use crate::error::ProbeError;
use crate::ports::{AllocatorQuiescence, MonotonicClock};

/// Multiply `initial` by `multiplier`, `iterations` times.
#[inline(never)]
pub fn multiply_chain<T: ProbeFloat>(initial: T, multiplier: T, iterations: u64) -> T {
    let multiplier = black_box(multiplier);
    let mut value = black_box(initial);
    for _ in 0..iterations {
        value = value * multiplier;
    }
    value
}

/// Same chain, also counting iterations whose value is denormal.
#[inline(never)]
pub fn classify_chain<T: ProbeFloat>(initial: T, multiplier: T, iterations: u64) -> (T, u64) {
    let multiplier = black_box(multiplier);
    let mut value = black_box(initial);
    let mut denormal_count = 0u64;
    for _ in 0..iterations {
        value = value * multiplier;
        if value.is_denormal() {
            denormal_count += 1;
        }
    }
    (value, denormal_count)
}

/// Run the kernel on both precisions so code paths and caches are hot.
///
/// The results are discarded but logged, which keeps them observable.
#[inline(never)]
pub fn warm_up(iterations: u64) {
    let _span = stage_span!("warmup", iterations).entered();

    let single = black_box(multiply_chain(1.0f32, 1.000_001f32, iterations));
    let double = black_box(multiply_chain(1.0f64, 1.000_001f64, iterations));

    tracing::info!(single, double, "Warmup completed");
}

/// Runs measurements through a clock and a quiescence port
#[derive(Debug, Clone)]
pub struct KernelRunner<C = SystemClock, Q = FenceQuiescence> {
    clock: C,
    quiescence: Q,
}

impl KernelRunner {
    pub fn new() -> Self {
        Self::with_ports(SystemClock, FenceQuiescence)
    }
}

impl Default for KernelRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MonotonicClock, Q: AllocatorQuiescence> KernelRunner<C, Q> {
    pub fn with_ports(clock: C, quiescence: Q) -> Self {
        Self { clock, quiescence }
    }

    /// Time one multiplication chain.
    pub fn measure<T: ProbeFloat>(&self, run: &MeasurementRun<T>) -> MeasurementResult<T> {
        let _span = stage_span!("measure", label = %run.label, precision = %T::PRECISION).entered();

        self.quiescence.quiesce();
        let mark = self.clock.start();
        let value = black_box(multiply_chain(run.initial, run.multiplier, run.iterations));
        let elapsed = self.clock.elapsed(mark);

        guard_sentinel(value, &run.label);

        tracing::debug!(
            elapsed_ns = elapsed.as_nanos() as u64,
            final_value = value.to_f64(),
            "Measurement complete"
        );

        MeasurementResult {
            label: run.label.clone(),
            precision: T::PRECISION,
            iterations: run.iterations,
            elapsed,
            final_value: value,
            is_denormal: value.is_denormal(),
            denormal_ratio: None,
        }
    }

    /// Time one chain while counting denormal iterations.
    ///
    /// The phase tracker sees only the start and end values: intermediate
    /// values never leave the timed loop. It is an endpoint check, failing
    /// when the chain ends in an earlier phase than it started in, which a
    /// multiplier in (0, 1) cannot do.
    pub fn sweep<T: ProbeFloat>(
        &self,
        run: &MeasurementRun<T>,
    ) -> Result<MeasurementResult<T>, ProbeError> {
        let _span = stage_span!("sweep", label = %run.label, precision = %T::PRECISION).entered();
        let mut tracker = PhaseTracker::new(run.initial);
        let initial_phase = tracker.current();

        self.quiescence.quiesce();
        let mark = self.clock.start();
        let (value, denormal_count) =
            black_box(classify_chain(run.initial, run.multiplier, run.iterations));
        let elapsed = self.clock.elapsed(mark);

        guard_sentinel(value, &run.label);
        let phase = tracker.observe(value)?;

        let ratio = if run.iterations == 0 {
            0.0
        } else {
            denormal_count as f64 / run.iterations as f64
        };

        tracing::debug!(
            elapsed_ns = elapsed.as_nanos() as u64,
            denormal_count,
            initial_phase = ?initial_phase,
            final_phase = ?phase,
            "Sweep complete"
        );

        Ok(MeasurementResult {
            label: run.label.clone(),
            precision: T::PRECISION,
            iterations: run.iterations,
            elapsed,
            final_value: value,
            is_denormal: value.is_denormal(),
            denormal_ratio: Some(ratio),
        })
    }
}

#[inline(never)]
fn guard_sentinel<T: ProbeFloat>(value: T, label: &str) {
    if black_box(value) == T::MAX {
        tracing::warn!(label, "Impossible: kernel produced the sentinel value");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DecayPhase;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    type EventLog = Rc<RefCell<Vec<&'static str>>>;

    /// Clock that logs every read and advances 1ms per read.
    struct RecordingClock {
        log: EventLog,
        ticks: Cell<u64>,
    }

    impl MonotonicClock for RecordingClock {
        type Mark = u64;

        fn start(&self) -> u64 {
            self.log.borrow_mut().push("start");
            self.ticks.set(self.ticks.get() + 1);
            self.ticks.get()
        }

        fn elapsed(&self, mark: u64) -> Duration {
            self.log.borrow_mut().push("stop");
            self.ticks.set(self.ticks.get() + 1);
            Duration::from_millis(self.ticks.get() - mark)
        }
    }

    struct RecordingQuiescence {
        log: EventLog,
    }

    impl AllocatorQuiescence for RecordingQuiescence {
        fn quiesce(&self) {
            self.log.borrow_mut().push("quiesce");
        }
    }

    fn recording_runner() -> (KernelRunner<RecordingClock, RecordingQuiescence>, EventLog) {
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let runner = KernelRunner::with_ports(
            RecordingClock {
                log: log.clone(),
                ticks: Cell::new(0),
            },
            RecordingQuiescence { log: log.clone() },
        );
        (runner, log)
    }

    fn run<T: ProbeFloat>(initial: T, multiplier: T, iterations: u64) -> MeasurementRun<T> {
        MeasurementRun {
            label: "test".to_string(),
            initial,
            multiplier,
            iterations,
        }
    }

    #[test]
    fn test_multiply_chain_exact_count() {
        assert_eq!(multiply_chain(1.0f64, 2.0, 10), 1024.0);
        assert_eq!(multiply_chain(3.0f32, 2.0, 0), 3.0);
        assert_eq!(multiply_chain(1.0f32, 0.5, 3), 0.125);
    }

    #[test]
    fn test_classify_chain_counts_denormals() {
        // 1e-37 * 0.1 passes through the denormal band on its way to zero.
        let (value, count) = classify_chain(1e-37f32, 0.1, 100);
        assert_eq!(value, 0.0);
        assert!(count > 0 && count < 10, "count = {count}");
    }

    #[test]
    fn test_classify_chain_matches_decay_iterator() {
        let expected = crate::domain::Decay::new(1e-300f64, 0.5)
            .take(1_000)
            .filter(|v| v.is_denormal())
            .count() as u64;
        let (_, count) = classify_chain(1e-300f64, 0.5, 1_000);
        assert_eq!(count, expected);
    }

    #[test]
    fn test_measure_orders_quiesce_before_timer() {
        let (runner, log) = recording_runner();
        let result = runner.measure(&run(1.0f32, 1.000_001, 1_000));
        assert_eq!(*log.borrow(), vec!["quiesce", "start", "stop"]);
        assert_eq!(result.elapsed, Duration::from_millis(1));
        assert_eq!(result.denormal_ratio, None);
    }

    #[test]
    fn test_sweep_orders_quiesce_before_timer() {
        let (runner, log) = recording_runner();
        let result = runner.sweep(&run(1e-40f32, 0.9, 1_000)).unwrap();
        assert_eq!(*log.borrow(), vec!["quiesce", "start", "stop"]);
        assert!(result.denormal_ratio.is_some());
    }

    #[test]
    fn test_measure_with_system_ports() {
        let result = KernelRunner::new().measure(&run(1.0f64, 1.000_001, 10_000));
        assert!(result.final_value > 1.0);
        assert!(!result.is_denormal);
        assert_eq!(result.iterations, 10_000);
    }

    #[test]
    fn test_sweep_aggressive_decay_stalls_denormal() {
        let result = KernelRunner::new().sweep(&run(1e-40f32, 0.9, 10_000)).unwrap();
        assert_eq!(result.final_value.to_bits(), 4);
        assert_eq!(result.denormal_percentage(), Some(100.0));
    }

    #[test]
    fn test_sweep_underflow_reports_low_percentage() {
        let result = KernelRunner::new().sweep(&run(1e-40f32, 0.1, 10_000)).unwrap();
        assert_eq!(result.final_value, 0.0);
        assert!(!result.is_denormal);
        assert!(result.denormal_percentage().unwrap() < 1.0);
    }

    #[test]
    fn test_sweep_rejects_phase_regression() {
        // Growth is rejected by config validation; feed it in directly.
        let result = KernelRunner::new().sweep(&run(0.0f32, 2.0, 10));
        assert!(result.is_ok());
        let result = KernelRunner::new().sweep(&run(1e-40f32, 1e30, 10));
        assert!(matches!(
            result,
            Err(ProbeError::PhaseRegression {
                from: DecayPhase::Denormal,
                to: DecayPhase::Normal
            })
        ));
    }

    #[test]
    fn test_warm_up_completes() {
        warm_up(1_000);
    }
}
