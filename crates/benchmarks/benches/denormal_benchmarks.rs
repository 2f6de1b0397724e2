//! # Denormal Probe Benchmarks
//!
//! Criterion counterparts of the probe's single-shot timings. Criterion
//! repeats each chain and reports a distribution instead of one number.
//!
//! ## Usage
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench --package probe-benchmarks --bench denormal_benchmarks
//! ```
//!
//! Run one group:
//! ```bash
//! cargo bench --package probe-benchmarks --bench denormal_benchmarks -- kernel/f32
//! cargo bench --package probe-benchmarks --bench denormal_benchmarks -- classifier
//! ```
//!
//! ## Coverage
//!
//! | Group | What | Expectation |
//! |-------|------|-------------|
//! | kernel/f32, kernel/f64 | `multiply_chain` per regime | Sustained denormal slowest unless FTZ/DAZ |
//! | sweep/f32, sweep/f64 | `classify_chain` per decay factor | All three near the sustained cost |
//! | classifier | `is_denormal` on normal, denormal, zero, NaN | Flat, branch only |

mod regimes;

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_kernel(c: &mut Criterion) {
    regimes::kernel::register_benchmarks(c);
}

fn bench_sweep(c: &mut Criterion) {
    regimes::sweep::register_benchmarks(c);
}

fn bench_classifier(c: &mut Criterion) {
    regimes::classifier::register_benchmarks(c);
}

criterion_group!(
    name = denormal_benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(std::time::Duration::from_secs(5));
    targets =
        bench_kernel,
        bench_sweep,
        bench_classifier,
);

criterion_main!(denormal_benches);
