//! # Persistence Sweep Benchmarks
//!
//! `classify_chain` per decay factor. None of the default factors
//! underflow to zero, so every sample stays in the denormal band.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use denormal_probe::service::classify_chain;
use probe_benchmarks::utils::{double_sweeps, single_sweeps, CHAIN_LENGTH};

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep/f32");
    group.throughput(Throughput::Elements(CHAIN_LENGTH));
    for (label, start, decay) in single_sweeps() {
        group.bench_with_input(
            BenchmarkId::new("classify_chain", &label),
            &(start, decay),
            |b, &(start, decay)| {
                b.iter(|| classify_chain(black_box(start), black_box(decay), CHAIN_LENGTH))
            },
        );
    }
    group.finish();

    let mut group = c.benchmark_group("sweep/f64");
    group.throughput(Throughput::Elements(CHAIN_LENGTH));
    for (label, start, decay) in double_sweeps() {
        group.bench_with_input(
            BenchmarkId::new("classify_chain", &label),
            &(start, decay),
            |b, &(start, decay)| {
                b.iter(|| classify_chain(black_box(start), black_box(decay), CHAIN_LENGTH))
            },
        );
    }
    group.finish();
}
