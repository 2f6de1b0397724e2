//! # Multiplication Kernel Benchmarks
//!
//! Times `multiply_chain` in the normal, quick-underflow and
//! sustained-denormal regimes. The sustained regime pays the denormal
//! penalty on every iteration; quick underflow pays it only briefly.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use denormal_probe::service::multiply_chain;
use probe_benchmarks::utils::{double_regimes, single_regimes, CHAIN_LENGTH};

pub fn register_benchmarks(c: &mut Criterion) {
    bench_single(c);
    bench_double(c);
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel/f32");
    group.throughput(Throughput::Elements(CHAIN_LENGTH));

    for (label, initial, multiplier) in single_regimes() {
        group.bench_with_input(
            BenchmarkId::new("multiply_chain", &label),
            &(initial, multiplier),
            |b, &(initial, multiplier)| {
                b.iter(|| multiply_chain(black_box(initial), black_box(multiplier), CHAIN_LENGTH))
            },
        );
    }

    group.finish();
}

fn bench_double(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel/f64");
    group.throughput(Throughput::Elements(CHAIN_LENGTH));

    for (label, initial, multiplier) in double_regimes() {
        group.bench_with_input(
            BenchmarkId::new("multiply_chain", &label),
            &(initial, multiplier),
            |b, &(initial, multiplier)| {
                b.iter(|| multiply_chain(black_box(initial), black_box(multiplier), CHAIN_LENGTH))
            },
        );
    }

    group.finish();
}
