//! # Denormal Classifier Benchmarks
//!
//! `is_denormal` over a fixed batch mixing every class of input.

use criterion::{black_box, Criterion, Throughput};
use denormal_probe::domain::{is_denormal_f32, is_denormal_f64};

const BATCH: usize = 1_024;

fn single_inputs() -> Vec<f32> {
    let classes = [1.0f32, 1e-40, 1e-45, 0.0, -1e-39, f32::NAN, f32::INFINITY];
    classes.iter().copied().cycle().take(BATCH).collect()
}

fn double_inputs() -> Vec<f64> {
    let classes = [1.0f64, 1e-310, 5e-324, 0.0, -1e-315, f64::NAN, f64::INFINITY];
    classes.iter().copied().cycle().take(BATCH).collect()
}

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    group.throughput(Throughput::Elements(BATCH as u64));

    let singles = single_inputs();
    group.bench_function("f32_mixed_batch", |b| {
        b.iter(|| {
            black_box(&singles)
                .iter()
                .filter(|&&v| is_denormal_f32(v))
                .count()
        })
    });

    let doubles = double_inputs();
    group.bench_function("f64_mixed_batch", |b| {
        b.iter(|| {
            black_box(&doubles)
                .iter()
                .filter(|&&v| is_denormal_f64(v))
                .count()
        })
    });

    group.finish();
}
