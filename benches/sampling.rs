//! Performance measurement for uniform and Gaussian sample generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use statrand::random::{GaussianRandomizer, Randomizer, UniformRandomizer};
use std::hint::black_box;

/// Measures single uniform draws across sample types
fn bench_uniform_scalars(c: &mut Criterion) {
    let mut randomizer = UniformRandomizer::with_seed(12345);

    c.bench_function("uniform_next_f64", |b| {
        b.iter(|| black_box(randomizer.next_f64()));
    });

    c.bench_function("uniform_next_in_range_i32", |b| {
        b.iter(|| randomizer.next_in_range(black_box(-1000_i32), black_box(1000)));
    });
}

/// Measures bulk uniform fills at increasing lengths
fn bench_uniform_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_fill_f64s");
    let mut randomizer = UniformRandomizer::with_seed(12345);

    for length in &[64_usize, 1024, 16_384] {
        let mut values = vec![0.0_f64; *length];
        group.bench_with_input(BenchmarkId::from_parameter(length), length, |b, _| {
            b.iter(|| randomizer.fill_f64s(black_box(&mut values)));
        });
    }

    group.finish();
}

/// Measures Gaussian draws, where the polar transform serves pairs
fn bench_gaussian(c: &mut Criterion) {
    let mut randomizer = GaussianRandomizer::with_seed(12345);

    c.bench_function("gaussian_next_f64", |b| {
        b.iter(|| black_box(randomizer.next_f64()));
    });

    let mut values = vec![0.0_f64; 1024];
    c.bench_function("gaussian_fill_f64s_1024", |b| {
        b.iter(|| randomizer.fill_f64s(black_box(&mut values)));
    });
}

criterion_group!(benches, bench_uniform_scalars, bench_uniform_bulk, bench_gaussian);
criterion_main!(benches);
