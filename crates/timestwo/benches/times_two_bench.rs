//! Array doubling benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M elements)
//! - Checked vs. in-place vs. raw entry points

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use timestwo::prelude::*;

// ============================================================================
// Data Generation
// ============================================================================

/// Generate a deterministic ramp of the given size.
fn generate_input(size: usize) -> Vec<f64> {
    (0..size).map(|i| i as f64 * 0.5 - 100.0).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("times_two/scalability");

    for size in [1_000, 100_000, 1_000_000] {
        let input = generate_input(size);
        let mut output = vec![0.0; size];

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| times_two(black_box(&input), black_box(&mut output)).unwrap());
        });
    }

    group.finish();
}

fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("times_two/entry_points");
    let size = 100_000;
    let input = generate_input(size);

    group.throughput(Throughput::Elements(size as u64));

    let mut output = vec![0.0; size];
    group.bench_function("checked", |b| {
        b.iter(|| times_two(black_box(&input), black_box(&mut output)).unwrap());
    });

    let mut values = input.clone();
    group.bench_function("in_place", |b| {
        b.iter(|| times_two_in_place(black_box(&mut values)));
    });

    let mut raw_out = vec![0.0; size];
    group.bench_function("raw", |b| {
        b.iter(|| unsafe {
            times_two_unchecked(size, black_box(input.as_ptr()), black_box(raw_out.as_mut_ptr()))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scalability, bench_entry_points);
criterion_main!(benches);
