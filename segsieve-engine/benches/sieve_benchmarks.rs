//! Benchmarks for full, range and segmented prime generation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use segsieve_engine::{range_sieve, sieve, Primes};
use std::hint::black_box;

fn benchmark_full_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_sieve");

    for n in [100_000i64, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| sieve(black_box(n)).unwrap().count());
        });
    }

    group.finish();
}

fn benchmark_range_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_sieve");

    // Same width, increasingly large magnitudes
    for lower in [1_000_000i64, 1_000_000_000, 1_000_000_000_000] {
        let upper = lower + 1_000_000;
        group.throughput(Throughput::Elements(1_000_000));
        group.bench_with_input(BenchmarkId::from_parameter(lower), &lower, |b, &lower| {
            b.iter(|| range_sieve(black_box(lower), black_box(upper)).unwrap().count());
        });
    }

    group.finish();
}

fn benchmark_segment_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes_upto_20M");
    group.sample_size(10); // Each iteration sieves 20M values

    for width in [250_000u64, 1_000_000, 10_000_000] {
        let primes = Primes::builder().segment_width(width).build().unwrap();
        group.throughput(Throughput::Elements(20_000_000));
        group.bench_with_input(BenchmarkId::from_parameter(width), &primes, |b, primes| {
            b.iter(|| primes.primes_upto(black_box(20_000_000)).unwrap().count());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_full_sieve,
    benchmark_range_sieve,
    benchmark_segment_width
);
criterion_main!(benches);
