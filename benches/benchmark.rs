//! Benchmarks for cached bit and range draws.
//!
//! Compares `BitRandom` requests against drawing the same values straight
//! from the wrapped Mersenne Twister, across request widths and span
//! shapes (power-of-two fits versus poor fits that exercise rejection).

use bitrand::random::mersenne_twister::MersenneTwister;
use bitrand::random::native_source::NativeSource;
use bitrand::BitRandom;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Seed used consistently across all benchmarks.
const BENCH_SEED: u64 = 20240217;

/// Benchmarks `random_bits()` against one native word per request.
fn bench_random_bits(c: &mut Criterion) {
    let widths: &[u8] = &[1, 4, 8, 16, 20];

    let mut group = c.benchmark_group("random_bits");
    for &width in widths {
        let mut rng = BitRandom::with_seed(BENCH_SEED);
        group.bench_with_input(BenchmarkId::new("cached", width), &width, |b, &w| {
            b.iter(|| rng.random_bits(black_box(w)));
        });

        let mut native = MersenneTwister::with_seed(BENCH_SEED);
        group.bench_with_input(BenchmarkId::new("native", width), &width, |b, &w| {
            b.iter(|| native.next_word() & ((1u32 << black_box(w)) - 1));
        });
    }
    group.finish();
}

/// Benchmarks `random()` across spans.
///
/// 100 and 1000 are typical ranges; 129 sits just above a power of two so
/// nearly half the first draws are rejected.
fn bench_random_range(c: &mut Criterion) {
    let maxes: &[i64] = &[100, 129, 257, 1000, 65_537];

    let mut group = c.benchmark_group("random_range");
    for &max in maxes {
        let mut rng = BitRandom::with_seed(BENCH_SEED);
        group.bench_with_input(BenchmarkId::new("cached", max), &max, |b, &m| {
            b.iter(|| rng.random(black_box(m)));
        });

        let mut native = MersenneTwister::with_seed(BENCH_SEED);
        group.bench_with_input(BenchmarkId::new("native", max), &max, |b, &m| {
            b.iter(|| native.next_below(black_box(m) as u32));
        });
    }
    group.finish();
}

/// Benchmarks generator construction (two native words).
fn bench_construction(c: &mut Criterion) {
    let mut source = MersenneTwister::with_seed(BENCH_SEED);
    c.bench_function("construction", |b| {
        b.iter(|| BitRandom::new(black_box(&mut source)).random_bits(1));
    });
}

criterion_group!(
    benches,
    bench_random_bits,
    bench_random_range,
    bench_construction,
);
criterion_main!(benches);
