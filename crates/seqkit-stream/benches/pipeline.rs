//! Benchmarks for typical stream pipelines

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqkit_stream::Stream;

fn bench_stateless_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("stateless_chain");
    for size in [1_000usize, 10_000, 100_000] {
        let input: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                Stream::of(input.iter().copied())
                    .filter(|v| v % 3 != 0)
                    .map(|v| v * 2)
                    .skip(10)
                    .limit(500)
                    .values()
            })
        });
    }
    group.finish();
}

fn bench_stateful_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("stateful_chain");
    for size in [1_000usize, 10_000] {
        let input: Vec<u64> = (0..size as u64).map(|i| (i * 7919) % 1_000).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| Stream::of(input.iter().copied()).unique().sort().values())
        });
    }
    group.finish();
}

fn bench_generative(c: &mut Criterion) {
    c.bench_function("seed_limit_10k", |b| {
        b.iter(|| Stream::seed(black_box(1u64), |x: &u64| x.wrapping_mul(3)).limit(10_000).count())
    });
}

criterion_group!(benches, bench_stateless_chain, bench_stateful_chain, bench_generative);
criterion_main!(benches);
