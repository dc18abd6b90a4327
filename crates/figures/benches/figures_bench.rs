//! Criterion benchmarks for shape validation, equality and collection queries.
//! Focus sizes: n in {10, 100, 1000} figures.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use figures::prelude::*;
use figures::sample::{draw_shape, ReplayToken, SampleCfg};

fn sampled(n: usize, seed: u64) -> FigureArray {
    (0..n as u64)
        .filter_map(|i| {
            let kind = FigureKind::ALL[(i % 3) as usize];
            draw_shape(kind, SampleCfg::default(), ReplayToken::new(seed, i)).ok()
        })
        .collect()
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for kind in FigureKind::ALL {
        let shape = draw_shape(kind, SampleCfg::default(), ReplayToken::new(11, 0))
            .expect("sampled shape");
        let verts = shape.vertices().to_vec();
        group.bench_function(kind.name(), |b| {
            b.iter(|| Shape::new(kind, &verts).is_ok())
        });
    }
    group.finish();
}

fn bench_equals(c: &mut Criterion) {
    let mut group = c.benchmark_group("equals");
    for kind in FigureKind::ALL {
        let a = draw_shape(kind, SampleCfg::default(), ReplayToken::new(12, 0))
            .expect("sampled shape");
        let mut rotated = a.vertices().to_vec();
        rotated.rotate_left(rotated.len() - 1);
        let b = Shape::new(kind, &rotated).expect("rotated shape");
        group.bench_function(kind.name(), |bench| bench.iter(|| a.equals(&b)));
    }
    group.finish();
}

fn bench_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("array");
    for &n in &[10usize, 100, 1000] {
        let arr = sampled(n, 13);
        group.bench_with_input(BenchmarkId::new("total_area", n), &arr, |b, arr| {
            b.iter(|| arr.total_area())
        });
        group.bench_with_input(BenchmarkId::new("describe_all", n), &arr, |b, arr| {
            b.iter_batched(
                || Vec::with_capacity(64 * n),
                |mut buf| arr.describe_all(&mut buf),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("clone", n), &arr, |b, arr| {
            b.iter(|| arr.clone())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate, bench_equals, bench_array);
criterion_main!(benches);
