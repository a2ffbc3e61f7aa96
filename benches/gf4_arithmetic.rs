//! Benchmarks for GF(4) and series arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gf4codes::{Gf4, Series};

fn bench_gf4_multiplication(c: &mut Criterion) {
    c.bench_function("GF(4) multiply chain", |b| {
        b.iter(|| {
            let mut result = Gf4::ONE;
            for _ in 0..100 {
                result = result * black_box(Gf4::U);
            }
            result
        });
    });
}

fn bench_series_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("Series Multiplication");

    for len in [4usize, 16, 64, 256] {
        let coeffs: Vec<Gf4> = (0..len).map(|i| Gf4::elements().nth(i % 4).unwrap_or_default()).collect();
        let a = Series::new(coeffs.clone()).unwrap();
        let b = Series::new(coeffs.into_iter().rev().collect()).unwrap();

        group.bench_with_input(BenchmarkId::new("len", len), &(a, b), |bench, (a, b)| {
            bench.iter(|| a * b);
        });
    }

    group.finish();
}

fn bench_dual_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dual Product");

    for text in ["1u", "1uv1", "1uv10vu1"] {
        let s: Series = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("series", text), &s, |b, s| {
            b.iter(|| s.dual_product(s));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gf4_multiplication,
    bench_series_multiplication,
    bench_dual_product
);
criterion_main!(benches);
