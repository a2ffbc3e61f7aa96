//! Benchmarks for free distance and complement construction.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gf4codes::construct::{BruteForce, Complement, LinearSolve};
use gf4codes::{Code, SelfOrthogonalSearch};

fn bench_min_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("Free Distance");

    for text in ["11|1u", "1u1|11v", "1uv1|1vu1", "11|1u|1v", "1u|0|11||0|1v|u"] {
        let code: Code = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("code", text), &code, |b, code| {
            b.iter(|| code.min_distance().unwrap());
        });
    }

    group.finish();
}

fn bench_complement(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complement");
    let code: Code = "11|1u|1v".parse().unwrap();

    group.bench_function("LinearSolve", |b| {
        b.iter(|| LinearSolve.complement(&code).unwrap());
    });
    group.bench_function("BruteForce", |b| {
        b.iter(|| BruteForce.complement(&code).unwrap());
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Self-Orthogonal Search");

    for (n, degree) in [(2usize, 2usize), (3, 1), (3, 2)] {
        group.bench_with_input(
            BenchmarkId::new("n_degree", format!("{n}_{degree}")),
            &(n, degree),
            |b, &(n, degree)| {
                b.iter(|| SelfOrthogonalSearch::new(n, degree, 1).unwrap().find().unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_min_distance, bench_complement, bench_search);
criterion_main!(benches);
