//! Criterion benchmarks for pricer_core solvers and statistics.
//!
//! Measures plain and bracketed Newton iteration on a smooth root problem,
//! and the trailing-window statistics across history lengths to
//! characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
use pricer_core::math::statistics::{historical_volatility, standard_deviation};

/// Generate a deterministic, strictly positive price path.
fn generate_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 * (1.0 + 0.02 * (i as f64 * 0.7).sin()))
        .collect()
}

/// Benchmark Newton iteration with and without a bracket.
fn bench_newton(c: &mut Criterion) {
    let mut group = c.benchmark_group("newton_raphson");
    let solver = NewtonRaphsonSolver::new(SolverConfig::default());

    // Root of x³ - 2x - 5 near 2.0946
    let f = |x: f64| x * x * x - 2.0 * x - 5.0;
    let f_prime = |x: f64| 3.0 * x * x - 2.0;

    group.bench_function("iterate", |b| {
        b.iter(|| solver.iterate(f, f_prime, black_box(3.0)).unwrap());
    });

    group.bench_function("iterate_bracketed", |b| {
        b.iter(|| {
            solver
                .iterate_bracketed(f, f_prime, black_box(3.0), 0.0, 5.0)
                .unwrap()
        });
    });

    group.finish();
}

/// Benchmark window statistics over growing histories.
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [30, 252, 2520] {
        let prices = generate_prices(size + 1);

        group.bench_with_input(
            BenchmarkId::new("standard_deviation", size),
            &prices,
            |b, prices| {
                b.iter(|| standard_deviation(black_box(size), prices).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("historical_volatility", size),
            &prices,
            |b, prices| {
                b.iter(|| historical_volatility(black_box(size), prices, 252).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_newton, bench_statistics);
criterion_main!(benches);
