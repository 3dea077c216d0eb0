//! Criterion benchmarks for pricer_models.
//!
//! Measures full model construction (which includes the implied-volatility
//! solve) under both formula conventions, and the standalone solver across
//! moneyness.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{FormulaConvention, ImpliedVolSolver, PricingConfig, PricingModel};
use pricer_models::instruments::{MarketContext, OptionType, Underlying, VanillaOption};

/// Reference inputs: K=50, S=45, r=10%, σ=30%, 60 days.
fn reference_inputs(option_type: OptionType) -> (VanillaOption, Underlying, MarketContext) {
    (
        VanillaOption::new(50.0, 60.0, option_type).unwrap(),
        Underlying::new("XYZ", 45.0, 0.30).unwrap(),
        MarketContext::new(0.10).unwrap(),
    )
}

/// Benchmark model construction per convention.
fn bench_model_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing_model");

    for convention in [FormulaConvention::Textbook, FormulaConvention::Legacy] {
        let config = PricingConfig::default().with_convention(convention);
        let (option, underlying, market) = reference_inputs(OptionType::Call);

        group.bench_with_input(
            BenchmarkId::new("construct_call", convention),
            &config,
            |b, config| {
                b.iter(|| {
                    PricingModel::with_config(
                        black_box(option),
                        black_box(underlying.clone()),
                        black_box(market),
                        config,
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the standalone solver from deep OTM to deep ITM.
fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");
    let solver = ImpliedVolSolver::new(PricingConfig::default()).unwrap();
    let market = MarketContext::new(0.03).unwrap();

    for spot in [70.0, 90.0, 100.0, 110.0, 130.0] {
        let option = VanillaOption::new(100.0, 180.0, OptionType::Call).unwrap();
        let underlying = Underlying::new("XYZ", spot, 0.25).unwrap();
        let target = PricingModel::new(option, underlying.clone(), market)
            .unwrap()
            .theoretical_price();

        group.bench_with_input(BenchmarkId::new("solve", spot), &target, |b, &target| {
            b.iter(|| {
                solver
                    .solve(black_box(target), &option, &underlying, &market)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_model_construction, bench_implied_vol);
criterion_main!(benches);
