//! Criterion benchmarks for u-mopso.
//!
//! Measures UF1 evaluation and the O(n²) domination ranking pass on
//! seeded random populations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_mopso::objective::{CorrectionForm, ObjectiveFunction, Uf1};
use u_mopso::particle::{check_domination, rank_population};
use u_mopso::population::{initialize_population, PopulationConfig};

// ===========================================================================
// UF1 evaluation
// ===========================================================================

fn bench_uf1(c: &mut Criterion) {
    let mut group = c.benchmark_group("uf1_evaluate");

    for dim in [2, 10, 30, 100] {
        let x: Vec<f64> = (0..dim).map(|j| (j as f64 + 0.5) / dim as f64).collect();
        for form in [CorrectionForm::SumOfSquares, CorrectionForm::SquareOfSum] {
            let uf1 = Uf1::new().with_correction(form);
            group.bench_with_input(BenchmarkId::new(form.as_str(), dim), &x, |b, x| {
                b.iter(|| uf1.evaluate(black_box(x), dim))
            });
        }
    }
    group.finish();
}

// ===========================================================================
// Domination ranking
// ===========================================================================

fn bench_check_domination(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_domination");
    group.sample_size(20);

    for size in [50, 200, 1000] {
        let config = PopulationConfig::default()
            .with_size(size)
            .with_uniform_bounds(30, 0.0, 1.0)
            .with_seed(42);
        let particles =
            initialize_population(&config, &Uf1::new()).expect("valid benchmark population");

        group.bench_with_input(BenchmarkId::new("in_place", size), &particles, |b, ps| {
            b.iter_batched(
                || ps.clone(),
                |mut ps| check_domination(&mut ps),
                criterion::BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("out_of_band", size), &particles, |b, ps| {
            b.iter(|| rank_population(black_box(ps)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_uf1, bench_check_domination);
criterion_main!(benches);
