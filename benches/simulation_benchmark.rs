//! Benchmark for Frontera simulation performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use frontera::core::ReturnMatrix;
use frontera::simulation::{simulate, SimulationConfig, Xoshiro256StarStar};
use frontera::stats::compute_stats;

/// Generate a synthetic return matrix of `n_assets` columns.
fn generate_returns(n_assets: usize, periods: usize) -> ReturnMatrix {
    let columns: Vec<Vec<f64>> = (0..n_assets)
        .map(|asset| {
            let mut rng = Xoshiro256StarStar::new(asset as u64 + 1);
            (0..periods)
                .map(|_| 0.0005 + 0.015 * (rng.next_f64() - 0.5))
                .collect()
        })
        .collect();
    let tickers = (0..n_assets).map(|i| format!("A{i}")).collect();
    ReturnMatrix::new(tickers, columns).unwrap()
}

fn bench_compute_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_stats");

    for n_assets in [5, 20, 50].iter() {
        group.bench_with_input(BenchmarkId::new("assets", n_assets), n_assets, |b, &n| {
            let returns = generate_returns(n, 504);
            let weights = returns.equal_weights();

            b.iter(|| {
                let stats = compute_stats(black_box(&returns), black_box(&weights), 252);
                black_box(stats)
            });
        });
    }

    group.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    group.sample_size(10);

    for trials in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("trials", trials), trials, |b, &trials| {
            let returns = generate_returns(10, 504);
            let config = SimulationConfig { trials, periods_per_year: 252, seed: 42 };

            b.iter(|| {
                let result = simulate(black_box(&returns), black_box(&config));
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_stats, bench_simulate);
criterion_main!(benches);
