//! Criterion benchmarks for the TSP solvers.
//!
//! Uses synthetic ring instances (cities evenly spaced on a circle) to
//! measure solver throughput independent of instance structure.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_metaheur::ga::{GaConfig, GaRunner};
use tsp_metaheur::sa::{SaConfig, SaRunner};
use tsp_metaheur::tabu::{TabuConfig, TabuRunner};
use tsp_metaheur::DistanceMatrix;

// ===========================================================================
// Synthetic instance: n cities evenly spaced on the unit circle
// ===========================================================================

fn ring_matrix(n: usize) -> DistanceMatrix {
    let angle = |i: usize| 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let (ax, ay) = (angle(i).cos(), angle(i).sin());
                    let (bx, by) = (angle(j).cos(), angle(j).sin());
                    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
                })
                .collect()
        })
        .collect();
    DistanceMatrix::new(rows).expect("ring instance is square and finite")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_ring");
    group.sample_size(10);

    for &n in &[10, 25, 50] {
        let matrix = ring_matrix(n);
        let config = GaConfig::default()
            .with_population_size(50)
            .with_generations(20)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(m), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_sa_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_ring");
    group.sample_size(10);

    for &n in &[10, 25, 50] {
        let matrix = ring_matrix(n);
        let config = SaConfig::default().with_iterations(2000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let result = SaRunner::run(black_box(m), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_tabu_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_ring");
    group.sample_size(10);

    for &n in &[10, 25, 50] {
        let matrix = ring_matrix(n);
        let config = TabuConfig::default()
            .with_iterations(50)
            .with_tabu_size(20)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(m), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ga_ring, bench_sa_ring, bench_tabu_ring);
criterion_main!(benches);
