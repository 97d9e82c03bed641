use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use stratum::*;

const POPULATION_SIZE: usize = 100_000;

/// 1. SIMPLE RANDOM (reservoir path for small n, shuffle path for large n)
fn bench_simple_random(c: &mut Criterion) {
    let population: Population<u32> = (0..POPULATION_SIZE as u32).collect();
    let mut group = c.benchmark_group("simple_random");

    for &n in &[100, 10_000, 50_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = seeded_rng(0);
            b.iter(|| black_box(simple_random_sample(black_box(&population), n, &mut rng)))
        });
    }
    group.finish();
}

/// 2. SYSTEMATIC
fn bench_systematic(c: &mut Criterion) {
    let population: Population<u32> = (0..POPULATION_SIZE as u32).collect();
    let mut rng = seeded_rng(0);

    c.bench_function("systematic/1000", |b| {
        b.iter(|| black_box(systematic_sample(black_box(&population), 1_000, &mut rng)))
    });
}

/// 3. STRATIFIED (proportional over ten strata)
fn bench_stratified(c: &mut Criterion) {
    let population: Population<u32> = (0..POPULATION_SIZE as u32).collect();
    let strata = population.strata_equal(10).unwrap();
    let allocation = Allocation::Proportional { total: 1_000 };
    let mut rng = seeded_rng(0);

    c.bench_function("stratified/proportional_1000", |b| {
        b.iter(|| black_box(stratified_sample(black_box(&strata), &allocation, &mut rng)))
    });
}

/// 4. ESTIMATOR STUDY
fn bench_study(c: &mut Criterion) {
    let population = Population::uniform(1_000, 1, 100, &mut seeded_rng(0)).unwrap();
    let study = EstimatorStudy::new(1_000, 0);

    c.bench_function("study/1000_replications", |b| {
        b.iter(|| black_box(study.run(black_box(&population), 10)))
    });
}

criterion_group!(
    benches,
    bench_simple_random,
    bench_systematic,
    bench_stratified,
    bench_study
);
criterion_main!(benches);
