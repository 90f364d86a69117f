//! Criterion benchmarks for u-moea.
//!
//! Uses ZDT1 to measure Pareto machinery and full algorithm runs
//! independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_moea::algorithm::Algorithm;
use u_moea::model::{Population, Problem, Solution};
use u_moea::nsga2::{Nsga2, Nsga2Config};
use u_moea::pareto::{crowding_distance, rank_fronts, ParetoDominance};
use u_moea::random::create_rng;
use u_moea::spea2::{assign_fitness, truncate_archive, Spea2, Spea2Config};

// ===========================================================================
// ZDT1: f1 = x1, f2 = g * (1 - sqrt(x1 / g))
// ===========================================================================

struct Zdt1 {
    n: usize,
}

impl Problem for Zdt1 {
    fn number_of_variables(&self) -> usize {
        self.n
    }
    fn number_of_objectives(&self) -> usize {
        2
    }
    fn lower_bound(&self, _index: usize) -> f64 {
        0.0
    }
    fn upper_bound(&self, _index: usize) -> f64 {
        1.0
    }
    fn evaluate(&self, solution: &Solution) -> Vec<f64> {
        let x: Vec<f64> = solution.variables().iter().map(|v| v.value()).collect();
        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (self.n - 1) as f64;
        vec![x[0], g * (1.0 - (x[0] / g).sqrt())]
    }
}

/// Random objective vectors in the unit square.
fn random_population(n: usize, m: usize) -> Population {
    let mut rng = create_rng(42);
    (0..n)
        .map(|_| Solution::from_objectives((0..m).map(|_| rng.random::<f64>()).collect()))
        .collect()
}

// ===========================================================================
// Pareto machinery
// ===========================================================================

fn bench_rank_fronts(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_fronts");

    for n in [100usize, 200, 400] {
        let population = random_population(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &population, |b, p| {
            b.iter(|| black_box(rank_fronts(p.clone(), &ParetoDominance)))
        });
    }
    group.finish();
}

fn bench_crowding(c: &mut Criterion) {
    let mut group = c.benchmark_group("crowding_distance");

    for n in [100usize, 1000] {
        let objectives = random_population(n, 3).objectives();
        group.bench_with_input(BenchmarkId::from_parameter(n), &objectives, |b, o| {
            b.iter(|| black_box(crowding_distance(o)))
        });
    }
    group.finish();
}

fn bench_spea2_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("spea2_fitness");
    group.sample_size(20);

    for n in [100usize, 200] {
        let population = random_population(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &population, |b, p| {
            b.iter(|| {
                let mut union = p.clone();
                assign_fitness(&mut union, 14);
                truncate_archive(&mut union, n / 2);
                black_box(union)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_nsga2_zdt1(c: &mut Criterion) {
    let mut group = c.benchmark_group("nsga2_zdt1");
    group.sample_size(10);

    for (pop, gen) in [(50usize, 50usize), (100, 50)] {
        let problem = Zdt1 { n: 30 };
        let config = Nsga2Config::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_parallel(false)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut nsga2 = Nsga2::real_coded(black_box(p), c.clone()).unwrap();
                    black_box(nsga2.execute().unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_spea2_zdt1(c: &mut Criterion) {
    let mut group = c.benchmark_group("spea2_zdt1");
    group.sample_size(10);

    for (pop, archive, gen) in [(50usize, 50usize, 50usize), (100, 100, 50)] {
        let problem = Zdt1 { n: 30 };
        let config = Spea2Config::default()
            .with_population_size(pop)
            .with_archive_size(archive)
            .with_max_generations(gen)
            .with_parallel(false)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_a{}_g{}", pop, archive, gen), pop),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut spea2 = Spea2::real_coded(black_box(p), c.clone()).unwrap();
                    black_box(spea2.execute().unwrap())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rank_fronts,
    bench_crowding,
    bench_spea2_fitness,
    bench_nsga2_zdt1,
    bench_spea2_zdt1
);
criterion_main!(benches);
