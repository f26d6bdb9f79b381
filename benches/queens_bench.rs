//! Criterion benchmarks for the N-Queens variants.
//!
//! Measures full runs of each variant and the raw cost of fitness
//! evaluation across board sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nqueens_ga::ga::{BatchEvaluator, Encoding, EvolutionConfig, SerialEvaluator};
use nqueens_ga::queens::{run_variant, PermutationEncoding, Variant};
use nqueens_ga::random::create_rng;

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants");
    group.sample_size(10);

    for variant in Variant::ALL {
        for (n, pop, gen) in [(8usize, 100usize, 50usize), (32, 200, 30)] {
            let config = EvolutionConfig::new(n)
                .with_population_size(pop)
                .with_generations(gen)
                .with_seed(1);
            group.bench_with_input(
                BenchmarkId::new(variant.to_string(), format!("n{}_p{}_g{}", n, pop, gen)),
                &config,
                |b, config| {
                    b.iter(|| {
                        let outcome = run_variant(variant, black_box(config.clone()), SerialEvaluator);
                        black_box(outcome)
                    })
                },
            );
        }
    }
    group.finish();
}

// ===========================================================================
// Batch evaluation
// ===========================================================================

fn bench_batch_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_evaluation");
    group.sample_size(20);

    for &n in &[16usize, 64, 128] {
        let encoding = PermutationEncoding::new(n);
        let mut rng = create_rng(42);
        let genomes: Vec<_> = (0..400).map(|_| encoding.create_random(&mut rng)).collect();

        group.bench_with_input(BenchmarkId::new("serial", n), &genomes, |b, genomes| {
            b.iter(|| {
                let mut batch = genomes.clone();
                black_box(SerialEvaluator.evaluate_batch(&encoding, &mut batch))
            })
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", n), &genomes, |b, genomes| {
            b.iter(|| {
                let mut batch = genomes.clone();
                black_box(nqueens_ga::ga::ParallelEvaluator.evaluate_batch(&encoding, &mut batch))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_variants, bench_batch_evaluation);
criterion_main!(benches);
