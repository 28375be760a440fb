use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortbench::harness::generate_array;
use sortbench::prelude::*;
use std::hint::black_box;

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Integers");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(42);

    for size in [10, 1_000, 10_000] {
        let input = generate_array(&mut rng, size).unwrap();

        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &input, |b, input| {
                b.iter(|| algorithm.sort(black_box(input)))
            });
        }

        // Std Sort Unstable
        group.bench_with_input(
            BenchmarkId::new("slice::sort_unstable", size),
            &input,
            |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| data.sort_unstable(),
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("Presorted Integers");
    group.sample_size(10);

    // Lomuto with a last-element pivot degrades to quadratic here.
    let input: Vec<i32> = (0..2_000).collect();

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.sort(black_box(&input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random, bench_sorted);
criterion_main!(benches);
