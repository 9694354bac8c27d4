//! Traversal and insertion benchmarks for MagicalContainer.
//!
//! Measures a full pass of each cursor kind and incremental sorted insertion
//! for several container sizes.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use magical_container::MagicalContainer;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Pre-generates an unsorted input so insertion cannot hit the append fast path.
fn generate_shuffled_vec(size: i32) -> Vec<i32> {
    (0..size).map(|value| (value * 7919) % size).collect()
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("magical_container_insert");

    for size in SIZES {
        let values = generate_shuffled_vec(size);
        group.bench_with_input(BenchmarkId::new("insert", size), &size, |bencher, _| {
            bencher.iter_batched(
                || values.clone(),
                |values| {
                    let mut container = MagicalContainer::new();
                    for value in values {
                        container.insert(black_box(value));
                    }
                    black_box(container)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_traversals(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("magical_container_traversal");

    for size in SIZES {
        let container: MagicalContainer = generate_shuffled_vec(size).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("ascending", size), &container, |bencher, container| {
            bencher.iter(|| black_box(container.iterate_ascending().sum::<i32>()));
        });
        group.bench_with_input(BenchmarkId::new("side_cross", size), &container, |bencher, container| {
            bencher.iter(|| black_box(container.iterate_side_cross().sum::<i32>()));
        });
        group.bench_with_input(BenchmarkId::new("primes", size), &container, |bencher, container| {
            bencher.iter(|| black_box(container.iterate_primes().count()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_traversals);
criterion_main!(benches);
