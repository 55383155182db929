//! PqHeap benchmark.
//!
//! Compares push/pop throughput against `std::collections::BinaryHeap`.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use corral::prelude::*;
use std::collections::BinaryHeap;
use std::hint::black_box;

const SIZES: [u64; 3] = [100, 1000, 10000];

fn scrambled(size: u64) -> Vec<u64> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pq_heap_insert");

    for size in SIZES {
        let values = scrambled(size);
        group.bench_with_input(BenchmarkId::new("pq_heap", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut queue = PqHeap::new();
                for value in values {
                    queue.insert(black_box(*value));
                }
                black_box(queue)
            });
        });
        group.bench_with_input(
            BenchmarkId::new("binary_heap", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut heap = BinaryHeap::new();
                    for value in values {
                        heap.push(black_box(*value));
                    }
                    black_box(heap)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_drain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pq_heap_drain");

    for size in SIZES {
        let base: PqHeap<u64> = scrambled(size).into_iter().collect();
        group.bench_with_input(BenchmarkId::new("tip_n_remove", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base.clone(),
                |mut queue| {
                    while let Ok(tip) = queue.tip_n_remove() {
                        black_box(tip);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_drain);

criterion_main!(benches);
