//! Criterion micro-benchmarks for ring deque operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use keel_bench::{apply_ring_ops, ring_churn};
use keel_ring::RingDeque;

/// Benchmark: Steady-state FIFO at a fixed capacity (no growth).
fn bench_fifo_steady_state(c: &mut Criterion) {
    let mut deque = RingDeque::with_capacity(1_024);
    for i in 0..512u64 {
        deque.push_back(i);
    }

    c.bench_function("fifo_steady_state", |b| {
        b.iter(|| {
            let value = deque.pop_front().unwrap_or_default();
            deque.push_back(black_box(value));
        });
    });
}

/// Benchmark: Push 10K values into an empty deque, including every growth.
fn bench_push_from_empty_10k(c: &mut Criterion) {
    c.bench_function("push_from_empty_10k", |b| {
        b.iter(|| {
            let mut deque = RingDeque::new();
            for i in 0..10_000u64 {
                deque.push_back(i);
            }
            black_box(deque.len());
        });
    });
}

/// Benchmark: Replay a 60/40 push/pop mix of 10K operations.
fn bench_churn_10k(c: &mut Criterion) {
    let ops = ring_churn(42, 10_000, 60);

    c.bench_function("ring_churn_10k", |b| {
        b.iter(|| {
            let mut deque = RingDeque::new();
            black_box(apply_ring_ops(&mut deque, &ops));
        });
    });
}

/// Benchmark: Resolve 1K persistent IDs in a wrapped deque.
fn bench_get_by_id_1k(c: &mut Criterion) {
    let mut deque = RingDeque::with_capacity(2_048);
    for i in 0..2_048u64 {
        deque.push_back(i);
    }
    for _ in 0..1_024 {
        deque.pop_front();
    }
    let ids: Vec<_> = (0..1_024u64).map(|i| deque.push_back(i)).collect();

    c.bench_function("get_by_id_1k", |b| {
        b.iter(|| {
            let sum: u64 = ids.iter().filter_map(|&id| deque.get_by_id(id).ok()).sum();
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_fifo_steady_state,
    bench_push_from_empty_10k,
    bench_churn_10k,
    bench_get_by_id_1k
);
criterion_main!(benches);
