//! Criterion micro-benchmarks for slot table operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use keel_bench::{apply_slot_ops, slot_churn};
use keel_slot::SlotTable;

/// Benchmark: Replay 10K occupy/release operations over 1K indices.
fn bench_slot_churn_10k(c: &mut Criterion) {
    let ops = slot_churn(42, 10_000, 1_000);

    c.bench_function("slot_churn_10k", |b| {
        b.iter(|| {
            let mut table = SlotTable::with_capacity(1_000);
            black_box(apply_slot_ops(&mut table, &ops));
        });
    });
}

/// Benchmark: Linear free-slot search in a 10K table with one hole near the end.
fn bench_find_free_index_10k(c: &mut Criterion) {
    let mut table: SlotTable<u64> = (0..10_000).map(|i| (i, i as u64)).collect();
    table.release(9_000);

    c.bench_function("find_free_index_10k", |b| {
        b.iter(|| black_box(table.find_free_index()));
    });
}

/// Benchmark: Iterate a half-occupied 10K table.
fn bench_iter_half_occupied_10k(c: &mut Criterion) {
    let table: SlotTable<u64> = (0..10_000).step_by(2).map(|i| (i, i as u64)).collect();

    c.bench_function("iter_half_occupied_10k", |b| {
        b.iter(|| {
            let sum: u64 = table.iter().map(|(_, &v)| v).sum();
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_slot_churn_10k,
    bench_find_free_index_10k,
    bench_iter_half_occupied_10k
);
criterion_main!(benches);
