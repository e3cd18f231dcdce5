//! Benchmark workloads for the Keel containers.
//!
//! Provides seeded operation streams so every benchmark run (and every
//! example) replays the same sequence:
//!
//! - [`slot_churn`]: occupy/release mix over a bounded index range
//! - [`ring_churn`]: push/pop mix with a configurable push bias
//! - [`apply_slot_ops`] / [`apply_ring_ops`]: replay a stream, returning a
//!   checksum so the optimiser cannot discard the work

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use keel_ring::RingDeque;
use keel_slot::SlotTable;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a slot table workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotOp {
    /// Occupy the index and write a value.
    Occupy(usize),
    /// Release the index (may already be free).
    Release(usize),
}

/// One step of a ring deque workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingOp {
    /// Push the value at the back.
    Push(u64),
    /// Pop the front (may be empty).
    Pop,
}

/// Build `len` slot operations over indices `0..max_index`.
///
/// Roughly two occupies per release, so the table fills towards
/// `max_index` and then churns.
pub fn slot_churn(seed: u64, len: usize, max_index: usize) -> Vec<SlotOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bound = max_index.max(1) as u64;
    (0..len)
        .map(|_| {
            let index = (rng.next_u64() % bound) as usize;
            if rng.next_u64() % 3 == 0 {
                SlotOp::Release(index)
            } else {
                SlotOp::Occupy(index)
            }
        })
        .collect()
}

/// Build `len` ring operations; `push_percent` of them are pushes.
pub fn ring_churn(seed: u64, len: usize, push_percent: u64) -> Vec<RingOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let roll = rng.next_u64();
            if roll % 100 < push_percent {
                RingOp::Push(roll)
            } else {
                RingOp::Pop
            }
        })
        .collect()
}

/// Replay slot operations, returning a checksum of the values touched.
pub fn apply_slot_ops(table: &mut SlotTable<u64>, ops: &[SlotOp]) -> u64 {
    let mut sum = 0u64;
    for (step, op) in ops.iter().enumerate() {
        match *op {
            SlotOp::Occupy(index) => *table.get_or_occupy(index) = step as u64,
            SlotOp::Release(index) => {
                if let Some(value) = table.release(index) {
                    sum = sum.wrapping_add(value);
                }
            }
        }
    }
    sum.wrapping_add(table.occupied_count() as u64)
}

/// Replay ring operations, returning a checksum of the values popped.
pub fn apply_ring_ops(deque: &mut RingDeque<u64>, ops: &[RingOp]) -> u64 {
    let mut sum = 0u64;
    for op in ops {
        match *op {
            RingOp::Push(value) => {
                deque.push_back(value);
            }
            RingOp::Pop => {
                if let Some(value) = deque.pop_front() {
                    sum = sum.wrapping_add(value);
                }
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workloads_are_deterministic() {
        assert_eq!(slot_churn(7, 100, 32), slot_churn(7, 100, 32));
        assert_eq!(ring_churn(7, 100, 60), ring_churn(7, 100, 60));
        assert_ne!(ring_churn(7, 100, 60), ring_churn(8, 100, 60));
    }

    #[test]
    fn slot_indices_respect_bound() {
        let ops = slot_churn(1, 500, 16);
        assert!(ops.iter().all(|op| match *op {
            SlotOp::Occupy(i) | SlotOp::Release(i) => i < 16,
        }));
        let mut table = SlotTable::new();
        apply_slot_ops(&mut table, &ops);
        assert!(table.slot_extent() <= 16);
    }

    #[test]
    fn all_push_workload_fills_deque() {
        let ops = ring_churn(3, 64, 100);
        let mut deque = RingDeque::new();
        assert_eq!(apply_ring_ops(&mut deque, &ops), 0);
        assert_eq!(deque.len(), 64);
    }
}
