//! Integration test: persistent ID stability across growth and rotation.
//!
//! Runs a seeded producer/consumer workload over a single deque and checks
//! that every ID handed out by `push_back` resolves to its value for as long
//! as the value is live, whatever the buffer does underneath.

use std::collections::VecDeque;

use keel_core::{ErrorKind, PersistentId};
use keel_ring::{RingConfig, RingDeque};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn push_three_into_capacity_two_then_pop() {
    let mut d = RingDeque::with_capacity(2);
    d.push_back(1);
    d.push_back(2);
    let id3 = d.push_back(3);
    d.pop_front();
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(d.len(), 2);
    assert_eq!(d.get_by_id(id3), Ok(&3));
}

#[test]
fn seeded_workload_keeps_ids_resolving() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut d = RingDeque::with_config(RingConfig::new(3)).unwrap();
    let mut live: VecDeque<(PersistentId, u64)> = VecDeque::new();
    let mut retired: Vec<PersistentId> = Vec::new();
    let mut growths = 0;

    for value in 0..5_000u64 {
        let capacity = d.capacity();
        match rng.next_u64() % 10 {
            0..=5 => live.push_back((d.push_back(value), value)),
            6..=8 => {
                if let Some((id, expected)) = live.pop_front() {
                    assert_eq!(d.pop_front(), Some(expected));
                    retired.push(id);
                }
            }
            _ => d.shrink_to_fit(),
        }
        if d.capacity() > capacity {
            growths += 1;
        }
    }

    assert!(growths > 0, "workload should force at least one growth");
    for &(id, expected) in &live {
        assert_eq!(d.get_by_id(id), Ok(&expected));
    }
    for &id in &retired {
        let err = d.get_by_id(id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    }
}

#[test]
fn ids_are_never_reused_across_resets() {
    let mut d = RingDeque::new();
    let mut seen = Vec::new();
    for round in 0..5 {
        for i in 0..4 {
            seen.push(d.push_back(round * 10 + i));
        }
        d.pop_front();
        match round % 3 {
            0 => d.clear(),
            1 => d.assign([0, 1]),
            _ => d.clone_from(&RingDeque::from([7])),
        }
    }
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn cursor_invalidated_by_growth_is_reported() {
    let mut d = RingDeque::with_capacity(2);
    d.push_back('a');
    d.push_back('b');
    let cursor = d.cursor_at(1).unwrap();
    let id = d.id_at(1).unwrap();
    d.push_back('c');
    assert_eq!(d.at_cursor(cursor).unwrap_err().kind(), ErrorKind::InvariantViolation);
    assert_eq!(d.get_by_id(id), Ok(&'b'));
}

#[test]
fn cursor_invalidated_by_layout_changes_is_reported() {
    let layout_changes: [(&str, fn(&mut RingDeque<char>)); 5] = [
        ("reserve", |d| d.reserve(10)),
        ("shrink_to_fit", |d| d.shrink_to_fit()),
        ("linearize", |d| d.linearize()),
        ("clear", |d| d.clear()),
        ("assign", |d| d.assign(['x', 'y', 'z'])),
    ];
    for (name, change) in layout_changes {
        // Capacity 4 with one spare slot and the content starting at slot 1.
        let mut d = RingDeque::with_capacity(4);
        d.push_back('_');
        d.push_back('a');
        d.push_back('b');
        d.pop_front();
        let cursor = d.cursor_at(1).unwrap();
        assert_eq!(d.at_cursor(cursor), Ok(&'b'), "{name}");

        change(&mut d);
        let err = d.at_cursor(cursor).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation, "{name}");
        assert!(d.at_cursor_mut(cursor).is_err(), "{name}");
    }
}
