//! Integration test: a slot table of ring deques.
//!
//! Models a set of per-channel FIFOs addressed by slot index, with message
//! handles kept as persistent IDs while channels open, close, and churn.

use keel::prelude::*;

#[derive(Debug, Default)]
struct Channel {
    name: String,
    inbox: RingDeque<u32>,
}

fn open(table: &mut SlotTable<Channel>, name: &str) -> usize {
    let index = table.find_free_index();
    let channel = table.get_or_occupy(index);
    channel.name = name.to_string();
    index
}

#[test]
fn channel_handles_survive_neighbour_churn() {
    let mut table = SlotTable::new();
    let a = open(&mut table, "a");
    let b = open(&mut table, "b");
    let c = open(&mut table, "c");
    assert_eq!((a, b, c), (0, 1, 2));

    let mut handles = Vec::new();
    for i in 0..20 {
        handles.push(table[b].inbox.push_back(i));
        table.get_or_occupy(a).inbox.push_back(100 + i);
        table.get_or_occupy(b).inbox.push_back(200 + i);
    }
    // Closing and reopening a neighbour reuses its index without moving b.
    table.release(a);
    let reopened = open(&mut table, "a2");
    assert_eq!(reopened, a);
    assert!(table[reopened].inbox.is_empty());

    let inbox = &mut table.get_mut(b).unwrap().inbox;
    for _ in 0..10 {
        inbox.pop_front();
    }
    // Handles for popped messages expire; the rest still resolve.
    let expired = handles.iter().filter(|&&id| !inbox.is_live(id)).count();
    assert_eq!(expired, 5);
    for &id in handles.iter().filter(|&&id| inbox.is_live(id)) {
        let value = *inbox.get_by_id(id).unwrap();
        assert!(value < 20);
    }
}

#[test]
fn releasing_last_channel_trims_table() {
    let mut table: SlotTable<Channel> = SlotTable::new();
    let _ = table.get_or_occupy(5);
    assert_eq!(table.slot_extent(), 6);
    assert!(table.release(5).is_some());
    assert_eq!(table.slot_extent(), 0);
    assert_eq!(table.occupied_count(), 0);
}

#[test]
fn errors_share_one_taxonomy() {
    let table: SlotTable<Channel> = SlotTable::new();
    let deque: RingDeque<u8> = RingDeque::new();
    let denied = table.get(0).unwrap_err();
    let out_of_range = deque.at(0).unwrap_err();
    let expired = deque.get_by_id(PersistentId(0)).unwrap_err();
    assert_eq!(denied.kind(), ErrorKind::AccessDenied);
    assert_eq!(out_of_range.kind(), ErrorKind::OutOfRange);
    assert_eq!(expired.kind(), ErrorKind::InvariantViolation);
}
