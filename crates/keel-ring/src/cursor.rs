//! Detached buffer-relative positions.

use std::cmp::Ordering;

/// A position in a [`RingDeque`](crate::RingDeque)'s physical buffer.
///
/// A cursor stores a physical slot plus a flag recording whether the walk
/// from the front has wrapped past the end of the buffer. That pair is
/// enough to recover the logical position, so offsets, distances, and
/// ordering stay correct across the wrap boundary without consulting the
/// deque.
///
/// Cursors also carry the layout epoch of the deque they were taken from.
/// Any pop, growth, linearisation, clear, or assign moves the layout and
/// makes [`RingDeque::at_cursor`](crate::RingDeque::at_cursor) reject the
/// cursor. Use a [`PersistentId`](keel_core::PersistentId) for a position
/// that must survive those operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    slot: usize,
    wrapped: bool,
    begin: usize,
    capacity: usize,
    epoch: u64,
}

impl Cursor {
    pub(crate) fn new(begin: usize, capacity: usize, epoch: u64, position: usize) -> Self {
        let raw = begin + position;
        let (slot, wrapped) = if capacity > 0 && raw >= capacity {
            (raw - capacity, true)
        } else {
            (raw, false)
        };
        Self {
            slot,
            wrapped,
            begin,
            capacity,
            epoch,
        }
    }

    /// Physical buffer slot this cursor addresses.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Whether this cursor lies past the physical end of the buffer,
    /// counting from the front.
    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Layout epoch the cursor was taken in.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Logical position (distance from the front) at the time the cursor
    /// was taken.
    pub fn position(&self) -> usize {
        if self.wrapped {
            self.slot + self.capacity - self.begin
        } else {
            self.slot - self.begin
        }
    }

    /// The cursor `delta` positions away, or `None` if that would move
    /// before the front.
    pub fn offset(self, delta: isize) -> Option<Self> {
        let position = self.position().checked_add_signed(delta)?;
        Some(Self::new(self.begin, self.capacity, self.epoch, position))
    }

    /// Signed number of positions from `origin` to `self`.
    ///
    /// Only meaningful for cursors from the same deque and epoch.
    pub fn distance_from(self, origin: Cursor) -> isize {
        self.position() as isize - origin.position() as isize
    }

    fn same_layout(&self, other: &Self) -> bool {
        self.epoch == other.epoch && self.begin == other.begin && self.capacity == other.capacity
    }
}

impl PartialOrd for Cursor {
    /// Cursors from different layouts are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_layout(other)
            .then(|| self.position().cmp(&other.position()))
    }
}
