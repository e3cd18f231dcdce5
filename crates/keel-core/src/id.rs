//! Strongly-typed element identifiers.

use std::fmt;
use std::ops::{Add, Sub};

/// Logical sequence number of an element inserted into a ring deque.
///
/// IDs are assigned once per inserted element, in insertion order, and are
/// never reused by the same deque: clearing or reassigning the deque moves
/// the ID window past every ID it has already handed out. Arithmetic and
/// ordering operate purely on the number, so an ID stays meaningful across
/// buffer growth and rotation. Whether it still names a live element is
/// decided by the deque it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersistentId(pub u64);

impl PersistentId {
    /// The ID `delta` positions after (or before, if negative) this one.
    pub fn offset(self, delta: i64) -> Self {
        Self(self.0.wrapping_add_signed(delta))
    }

    /// Signed number of positions from `origin` to `self`.
    pub fn distance_from(self, origin: PersistentId) -> i64 {
        self.0.wrapping_sub(origin.0) as i64
    }

    /// The ID immediately after this one.
    pub fn next(self) -> Self {
        self.offset(1)
    }

    /// The ID immediately before this one.
    pub fn prev(self) -> Self {
        self.offset(-1)
    }
}

impl fmt::Display for PersistentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for PersistentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl Add<i64> for PersistentId {
    type Output = PersistentId;

    fn add(self, rhs: i64) -> PersistentId {
        self.offset(rhs)
    }
}

impl Sub<i64> for PersistentId {
    type Output = PersistentId;

    fn sub(self, rhs: i64) -> PersistentId {
        self.offset(rhs.wrapping_neg())
    }
}

impl Sub for PersistentId {
    type Output = i64;

    fn sub(self, rhs: PersistentId) -> i64 {
        self.distance_from(rhs)
    }
}
