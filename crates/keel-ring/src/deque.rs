//! The [`RingDeque`] container.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Index, IndexMut};

use keel_core::{AccessError, PersistentId};
use tracing::{debug, trace};

use crate::config::{ConfigError, RingConfig};
use crate::cursor::Cursor;
use crate::iter::{IntoIter, Iter, IterMut, PersistentIter};

/// A double-ended queue over a growable circular buffer.
///
/// Elements are pushed at the logical back and popped from the logical
/// front. Each pushed element gets the next [`PersistentId`]; the ID of the
/// front element is the deque's ID offset. IDs are never reused, even across
/// [`clear`](Self::clear) and [`assign`](Self::assign).
///
/// The physical capacity is the length of the backing buffer. Live slots
/// hold `Some`, every other slot holds `None`, so no placeholder values or
/// `unsafe` initialisation are needed.
pub struct RingDeque<T> {
    buf: Vec<Option<T>>,
    /// Physical slot of the logical front.
    begin: usize,
    len: usize,
    /// Persistent ID of the logical front.
    id_offset: u64,
    /// Bumped whenever elements move between physical slots or the front
    /// slot changes.
    epoch: u64,
    config: RingConfig,
}

impl<T> RingDeque<T> {
    /// Create an empty deque with the default [`RingConfig`].
    pub fn new() -> Self {
        Self::from_parts(RingConfig::default())
    }

    /// Create an empty deque with `capacity` physical slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(RingConfig::new(capacity))
    }

    /// Create an empty deque from a validated config.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`RingConfig::validate`].
    pub fn with_config(config: RingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: RingConfig) -> Self {
        Self {
            buf: iter::repeat_with(|| None)
                .take(config.initial_capacity)
                .collect(),
            begin: 0,
            len: 0,
            id_offset: 0,
            epoch: 0,
            config,
        }
    }

    // ── Size and capacity ──────────────────────────────────────────

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deque has no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of physical slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Physical slot of the logical front.
    pub fn begin_offset(&self) -> usize {
        self.begin
    }

    /// Persistent ID number of the logical front (the next ID to expire).
    pub fn id_offset(&self) -> u64 {
        self.id_offset
    }

    /// Current layout epoch; see [`Cursor`].
    pub fn layout_epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the live range runs past the physical end of the buffer.
    pub fn is_wrapping(&self) -> bool {
        self.begin + self.len > self.buf.len()
    }

    /// The sizing policy this deque grows by.
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Grow the buffer to at least `capacity` physical slots.
    ///
    /// Unlike `Vec::reserve` the argument is the total capacity, not the
    /// additional amount. Content is linearised before the buffer is
    /// extended. Persistent IDs stay valid; cursors do not.
    pub fn reserve(&mut self, capacity: usize) {
        let current = self.buf.len();
        if current >= capacity {
            return;
        }
        self.linearize();
        self.buf.resize_with(capacity, || None);
        self.epoch += 1;
        debug!(from = current, to = capacity, "ring deque reserved");
    }

    /// Drop every unused physical slot.
    ///
    /// Content is linearised first, so the result holds the live range in
    /// slots `0..len`. Persistent IDs stay valid; cursors do not.
    pub fn shrink_to_fit(&mut self) {
        let current = self.buf.len();
        self.linearize();
        self.buf.truncate(self.len);
        self.buf.shrink_to_fit();
        if current != self.len {
            self.epoch += 1;
            debug!(from = current, to = self.len, "ring deque shrunk");
        }
    }

    /// Rotate the buffer so the logical front sits at physical slot 0.
    pub fn linearize(&mut self) {
        if self.begin == 0 {
            return;
        }
        self.buf.rotate_left(self.begin);
        self.begin = 0;
        self.epoch += 1;
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Append `value` at the logical back and return its persistent ID.
    ///
    /// A full buffer is linearised and grown per the deque's
    /// [`RingConfig`]; otherwise the value is written into the next free
    /// slot in place.
    pub fn push_back(&mut self, value: T) -> PersistentId {
        if self.len == self.buf.len() {
            self.grow(self.len + 1);
        }
        let slot = self.physical(self.len);
        self.buf[slot] = Some(value);
        let id = PersistentId(self.id_offset + self.len as u64);
        self.len += 1;
        id
    }

    /// Remove and return the logical front, or `None` if empty.
    ///
    /// The front's persistent ID expires; every other live ID keeps
    /// resolving to the same element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.begin].take();
        self.begin += 1;
        if self.begin == self.buf.len() {
            self.begin = 0;
        }
        self.id_offset += 1;
        self.len -= 1;
        self.epoch += 1;
        value
    }

    /// Drop every element. Capacity is kept.
    ///
    /// The ID window moves past every ID issued so far, so no pre-clear ID
    /// can resolve again.
    pub fn clear(&mut self) {
        if self.len > 0 {
            trace!(dropped = self.len, "clearing ring deque");
        }
        for slot in &mut self.buf {
            *slot = None;
        }
        self.id_offset += self.len as u64;
        self.len = 0;
        self.begin = 0;
        self.epoch += 1;
    }

    /// Replace the content with the items of `iter`.
    ///
    /// Behaves as [`clear`](Self::clear) followed by pushing every item, so
    /// previously issued IDs never resolve again.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.extend(iter);
    }

    /// Replace the content with `count` clones of `value`.
    pub fn assign_repeat(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.assign(iter::repeat(value).take(count));
    }

    /// Remove the logical back without touching the ID window.
    ///
    /// Only used by the owning iterator, which never hands out IDs.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let slot = self.physical(self.len);
        self.buf[slot].take()
    }

    /// Grow to hold at least `needed` elements, never by less than the
    /// configured growth step.
    fn grow(&mut self, needed: usize) {
        let current = self.buf.len();
        let target = self.config.grown_capacity(current).max(needed);
        self.linearize();
        self.buf.resize_with(target, || None);
        self.epoch += 1;
        trace!(from = current, to = target, "ring deque grew");
    }

    // ── Logical access ─────────────────────────────────────────────

    /// Element at logical `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buf[self.physical(index)].as_ref()
    }

    /// Mutable element at logical `index`, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.physical(index);
        self.buf[slot].as_mut()
    }

    /// Bounds-checked access to logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, AccessError> {
        self.get(index).ok_or(AccessError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Bounds-checked mutable access to logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, AccessError> {
        let len = self.len;
        self.get_mut(index)
            .ok_or(AccessError::OutOfRange { index, len })
    }

    /// The logical front.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// The logical front, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// The logical back.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// The logical back, mutably.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        self.get_mut(last)
    }

    /// Physical slot of logical `index`. Requires `index < capacity`.
    fn physical(&self, index: usize) -> usize {
        let slot = self.begin + index;
        if slot >= self.buf.len() {
            slot - self.buf.len()
        } else {
            slot
        }
    }

    // ── Borrowing iteration ────────────────────────────────────────

    /// Front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf, self.begin, self.len)
    }

    /// Front-to-back iterator over mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.buf, self.begin, self.len)
    }

    // ── Cursors ────────────────────────────────────────────────────

    /// Cursor at the logical front.
    pub fn cursor_begin(&self) -> Cursor {
        self.cursor(0)
    }

    /// Cursor one past the logical back.
    pub fn cursor_end(&self) -> Cursor {
        self.cursor(self.len)
    }

    /// Cursor at logical `index`, or `None` if `index > len()`.
    pub fn cursor_at(&self, index: usize) -> Option<Cursor> {
        (index <= self.len).then(|| self.cursor(index))
    }

    fn cursor(&self, position: usize) -> Cursor {
        Cursor::new(self.begin, self.buf.len(), self.epoch, position)
    }

    /// Resolve a cursor taken from this deque.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::StaleCursor`] if the layout changed since the
    /// cursor was taken, or [`AccessError::OutOfRange`] if it addresses no
    /// live element.
    pub fn at_cursor(&self, cursor: Cursor) -> Result<&T, AccessError> {
        self.check_cursor(cursor)?;
        self.at(cursor.position())
    }

    /// Mutable counterpart of [`at_cursor`](Self::at_cursor).
    ///
    /// # Errors
    ///
    /// Same conditions as [`at_cursor`](Self::at_cursor).
    pub fn at_cursor_mut(&mut self, cursor: Cursor) -> Result<&mut T, AccessError> {
        self.check_cursor(cursor)?;
        self.at_mut(cursor.position())
    }

    fn check_cursor(&self, cursor: Cursor) -> Result<(), AccessError> {
        if cursor.epoch() == self.epoch {
            Ok(())
        } else {
            Err(AccessError::StaleCursor {
                cursor_epoch: cursor.epoch(),
                current_epoch: self.epoch,
            })
        }
    }

    // ── Persistent IDs ─────────────────────────────────────────────

    /// ID of the logical front (first live ID).
    pub fn persistent_begin(&self) -> PersistentId {
        PersistentId(self.id_offset)
    }

    /// One past the ID of the logical back. The next push receives it.
    pub fn persistent_end(&self) -> PersistentId {
        PersistentId(self.id_offset + self.len as u64)
    }

    /// ID of the element at logical `index`.
    pub fn id_at(&self, index: usize) -> Option<PersistentId> {
        (index < self.len).then(|| PersistentId(self.id_offset + index as u64))
    }

    /// Whether `id` names a live element.
    pub fn is_live(&self, id: PersistentId) -> bool {
        id.0 >= self.id_offset && id.0 - self.id_offset < self.len as u64
    }

    /// Current logical index of the element named by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ExpiredId`] if `id` is outside the live window.
    pub fn index_of(&self, id: PersistentId) -> Result<usize, AccessError> {
        if self.is_live(id) {
            Ok((id.0 - self.id_offset) as usize)
        } else {
            Err(self.expired(id))
        }
    }

    /// Resolve a persistent ID.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ExpiredId`] if the element was popped, cleared,
    /// or never pushed.
    pub fn get_by_id(&self, id: PersistentId) -> Result<&T, AccessError> {
        let index = self.index_of(id)?;
        self.get(index).ok_or_else(|| self.expired(id))
    }

    /// Resolve a persistent ID mutably.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get_by_id`](Self::get_by_id).
    pub fn get_by_id_mut(&mut self, id: PersistentId) -> Result<&mut T, AccessError> {
        let index = self.index_of(id)?;
        let err = self.expired(id);
        self.get_mut(index).ok_or(err)
    }

    /// Front-to-back iterator yielding each element with its ID.
    pub fn persistent_iter(&self) -> PersistentIter<'_, T> {
        PersistentIter::new(self.iter(), self.persistent_begin())
    }

    fn expired(&self, id: PersistentId) -> AccessError {
        AccessError::ExpiredId {
            id,
            live_start: self.persistent_begin(),
            live_end: self.persistent_end(),
        }
    }
}

impl<T: Clone> RingDeque<T> {
    /// Create a deque holding `count` clones of `value`.
    pub fn from_elem(count: usize, value: T) -> Self {
        Self::from(vec![value; count])
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            begin: self.begin,
            len: self.len,
            id_offset: self.id_offset,
            epoch: self.epoch,
            config: self.config,
        }
    }

    /// Replace the content with a copy of `source`'s, keeping this deque's
    /// ID history: the ID window moves past every ID issued so far.
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: PartialOrd> PartialOrd for RingDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.len.saturating_add(lower);
        if needed > self.buf.len() {
            self.grow(needed);
        }
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> From<Vec<T>> for RingDeque<T> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            buf: values.into_iter().map(Some).collect(),
            begin: 0,
            len,
            id_offset: 0,
            epoch: 0,
            config: RingConfig::default(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for RingDeque<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
