//! The [`SlotTable`] container.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use keel_core::AccessError;
use tracing::{debug, trace};

use crate::iter::{Indices, IntoIter, Iter, IterMut, Slots};

/// Sparse, randomly-indexed storage with stable indices.
///
/// Each slot is either occupied (holds a live value) or free (holds
/// `T::default()` as a placeholder). An occupancy mask runs parallel to the
/// backing storage. The backing extent never ends in a free slot: releasing
/// the last occupied slot trims the whole free tail.
///
/// Indices are stable: no operation other than [`release`](Self::release)
/// or [`clear`](Self::clear) changes which value an occupied index names.
#[derive(Clone)]
pub struct SlotTable<T> {
    slots: Vec<T>,
    /// `true` where the slot at the same index is free.
    free: Vec<bool>,
    occupied: usize,
}

impl<T> SlotTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            occupied: 0,
        }
    }

    /// Create an empty table with room for `capacity` slots before the
    /// backing storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            occupied: 0,
        }
    }

    /// Read an occupied slot.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AccessDenied`] if `index` is beyond the extent
    /// or currently free.
    pub fn get(&self, index: usize) -> Result<&T, AccessError> {
        if self.contains(index) {
            Ok(&self.slots[index])
        } else {
            Err(self.denied(index))
        }
    }

    /// Mutably borrow an occupied slot without occupying anything.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, AccessError> {
        if self.contains(index) {
            Ok(&mut self.slots[index])
        } else {
            Err(self.denied(index))
        }
    }

    /// Whether `index` is currently occupied.
    pub fn contains(&self, index: usize) -> bool {
        self.free.get(index).is_some_and(|&free| !free)
    }

    /// Whether `index` is free. Indices beyond the extent are free.
    pub fn is_free(&self, index: usize) -> bool {
        !self.contains(index)
    }

    /// First free slot, or [`slot_extent`](Self::slot_extent) if every slot
    /// is occupied.
    ///
    /// This is a linear scan; it is a convenience for picking an index, not
    /// a hot-path allocator.
    pub fn find_free_index(&self) -> usize {
        self.free
            .iter()
            .position(|&free| free)
            .unwrap_or(self.slots.len())
    }

    /// Index of the first occupied slot equal to `value`.
    ///
    /// Free slots are never matched, even if their placeholder compares
    /// equal.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(index, _)| index)
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Current backing extent: one past the highest occupied index.
    pub fn slot_extent(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Number of slots the backing storage holds before reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Release spare backing capacity.
    pub fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
        self.free.shrink_to_fit();
    }

    /// Drop every value and reset the extent to zero.
    pub fn clear(&mut self) {
        debug!(
            extent = self.slots.len(),
            occupied = self.occupied,
            "clearing slot table"
        );
        self.slots.clear();
        self.free.clear();
        self.occupied = 0;
    }

    /// Every slot of the backing extent, in index order, with its state.
    pub fn slots(&self) -> Slots<'_, T> {
        Slots::new(&self.slots, &self.free)
    }

    /// Occupied slots as `(index, &value)` pairs in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots(), self.occupied)
    }

    /// Occupied slots as `(index, &mut value)` pairs in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots, &self.free, self.occupied)
    }

    /// Occupied indices in ascending order.
    pub fn indices(&self) -> Indices<'_> {
        Indices::new(&self.free, self.occupied)
    }

    fn denied(&self, index: usize) -> AccessError {
        AccessError::AccessDenied {
            index,
            extent: self.slots.len(),
        }
    }

    /// Drop the run of free slots at the tail.
    fn trim(&mut self) {
        let keep = self
            .free
            .iter()
            .rposition(|&free| !free)
            .map_or(0, |last| last + 1);
        let shed = self.slots.len() - keep;
        if shed == 0 {
            return;
        }
        self.slots.truncate(keep);
        self.free.truncate(keep);
        if shed > 1 {
            trace!(shed, extent = keep, "trimmed free tail");
        }
    }
}

impl<T: Default> SlotTable<T> {
    /// Mutably access `index`, occupying it first if necessary.
    ///
    /// Indices beyond the extent grow the table; every newly created slot
    /// below `index` starts free. The live count only increases if `index`
    /// was free. An index that was free yields `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if `index` is `usize::MAX`, since the
    /// extent would not fit in a `usize`.
    pub fn get_or_occupy(&mut self, index: usize) -> &mut T {
        if index >= self.slots.len() {
            let Some(extent) = index.checked_add(1) else {
                panic!("capacity overflow");
            };
            self.grow_to(extent);
        }
        if self.free[index] {
            self.free[index] = false;
            self.occupied += 1;
        }
        &mut self.slots[index]
    }

    /// Store `value` at `index`, occupying it.
    ///
    /// Returns the previous value if the slot was already occupied.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        let was_occupied = self.contains(index);
        let previous = mem::replace(self.get_or_occupy(index), value);
        was_occupied.then_some(previous)
    }

    /// Store `value` in the first free slot and return its index.
    pub fn insert_free(&mut self, value: T) -> usize {
        let index = self.find_free_index();
        self.insert(index, value);
        index
    }

    /// Free `index` and return the value it held.
    ///
    /// A free or out-of-range index is left alone and yields `None`. After a
    /// successful release the extent is one past the highest remaining
    /// occupied slot.
    pub fn release(&mut self, index: usize) -> Option<T> {
        if !self.contains(index) {
            return None;
        }
        self.free[index] = true;
        self.occupied -= 1;
        let value = mem::take(&mut self.slots[index]);
        self.trim();
        Some(value)
    }

    fn grow_to(&mut self, extent: usize) {
        let previous = self.slots.len();
        self.slots.resize_with(extent, T::default);
        self.free.resize(extent, true);
        if extent - previous > 1 {
            trace!(from = previous, to = extent, "slot table grew past a gap");
        }
    }
}

impl<T> Default for SlotTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SlotTable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.occupied == other.occupied && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SlotTable<T> {}

impl<T> Index<usize> for SlotTable<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is free or beyond the extent.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Default> IndexMut<usize> for SlotTable<T> {
    /// Occupies `index` if it is free; see
    /// [`get_or_occupy`](SlotTable::get_or_occupy).
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_or_occupy(index)
    }
}

impl<T: Default> Extend<(usize, T)> for SlotTable<T> {
    fn extend<I: IntoIterator<Item = (usize, T)>>(&mut self, iter: I) {
        for (index, value) in iter {
            self.insert(index, value);
        }
    }
}

impl<T: Default> FromIterator<(usize, T)> for SlotTable<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, T> IntoIterator for &'a SlotTable<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SlotTable<T> {
    type Item = (usize, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SlotTable<T> {
    type Item = (usize, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.slots, self.free, self.occupied)
    }
}
