//! Iterators over a [`SlotTable`](crate::SlotTable).
//!
//! All iterators borrow the table, so the extent cannot grow or trim while
//! one is alive. Each call on the table produces a fresh iterator.

use std::iter::{Enumerate, FusedIterator, Zip};
use std::slice;
use std::vec;

/// State of one slot as seen by [`Slots`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    /// The slot holds a live value.
    Occupied(&'a T),
    /// The slot is free; its placeholder is not exposed.
    Free,
}

impl<'a, T> Slot<'a, T> {
    /// Whether the slot is occupied.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// The live value, if any.
    pub fn value(self) -> Option<&'a T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Free => None,
        }
    }
}

/// Every position of the backing extent paired with its [`Slot`] state.
///
/// Created by [`SlotTable::slots`](crate::SlotTable::slots).
#[derive(Clone, Debug)]
pub struct Slots<'a, T> {
    inner: Enumerate<Zip<slice::Iter<'a, T>, slice::Iter<'a, bool>>>,
}

impl<'a, T> Slots<'a, T> {
    pub(crate) fn new(slots: &'a [T], free: &'a [bool]) -> Self {
        Self {
            inner: slots.iter().zip(free.iter()).enumerate(),
        }
    }

    fn classify((index, (value, &free)): (usize, (&'a T, &'a bool))) -> (usize, Slot<'a, T>) {
        if free {
            (index, Slot::Free)
        } else {
            (index, Slot::Occupied(value))
        }
    }
}

impl<'a, T> Iterator for Slots<'a, T> {
    type Item = (usize, Slot<'a, T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Self::classify)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Slots<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Self::classify)
    }
}

impl<T> ExactSizeIterator for Slots<'_, T> {}

impl<T> FusedIterator for Slots<'_, T> {}

/// Occupied slots as `(index, &T)`.
///
/// Created by [`SlotTable::iter`](crate::SlotTable::iter).
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: Slots<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: Slots<'a, T>, occupied: usize) -> Self {
        Self {
            slots,
            remaining: occupied,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.slots.by_ref() {
            if let Slot::Occupied(value) = slot {
                self.remaining -= 1;
                return Some((index, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((index, slot)) = self.slots.next_back() {
            if let Slot::Occupied(value) = slot {
                self.remaining -= 1;
                return Some((index, value));
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Occupied slots as `(index, &mut T)`.
///
/// Created by [`SlotTable::iter_mut`](crate::SlotTable::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Enumerate<Zip<slice::IterMut<'a, T>, slice::Iter<'a, bool>>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [T], free: &'a [bool], occupied: usize) -> Self {
        Self {
            inner: slots.iter_mut().zip(free.iter()).enumerate(),
            remaining: occupied,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (usize, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, (value, &free)) in self.inner.by_ref() {
            if !free {
                self.remaining -= 1;
                return Some((index, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((index, (value, &free))) = self.inner.next_back() {
            if !free {
                self.remaining -= 1;
                return Some((index, value));
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Occupied indices in ascending order.
///
/// Created by [`SlotTable::indices`](crate::SlotTable::indices).
#[derive(Clone, Debug)]
pub struct Indices<'a> {
    inner: Enumerate<slice::Iter<'a, bool>>,
    remaining: usize,
}

impl<'a> Indices<'a> {
    pub(crate) fn new(free: &'a [bool], occupied: usize) -> Self {
        Self {
            inner: free.iter().enumerate(),
            remaining: occupied,
        }
    }
}

impl Iterator for Indices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let (index, _) = self.inner.find(|&(_, &free)| !free)?;
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Indices<'_> {
    fn next_back(&mut self) -> Option<usize> {
        let (index, _) = self.inner.rfind(|&(_, &free)| !free)?;
        self.remaining -= 1;
        Some(index)
    }
}

impl ExactSizeIterator for Indices<'_> {}

impl FusedIterator for Indices<'_> {}

/// Owning iterator over occupied slots as `(index, T)`.
///
/// Created by `SlotTable::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: Enumerate<Zip<vec::IntoIter<T>, vec::IntoIter<bool>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<T>, free: Vec<bool>, occupied: usize) -> Self {
        Self {
            inner: slots.into_iter().zip(free).enumerate(),
            remaining: occupied,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<(usize, T)> {
        for (index, (value, free)) in self.inner.by_ref() {
            if !free {
                self.remaining -= 1;
                return Some((index, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<(usize, T)> {
        while let Some((index, (value, free))) = self.inner.next_back() {
            if !free {
                self.remaining -= 1;
                return Some((index, value));
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
