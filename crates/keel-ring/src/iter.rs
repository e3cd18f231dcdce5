//! Iterators over a [`RingDeque`](crate::RingDeque).

use std::iter::{Chain, FusedIterator};
use std::slice;

use keel_core::PersistentId;

use crate::deque::RingDeque;

/// Front-to-back iterator over `&T`.
///
/// Walks physical slots starting at the front, wrapping to slot 0 when it
/// passes the end of the buffer. Created by
/// [`RingDeque::iter`](crate::RingDeque::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    buf: &'a [Option<T>],
    /// Physical slot of the next front item.
    head: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(buf: &'a [Option<T>], head: usize, len: usize) -> Self {
        Self {
            buf,
            head,
            remaining: len,
        }
    }

    fn wrap(&self, slot: usize) -> usize {
        if slot >= self.buf.len() {
            slot - self.buf.len()
        } else {
            slot
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            head: self.head,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.buf[self.head].as_ref();
        self.head = self.wrap(self.head + 1);
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let tail = self.wrap(self.head + self.remaining);
        self.buf[tail].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Front-to-back iterator over `&mut T`.
///
/// Created by [`RingDeque::iter_mut`](crate::RingDeque::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(buf: &'a mut [Option<T>], begin: usize, len: usize) -> Self {
        let head_len = len.min(buf.len() - begin);
        let (wrapped, head) = buf.split_at_mut(begin);
        Self {
            inner: head[..head_len]
                .iter_mut()
                .chain(wrapped[..len - head_len].iter_mut()),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let item = self.inner.next()?.as_mut();
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?.as_mut();
        self.remaining -= 1;
        item
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Front-to-back iterator over `(PersistentId, &T)`.
///
/// Created by [`RingDeque::persistent_iter`](crate::RingDeque::persistent_iter).
#[derive(Debug)]
pub struct PersistentIter<'a, T> {
    inner: Iter<'a, T>,
    front: PersistentId,
}

impl<'a, T> PersistentIter<'a, T> {
    pub(crate) fn new(inner: Iter<'a, T>, front: PersistentId) -> Self {
        Self { inner, front }
    }
}

impl<T> Clone for PersistentIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            front: self.front,
        }
    }
}

impl<'a, T> Iterator for PersistentIter<'a, T> {
    type Item = (PersistentId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let id = self.front;
        self.front = id.next();
        Some((id, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for PersistentIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        // After next_back, `len()` counts the items still ahead of this one.
        let id = self.front.offset(self.inner.len() as i64);
        Some((id, item))
    }
}

impl<T> ExactSizeIterator for PersistentIter<'_, T> {}

impl<T> FusedIterator for PersistentIter<'_, T> {}

/// Owning front-to-back iterator.
///
/// Created by `RingDeque::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    deque: RingDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(deque: RingDeque<T>) -> Self {
        Self { deque }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
