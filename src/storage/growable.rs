use std::slice;

use crate::error::{Error, Result};

/// Owned, contiguous, append-only sequence with an explicit capacity.
///
/// The capacity reported by [`GrowableArray::capacity`] is the array's own
/// bookkeeping: it starts at the requested value and only ever doubles (or goes
/// from 0 to 1) when an append finds the buffer full.
#[derive(Debug)]
pub struct GrowableArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> GrowableArray<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// A capacity of 0 defers allocation until the first append.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(item);
    }

    /// Bounds-checked read against the live length, not the capacity.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    // The replacement buffer is fully populated before the old one is dropped.
    fn grow(&mut self) {
        let next_capacity = self.capacity.saturating_mul(2).max(1);
        let mut next = Vec::with_capacity(next_capacity);
        next.append(&mut self.items);
        tracing::trace!(from = self.capacity, to = next_capacity, "growing buffer");
        self.items = next;
        self.capacity = next_capacity;
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Deep copy that keeps the source's capacity, not just its length.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let copy = source.clone();
        *self = copy;
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Record;

    fn record(i: usize) -> Record {
        Record::new(format!("{i:02} Test Location"), "14/03/19", 0.1 * i as f64 + 15.0).unwrap()
    }

    #[test]
    fn zero_capacity_defers_allocation() {
        let a: GrowableArray<u32> = GrowableArray::with_capacity(0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(a.count(), 0);
        assert!(matches!(a.at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 })));
    }

    #[test]
    fn capacity_doubles_only_when_full() {
        let mut a = GrowableArray::new();
        let mut seen = Vec::new();
        for i in 0..9 {
            a.append(i);
            seen.push(a.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);

        let mut b = GrowableArray::with_capacity(3);
        b.extend(0..3);
        assert_eq!(b.capacity(), 3);
        b.append(3);
        assert_eq!(b.capacity(), 6);
    }

    #[test]
    fn keeps_insertion_order() {
        let a: GrowableArray<_> = (0..50).map(record).collect();
        assert_eq!(a.count(), 50);
        for (i, r) in a.iter().enumerate() {
            assert_eq!(r, &record(i));
        }
        assert_eq!(a.at(49).unwrap(), &record(49));
    }

    #[test]
    fn at_checks_length_not_capacity() {
        let mut a = GrowableArray::with_capacity(10);
        a.append(7u8);
        assert_eq!(*a.at(0).unwrap(), 7);
        assert!(a.at(1).is_err());
        assert!(a.at(9).is_err());
        assert!(a.at(usize::MAX).is_err());
        assert_eq!(a.get(1), None);
    }

    #[test]
    fn clone_keeps_capacity_and_is_independent() {
        let mut a = GrowableArray::with_capacity(20);
        a.extend((0..10).map(record));
        let b = a.clone();
        assert_eq!(b.capacity(), 20);
        assert_eq!(b.as_slice(), a.as_slice());
        assert_ne!(
            a.at(0).unwrap().location().as_ptr(),
            b.at(0).unwrap().location().as_ptr()
        );

        a.append(record(10));
        assert_eq!(a.count(), 11);
        assert_eq!(b.count(), 10);
        drop(a);
        assert_eq!(b.at(9).unwrap(), &record(9));
    }

    #[test]
    fn clone_from_replaces_contents() {
        let mut a = GrowableArray::with_capacity(4);
        a.extend((0..3).map(record));
        let mut b = GrowableArray::with_capacity(1);
        b.extend((10..15).map(record));

        b.clone_from(&a);
        assert_eq!(b.capacity(), 4);
        assert_eq!(b.as_slice(), a.as_slice());

        b.append(record(3));
        assert_eq!(a.count(), 3);
        assert_eq!(b.count(), 4);
    }

    #[test]
    fn assigning_an_identical_copy_is_a_no_op() {
        let mut a: GrowableArray<_> = (0..5).map(record).collect();
        let before = a.clone();
        a.clone_from(&before);
        assert_eq!(a.capacity(), before.capacity());
        assert_eq!(a.as_slice(), before.as_slice());
    }
}
