//! Ordered set over a circular array buffer.
//!
//! [`SetVec`] keeps its keys sorted in a ring of `Option<T>` slots. The live
//! keys occupy `size` consecutive slots starting at `head` (wrapping past the
//! end of the buffer), so both ends can grow in O(1) and an interior insertion
//! or removal only moves the shorter side of the sequence.
//!
//! # Time Complexity
//!
//! | Operation                            | Complexity         |
//! |--------------------------------------|--------------------|
//! | `exists`, `predecessor`, `successor` | O(log n)           |
//! | `min`, `max`, `get`                  | O(1)               |
//! | `insert`, `remove`                   | O(n) worst case    |
//! | `min_n_remove`, `max_n_remove`       | O(1) amortized     |
//! | `clone`, bulk build                  | O(n), O(n log n)   |
//!
//! Inserting a new minimum or maximum is O(1) amortized.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::Probe;
use crate::container::load::{self, Adjustment, MIN_CAPACITY};
use crate::container::{
    ClearableContainer, Container, DictionaryContainer, LinearContainer, Mappable,
    OrderedDictionaryContainer, PostOrderTraversable, PreOrderTraversable, Traversable,
};
use crate::error::{ContainerError, Result};

#[cfg(debug_assertions)]
const LAYOUT_INVARIANT_PANIC_MESSAGE: &str =
    "SetVec invariant violated: live slots must be contiguous from head and strictly increasing";

fn vacant_buffer<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// A sorted set of unique keys stored in a circular buffer.
///
/// The buffer never holds fewer than 2 slots. After every mutation the load
/// factor `size / capacity` stays above 0.25 and below 0.9, except at the
/// 2-slot floor: the buffer halves when it becomes at most a quarter full
/// and doubles when it becomes at least 90% full. Every reallocation centers
/// the keys in the new buffer.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut set = SetVec::new();
/// for key in [5, 3, 8, 1] {
///     assert!(set.insert(key));
/// }
/// assert!(!set.insert(3));
///
/// let keys: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(keys, vec![1, 3, 5, 8]);
///
/// assert_eq!(set.predecessor(&5), Ok(&3));
/// assert_eq!(set.successor(&8), Err(ContainerError::not_found("SetVec")));
/// assert_eq!(set.min_n_remove(), Ok(1));
/// assert_eq!(set.get(0), Ok(&3));
/// ```
pub struct SetVec<T> {
    buffer: Box<[Option<T>]>,
    head: usize,
    size: usize,
}

// Auto traits follow the key type
static_assertions::assert_impl_all!(SetVec<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(SetVec<std::rc::Rc<i32>>: Send, Sync);

impl<T> SetVec<T> {
    /// Creates an empty set with the minimum capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: vacant_buffer(MIN_CAPACITY),
            head: 0,
            size: 0,
        }
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns an iterator over the keys in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            set: self,
            front: 0,
            back: self.size,
        }
    }

    /// Places already sorted, duplicate-free `elements` into a buffer of the
    /// smallest capacity that keeps the load factor in band.
    fn from_sorted_unique(elements: Vec<T>) -> Self {
        let size = elements.len();
        let capacity = load::fitting_capacity(size);
        let head = (capacity - size) / 2;
        let mut buffer = vacant_buffer(capacity);
        for (slot, element) in buffer[head..].iter_mut().zip(elements) {
            *slot = Some(element);
        }
        Self { buffer, head, size }
    }

    #[inline]
    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }

    #[inline]
    fn wrap_add(&self, physical: usize, offset: usize) -> usize {
        (physical + offset) % self.capacity()
    }

    #[inline]
    fn wrap_sub(&self, physical: usize, offset: usize) -> usize {
        (physical + self.capacity() - offset) % self.capacity()
    }

    /// Returns the key at logical position `logical`, if it is live.
    #[inline]
    fn element(&self, logical: usize) -> Option<&T> {
        if logical < self.size {
            self.buffer[self.physical(logical)].as_ref()
        } else {
            None
        }
    }

    /// Moves the live keys into a buffer of exactly `new_capacity` slots,
    /// centered.
    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size && new_capacity >= MIN_CAPACITY);
        let new_head = (new_capacity - self.size) / 2;
        let mut resized = vacant_buffer(new_capacity);
        for logical in 0..self.size {
            let physical = self.physical(logical);
            resized[new_head + logical] = self.buffer[physical].take();
        }
        self.buffer = resized;
        self.head = new_head;
    }

    fn check_resize(&mut self) {
        match load::adjustment(self.size, self.capacity()) {
            Some(Adjustment::Reset) => *self = Self::new(),
            Some(Adjustment::Resize(new_capacity)) => self.resize(new_capacity),
            None => {}
        }
    }

    /// Stores `element` at logical position `position`, shifting the shorter
    /// side of the sequence to open a gap there.
    ///
    /// Requires a free slot and `position <= size`.
    fn insert_at(&mut self, position: usize, element: T) {
        debug_assert!(position <= self.size && self.size < self.capacity());
        let left = position;
        let right = self.size - position;
        if left >= right {
            // The slot just past the tail is free: walk it back to `position`.
            for logical in (position..self.size).rev() {
                let from = self.physical(logical);
                let to = self.wrap_add(from, 1);
                self.buffer.swap(from, to);
            }
        } else {
            // Claim the slot before the head and walk it forward.
            self.head = self.wrap_sub(self.head, 1);
            for logical in 0..position {
                let from = self.physical(logical);
                let to = self.wrap_add(from, 1);
                self.buffer.swap(from, to);
            }
        }
        let target = self.physical(position);
        self.buffer[target] = Some(element);
        self.size += 1;
    }

    /// Takes out the key at logical position `position`, closing the gap
    /// from the shorter side.
    fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.size {
            return None;
        }
        let target = self.physical(position);
        let element = self.buffer[target].take()?;
        let left = position;
        let right = self.size - position - 1;
        if left >= right {
            for logical in position..self.size - 1 {
                let to = self.physical(logical);
                let from = self.wrap_add(to, 1);
                self.buffer.swap(to, from);
            }
        } else {
            for logical in (0..position).rev() {
                let to = self.physical(logical);
                let from = self.wrap_add(to, 1);
                self.buffer.swap(to, from);
            }
            self.head = self.wrap_add(self.head, 1);
        }
        self.size -= 1;
        if self.size == 0 {
            self.head = 0;
        }
        self.check_resize();
        #[cfg(debug_assertions)]
        debug_assert!(
            self.layout_is_valid(),
            "{}",
            LAYOUT_INVARIANT_PANIC_MESSAGE
        );
        Some(element)
    }

    /// Consumes the set, returning its keys in ascending order.
    fn into_sorted_vec(self) -> Vec<T> {
        let mut slots = self.buffer.into_vec();
        slots.rotate_left(self.head);
        slots.into_iter().take(self.size).flatten().collect()
    }

    /// Checks the structural invariants that do not depend on key order.
    #[cfg(debug_assertions)]
    fn layout_is_valid(&self) -> bool {
        let capacity = self.capacity();
        capacity >= MIN_CAPACITY
            && self.head < capacity
            && self.size <= capacity
            && load::within_band(self.size, capacity)
            && (0..capacity).all(|offset| {
                self.buffer[self.wrap_add(self.head, offset)].is_some() == (offset < self.size)
            })
    }
}

impl<T: Ord> SetVec<T> {
    /// Creates a set holding a clone of every element of `source`.
    ///
    /// Duplicates are dropped; the first occurrence is kept.
    #[must_use]
    pub fn from_traversable<C>(source: &C) -> Self
    where
        C: Traversable<Element = T>,
        T: Clone,
    {
        source.elements().cloned().collect()
    }

    /// Creates a set by moving every element out of `source`.
    ///
    /// Duplicates are dropped; the first occurrence is kept.
    #[must_use]
    pub fn from_mappable<C>(source: C) -> Self
    where
        C: Mappable<Element = T> + IntoIterator<Item = T>,
    {
        source.into_iter().collect()
    }

    /// Binary search for `key` over the logical positions `[0, size)`.
    fn probe(&self, key: &T) -> Probe {
        let (mut low, mut high) = (0, self.size);
        while low < high {
            let middle = low + (high - low) / 2;
            let Some(element) = self.element(middle) else {
                break;
            };
            match element.cmp(key) {
                Ordering::Less => low = middle + 1,
                Ordering::Greater => high = middle,
                Ordering::Equal => return Probe::Found(middle),
            }
        }
        Probe::Vacant(low)
    }

    #[cfg(debug_assertions)]
    fn is_strictly_increasing(&self) -> bool {
        self.iter().zip(self.iter().skip(1)).all(|(lower, upper)| lower < upper)
    }
}

impl<T> Default for SetVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for SetVec<T> {
    type Element = T;
    const NAME: &'static str = "SetVec";

    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}

impl<T> ClearableContainer for SetVec<T> {
    /// Drops every key and returns to a fresh 2-slot buffer.
    fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<T: Ord> Traversable for SetVec<T> {
    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    /// Binary search, O(log n).
    #[inline]
    fn exists(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.probe(value).exists_index().is_some()
    }
}

impl<T: Ord> PreOrderTraversable for SetVec<T> {}

impl<T: Ord> PostOrderTraversable for SetVec<T> {
    #[inline]
    fn post_order_elements(&self) -> impl Iterator<Item = &T> {
        self.iter().rev()
    }
}

impl<T: Ord> LinearContainer for SetVec<T> {
    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        self.element(index)
            .ok_or_else(|| ContainerError::out_of_range(Self::NAME, index, self.size))
    }
}

impl<T: Ord> DictionaryContainer for SetVec<T> {
    fn insert(&mut self, value: T) -> bool {
        self.check_resize();
        let probe = self.probe(&value);
        if probe.exists_index().is_some() {
            return false;
        }
        self.insert_at(probe.insertion_index(), value);
        self.check_resize();
        #[cfg(debug_assertions)]
        debug_assert!(
            self.layout_is_valid() && self.is_strictly_increasing(),
            "{}",
            LAYOUT_INVARIANT_PANIC_MESSAGE
        );
        true
    }

    fn remove(&mut self, value: &T) -> bool {
        self.probe(value)
            .exists_index()
            .and_then(|index| self.remove_at(index))
            .is_some()
    }
}

impl<T: Ord> OrderedDictionaryContainer for SetVec<T> {
    #[inline]
    fn min(&self) -> Result<&T> {
        self.element(0)
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    fn min_n_remove(&mut self) -> Result<T> {
        self.remove_at(0)
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    #[inline]
    fn max(&self) -> Result<&T> {
        self.size
            .checked_sub(1)
            .and_then(|last| self.element(last))
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    fn max_n_remove(&mut self) -> Result<T> {
        self.size
            .checked_sub(1)
            .and_then(|last| self.remove_at(last))
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    fn predecessor(&self, key: &T) -> Result<&T> {
        self.probe(key)
            .strict_predecessor_index()
            .and_then(|index| self.element(index))
            .ok_or_else(|| ContainerError::not_found(Self::NAME))
    }

    fn predecessor_n_remove(&mut self, key: &T) -> Result<T> {
        self.probe(key)
            .strict_predecessor_index()
            .and_then(|index| self.remove_at(index))
            .ok_or_else(|| ContainerError::not_found(Self::NAME))
    }

    fn successor(&self, key: &T) -> Result<&T> {
        self.probe(key)
            .strict_successor_index(self.size)
            .and_then(|index| self.element(index))
            .ok_or_else(|| ContainerError::not_found(Self::NAME))
    }

    fn successor_n_remove(&mut self, key: &T) -> Result<T> {
        self.probe(key)
            .strict_successor_index(self.size)
            .and_then(|index| self.remove_at(index))
            .ok_or_else(|| ContainerError::not_found(Self::NAME))
    }
}

impl<T: Ord> std::ops::Index<usize> for SetVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: Clone> Clone for SetVec<T> {
    /// Copies the live keys only, into the smallest in-band capacity.
    fn clone(&self) -> Self {
        Self::from_sorted_unique(self.iter().cloned().collect())
    }
}

impl<T: PartialEq> PartialEq for SetVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SetVec<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for SetVec<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for SetVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        // Stable sort so `dedup` keeps the earliest of equal keys.
        elements.sort();
        elements.dedup();
        Self::from_sorted_unique(elements)
    }
}

impl<T: Ord> Extend<T> for SetVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for SetVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            elements: self.into_sorted_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SetVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`SetVec`], in ascending order.
pub struct Iter<'a, T> {
    set: &'a SetVec<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.set.element(self.front);
        self.front += 1;
        element
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.set.element(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`SetVec`], in ascending order.
pub struct IntoIter<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
