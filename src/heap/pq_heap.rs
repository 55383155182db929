//! Priority queue over an array heap with managed capacity.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity          |
//! |----------------|---------------------|
//! | `tip`          | O(1)                |
//! | `insert`       | O(log n) amortized  |
//! | `tip_n_remove` | O(log n) amortized  |
//! | `change`       | O(log n)            |
//! | bulk build     | O(n)                |

use std::cmp::Ordering;

use super::{PriorityQueue, build_heap, sift_down, sift_up};
use crate::container::load::{self, Adjustment, MIN_CAPACITY};
use crate::container::{
    ClearableContainer, Container, LinearContainer, PostOrderTraversable, PreOrderTraversable,
    Traversable,
};
use crate::error::{ContainerError, Result};

/// A max-priority queue stored as an implicit binary heap.
///
/// The queue tracks its own capacity with the same policy as
/// [`SetVec`](crate::set::SetVec): it never drops below 2 slots, halves when
/// at most a quarter full and doubles when at least 90% full.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut queue = PqHeap::new();
/// queue.insert(3);
/// queue.insert(10);
/// queue.insert(6);
///
/// assert_eq!(queue.tip(), Ok(&10));
///
/// // Lower the tip below its children: it sinks back down.
/// assert_eq!(queue.change(0, 1), Ok(10));
/// assert_eq!(queue.tip(), Ok(&6));
/// ```
#[derive(Clone)]
pub struct PqHeap<T> {
    elements: Vec<T>,
    capacity: usize,
}

static_assertions::assert_impl_all!(PqHeap<u64>: Send, Sync, Clone);

impl<T: Ord> PqHeap<T> {
    /// Creates an empty queue with the minimum capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(MIN_CAPACITY),
            capacity: MIN_CAPACITY,
        }
    }

    /// Creates a queue holding a clone of every element of `source`.
    #[must_use]
    pub fn from_traversable<C>(source: &C) -> Self
    where
        C: Traversable<Element = T>,
        T: Clone,
    {
        source.elements().cloned().collect()
    }

    /// Returns the number of slots currently reserved for elements.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Builds a queue from arbitrary `elements` in O(n).
    fn from_vec(mut elements: Vec<T>) -> Self {
        build_heap(&mut elements);
        let capacity = load::fitting_capacity(elements.len());
        elements.reserve_exact(capacity.saturating_sub(elements.len()));
        Self { elements, capacity }
    }

    fn check_resize(&mut self) {
        match load::adjustment(self.elements.len(), self.capacity) {
            Some(Adjustment::Reset) => *self = Self::new(),
            Some(Adjustment::Resize(new_capacity)) => self.resize(new_capacity),
            None => {}
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.elements.len());
        if new_capacity > self.elements.capacity() {
            self.elements.reserve_exact(new_capacity - self.elements.len());
        } else {
            self.elements.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }
}

impl<T: Ord> Default for PqHeap<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for PqHeap<T> {
    type Element = T;
    const NAME: &'static str = "PqHeap";

    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }
}

impl<T: Ord> ClearableContainer for PqHeap<T> {
    fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<T> Traversable for PqHeap<T> {
    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T> PreOrderTraversable for PqHeap<T> {}

impl<T> PostOrderTraversable for PqHeap<T> {
    #[inline]
    fn post_order_elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().rev()
    }
}

impl<T> LinearContainer for PqHeap<T> {
    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        self.elements
            .get(index)
            .ok_or_else(|| ContainerError::out_of_range(Self::NAME, index, self.elements.len()))
    }
}

impl<T: Ord> PriorityQueue for PqHeap<T> {
    #[inline]
    fn tip(&self) -> Result<&T> {
        self.elements
            .first()
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    fn tip_n_remove(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(ContainerError::empty(Self::NAME));
        }
        let tip = self.elements.swap_remove(0);
        sift_down(&mut self.elements, 0);
        self.check_resize();
        Ok(tip)
    }

    fn insert(&mut self, element: T) {
        self.check_resize();
        self.elements.push(element);
        let last = self.elements.len() - 1;
        sift_up(&mut self.elements, last);
        self.check_resize();
    }

    fn change(&mut self, index: usize, element: T) -> Result<T> {
        let size = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or_else(|| ContainerError::out_of_range(Self::NAME, index, size))?;
        let previous = std::mem::replace(slot, element);
        match self.elements[index].cmp(&previous) {
            Ordering::Greater => sift_up(&mut self.elements, index),
            Ordering::Less => sift_down(&mut self.elements, index),
            Ordering::Equal => {}
        }
        Ok(previous)
    }
}

impl<T: PartialEq> PartialEq for PqHeap<T> {
    /// Two queues are equal when their heap arrays are equal.
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for PqHeap<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for PqHeap<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PqHeap")
            .field("elements", &self.elements)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for PqHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
