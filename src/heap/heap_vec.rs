//! A vector kept in max-heap order.

use super::{build_heap, is_heap, sift_down};
use crate::container::{
    ClearableContainer, Container, LinearContainer, Mappable, MutableLinearContainer,
    PostOrderMappable, PostOrderTraversable, PreOrderMappable, PreOrderTraversable,
    SortableLinearContainer, Traversable,
};
use crate::error::{ContainerError, Result};
use crate::linear::Vector;

/// A vector whose elements are arranged as a binary max-heap.
///
/// Construction heapifies the input. Writing through the mutable linear
/// interface may break heap order; [`HeapVec::is_heap`] reports it and
/// [`HeapVec::heapify`] restores it. [`SortableLinearContainer::sort`] runs an
/// in-place heapsort and leaves the elements ascending.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut heap: HeapVec<i32> = [3, 8, 1, 5].into_iter().collect();
/// assert!(heap.is_heap());
/// assert_eq!(heap.front(), Ok(&8));
///
/// heap.sort();
/// let sorted: Vec<i32> = heap.elements().copied().collect();
/// assert_eq!(sorted, vec![1, 3, 5, 8]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HeapVec<T> {
    vector: Vector<T>,
}

impl<T: Ord> HeapVec<T> {
    /// Creates an empty heap.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vector: Vector::new(),
        }
    }

    /// Creates a heap from a clone of every element of `source`.
    #[must_use]
    pub fn from_traversable<C>(source: &C) -> Self
    where
        C: Traversable<Element = T>,
        T: Clone,
    {
        Self::from_vector(Vector::from_traversable(source))
    }

    /// Creates a heap by heapifying `vector` in place.
    #[must_use]
    pub fn from_vector(mut vector: Vector<T>) -> Self {
        build_heap(vector.as_mut_slice());
        Self { vector }
    }

    /// Returns `true` if the elements are currently in max-heap order.
    #[inline]
    #[must_use]
    pub fn is_heap(&self) -> bool {
        is_heap(self.vector.as_slice())
    }

    /// Rearranges the elements into max-heap order.
    #[inline]
    pub fn heapify(&mut self) {
        build_heap(self.vector.as_mut_slice());
    }

    /// Consumes the heap, returning the underlying vector.
    #[inline]
    #[must_use]
    pub fn into_vector(self) -> Vector<T> {
        self.vector
    }
}

impl<T: Ord> Default for HeapVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for HeapVec<T> {
    type Element = T;
    const NAME: &'static str = "HeapVec";

    #[inline]
    fn size(&self) -> usize {
        self.vector.size()
    }
}

impl<T> ClearableContainer for HeapVec<T> {
    #[inline]
    fn clear(&mut self) {
        self.vector.clear();
    }
}

impl<T> Traversable for HeapVec<T> {
    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.vector.iter()
    }
}

impl<T> PreOrderTraversable for HeapVec<T> {}

impl<T> PostOrderTraversable for HeapVec<T> {
    #[inline]
    fn post_order_elements(&self) -> impl Iterator<Item = &T> {
        self.vector.iter().rev()
    }
}

impl<T> Mappable for HeapVec<T> {
    #[inline]
    fn elements_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.vector.as_mut_slice().iter_mut()
    }
}

impl<T> PreOrderMappable for HeapVec<T> {}

impl<T> PostOrderMappable for HeapVec<T> {
    #[inline]
    fn post_order_elements_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.vector.as_mut_slice().iter_mut().rev()
    }
}

impl<T> LinearContainer for HeapVec<T> {
    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        self.vector
            .get(index)
            .map_err(|_| ContainerError::out_of_range(Self::NAME, index, self.size()))
    }
}

impl<T> MutableLinearContainer for HeapVec<T> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size();
        self.vector
            .get_mut(index)
            .map_err(|_| ContainerError::out_of_range(Self::NAME, index, size))
    }
}

impl<T: Ord> SortableLinearContainer for HeapVec<T> {
    /// In-place heapsort.
    fn sort(&mut self) {
        let elements = self.vector.as_mut_slice();
        build_heap(elements);
        for end in (1..elements.len()).rev() {
            elements.swap(0, end);
            sift_down(&mut elements[..end], 0);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for HeapVec<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(self.vector.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for HeapVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vector(iter.into_iter().collect())
    }
}
