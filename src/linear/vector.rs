//! Resizable array container.
//!
//! [`Vector`] owns a contiguous run of elements whose length is changed
//! explicitly through [`ResizableContainer::resize`], never implicitly.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `get`, `get_mut` | O(1)       |
//! | `front`, `back`  | O(1)       |
//! | `resize`         | O(n)       |
//! | `sort`           | O(n^2)     |
//! | `clear`          | O(n)       |

use crate::container::{
    ClearableContainer, Container, LinearContainer, Mappable, MutableLinearContainer,
    PostOrderMappable, PostOrderTraversable, PreOrderMappable, PreOrderTraversable,
    ResizableContainer, SortableLinearContainer, Traversable,
};
use crate::error::{ContainerError, Result};

/// A fixed-length, explicitly resizable array.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut vector: Vector<i32> = Vector::with_len(3);
/// assert_eq!(vector.size(), 3);
/// assert_eq!(vector.get(0), Ok(&0));
///
/// *vector.get_mut(1).unwrap() = 5;
/// vector.resize(5);
/// let elements: Vec<i32> = vector.elements().copied().collect();
/// assert_eq!(elements, vec![0, 5, 0, 0, 0]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector<T> {
    elements: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates an empty vector.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a vector of `len` default-valued elements.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut elements = Vec::with_capacity(len);
        elements.resize_with(len, T::default);
        Self { elements }
    }

    /// Creates a vector holding a clone of every element of `source`, in
    /// traversal order.
    #[must_use]
    pub fn from_traversable<C>(source: &C) -> Self
    where
        C: Traversable<Element = T>,
        T: Clone,
    {
        let mut elements = Vec::with_capacity(source.size());
        source.traverse(|element| elements.push(element.clone()));
        Self { elements }
    }

    /// Swaps the elements at positions `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfRange`] if either index is out of range;
    /// the vector is left untouched.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        let size = self.elements.len();
        if let Some(index) = [first, second].into_iter().find(|index| *index >= size) {
            return Err(ContainerError::out_of_range(Self::NAME, index, size));
        }
        self.elements.swap(first, second);
        Ok(())
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for Vector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for Vector<T> {
    type Element = T;
    const NAME: &'static str = "Vector";

    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }
}

impl<T> ClearableContainer for Vector<T> {
    fn clear(&mut self) {
        self.elements = Vec::new();
    }
}

impl<T: Default> ResizableContainer for Vector<T> {
    fn resize(&mut self, new_size: usize) {
        if new_size == 0 {
            self.clear();
            return;
        }
        let mut resized = Vec::with_capacity(new_size);
        resized.extend(self.elements.drain(..).take(new_size));
        resized.resize_with(new_size, T::default);
        self.elements = resized;
    }
}

impl<T> Traversable for Vector<T> {
    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T> PreOrderTraversable for Vector<T> {}

impl<T> PostOrderTraversable for Vector<T> {
    #[inline]
    fn post_order_elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().rev()
    }
}

impl<T> Mappable for Vector<T> {
    #[inline]
    fn elements_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.elements.iter_mut()
    }
}

impl<T> PreOrderMappable for Vector<T> {}

impl<T> PostOrderMappable for Vector<T> {
    #[inline]
    fn post_order_elements_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.elements.iter_mut().rev()
    }
}

impl<T> LinearContainer for Vector<T> {
    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        let size = self.elements.len();
        self.elements
            .get(index)
            .ok_or_else(|| ContainerError::out_of_range(Self::NAME, index, size))
    }
}

impl<T> MutableLinearContainer for Vector<T> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or_else(|| ContainerError::out_of_range(Self::NAME, index, size))
    }
}

impl<T: PartialOrd> SortableLinearContainer for Vector<T> {
    /// Stable insertion sort.
    fn sort(&mut self) {
        for unsorted in 1..self.elements.len() {
            let mut position = unsorted;
            while position > 0 && self.elements[position - 1] > self.elements[position] {
                self.elements.swap(position - 1, position);
                position -= 1;
            }
        }
    }
}

impl<T> std::ops::Index<usize> for Vector<T> {
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

impl<T> std::ops::IndexMut<usize> for Vector<T> {
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Vector<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
