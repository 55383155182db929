//! Linear containers - elements addressed by position.

use super::{PostOrderMappable, PostOrderTraversable, PreOrderMappable, PreOrderTraversable};
use crate::error::{ContainerError, Result};

/// A container whose elements occupy positions `0..size`.
///
/// # Required Methods
///
/// - `get`: Bounds-checked read access
///
/// # Provided Methods
///
/// - `front`, `back`: First and last element
/// - `equals`: Element-wise comparison with any other linear container
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let vector: Vector<char> = "abc".chars().collect();
/// assert_eq!(vector.get(1), Ok(&'b'));
/// assert_eq!(vector.front(), Ok(&'a'));
/// assert_eq!(vector.back(), Ok(&'c'));
/// assert!(vector.get(3).is_err());
///
/// let list: List<char> = "abc".chars().collect();
/// assert!(vector.equals(&list));
/// ```
pub trait LinearContainer: PreOrderTraversable + PostOrderTraversable {
    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfRange`] if `index >= size`.
    fn get(&self, index: usize) -> Result<&Self::Element>;

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyCollection`] if the container is empty.
    #[inline]
    fn front(&self) -> Result<&Self::Element> {
        if self.is_empty() {
            return Err(ContainerError::empty(Self::NAME));
        }
        self.get(0)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyCollection`] if the container is empty.
    #[inline]
    fn back(&self) -> Result<&Self::Element> {
        match self.size() {
            0 => Err(ContainerError::empty(Self::NAME)),
            size => self.get(size - 1),
        }
    }

    /// Returns `true` if `other` holds equal elements in the same positions.
    #[inline]
    fn equals<C>(&self, other: &C) -> bool
    where
        C: LinearContainer<Element = Self::Element>,
        Self::Element: PartialEq,
    {
        self.size() == other.size() && self.elements().eq(other.elements())
    }
}

/// A linear container whose elements can be rewritten by position.
pub trait MutableLinearContainer:
    LinearContainer + PreOrderMappable + PostOrderMappable
{
    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfRange`] if `index >= size`.
    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Element>;

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyCollection`] if the container is empty.
    #[inline]
    fn front_mut(&mut self) -> Result<&mut Self::Element> {
        if self.is_empty() {
            return Err(ContainerError::empty(Self::NAME));
        }
        self.get_mut(0)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyCollection`] if the container is empty.
    #[inline]
    fn back_mut(&mut self) -> Result<&mut Self::Element> {
        match self.size() {
            0 => Err(ContainerError::empty(Self::NAME)),
            size => self.get_mut(size - 1),
        }
    }
}

/// A mutable linear container that can sort itself in place.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut vector: Vector<i32> = [4, 1, 3, 2].into_iter().collect();
/// vector.sort();
/// let sorted: Vec<i32> = vector.elements().copied().collect();
/// assert_eq!(sorted, vec![1, 2, 3, 4]);
/// ```
pub trait SortableLinearContainer: MutableLinearContainer {
    /// Sorts the elements in ascending order.
    fn sort(&mut self);
}
