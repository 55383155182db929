//! Singly-linked list container.
//!
//! [`List`] is a chain of boxed nodes with a cached length. Front operations
//! are O(1); anything that reaches the back walks the chain.
//!
//! # Time Complexity
//!
//! | Operation                             | Complexity |
//! |---------------------------------------|------------|
//! | `insert_at_front`, `remove_from_front` | O(1)       |
//! | `insert_at_back`, `remove_from_back`   | O(n)       |
//! | `get`, `get_mut`                      | O(n)       |
//! | `size`                                | O(1)       |
//! | `post_order_*`                        | O(n) time, O(n) scratch |

use crate::container::{
    ClearableContainer, Container, LinearContainer, Mappable, MutableLinearContainer,
    PostOrderMappable, PostOrderTraversable, PreOrderMappable, PreOrderTraversable, Traversable,
};
use crate::error::{ContainerError, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// A singly-linked list.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut list = List::new();
/// list.insert_at_back(2);
/// list.insert_at_front(1);
/// list.insert_at_back(3);
///
/// assert_eq!(list.front(), Ok(&1));
/// assert_eq!(list.back(), Ok(&3));
/// assert_eq!(list.front_n_remove(), Ok(1));
/// assert_eq!(list.size(), 2);
/// ```
pub struct List<T> {
    head: Link<T>,
    size: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    /// Creates a list holding a clone of every element of `source`, in
    /// traversal order.
    #[must_use]
    pub fn from_traversable<C>(source: &C) -> Self
    where
        C: Traversable<Element = T>,
        T: Clone,
    {
        source.elements().cloned().collect()
    }

    /// Inserts `element` before the first element.
    pub fn insert_at_front(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { element, next }));
        self.size += 1;
    }

    /// Removes the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyCollection`] if the list is empty.
    #[inline]
    pub fn remove_from_front(&mut self) -> Result<()> {
        self.front_n_remove().map(drop)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyCollection`] if the list is empty.
    pub fn front_n_remove(&mut self) -> Result<T> {
        self.remove_at(0)
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    /// Inserts `element` after the last element.
    #[inline]
    pub fn insert_at_back(&mut self, element: T) {
        self.insert_at(self.size, element);
    }

    /// Removes the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyCollection`] if the list is empty.
    #[inline]
    pub fn remove_from_back(&mut self) -> Result<()> {
        self.back_n_remove().map(drop)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EmptyCollection`] if the list is empty.
    pub fn back_n_remove(&mut self) -> Result<T> {
        match self.size {
            0 => Err(ContainerError::empty(Self::NAME)),
            size => self
                .remove_at(size - 1)
                .ok_or_else(|| ContainerError::empty(Self::NAME)),
        }
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }

    /// Returns an iterator over mutable references, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.size,
        }
    }

    /// Inserts `element` so that it ends up at position `index`.
    ///
    /// Does nothing when `index > size`.
    pub(crate) fn insert_at(&mut self, index: usize, element: T) {
        if let Some(link) = self.link_mut(index) {
            let next = link.take();
            *link = Some(Box::new(Node { element, next }));
            self.size += 1;
        }
    }

    /// Unlinks and returns the element at position `index`.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<T> {
        let link = self.link_mut(index)?;
        let node = link.take()?;
        let Node { element, next } = *node;
        *link = next;
        self.size -= 1;
        Some(element)
    }

    /// Returns the link that owns position `index` (the tail link when
    /// `index == size`).
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        Some(cursor)
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink node by node so long chains do not recurse through `Box` drops.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Container for List<T> {
    type Element = T;
    const NAME: &'static str = "List";

    #[inline]
    fn size(&self) -> usize {
        self.size
    }
}

impl<T> ClearableContainer for List<T> {
    fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<T> Traversable for List<T> {
    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> PreOrderTraversable for List<T> {}

impl<T> PostOrderTraversable for List<T> {
    fn post_order_elements(&self) -> impl Iterator<Item = &T> {
        self.iter().collect::<Vec<_>>().into_iter().rev()
    }
}

impl<T> Mappable for List<T> {
    #[inline]
    fn elements_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.iter_mut()
    }
}

impl<T> PreOrderMappable for List<T> {}

impl<T> PostOrderMappable for List<T> {
    fn post_order_elements_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.iter_mut().collect::<Vec<_>>().into_iter().rev()
    }
}

impl<T> LinearContainer for List<T> {
    fn get(&self, index: usize) -> Result<&T> {
        self.iter()
            .nth(index)
            .ok_or_else(|| ContainerError::out_of_range(Self::NAME, index, self.size))
    }
}

impl<T> MutableLinearContainer for List<T> {
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size;
        self.iter_mut()
            .nth(index)
            .ok_or_else(|| ContainerError::out_of_range(Self::NAME, index, size))
    }
}

impl<T> std::ops::Index<usize> for List<T> {
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

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let Some(mut tail) = self.link_mut(self.size) else {
            return;
        };
        let mut appended = 0;
        for element in iter {
            let node = tail.insert(Box::new(Node {
                element,
                next: None,
            }));
            tail = &mut node.next;
            appended += 1;
        }
        self.size += appended;
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over references to the elements of a [`List`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over mutable references to the elements of a [`List`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.element
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a [`List`].
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_at(0)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.size, Some(self.list.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
