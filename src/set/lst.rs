//! Ordered set over a sorted singly-linked list.

use std::cmp::Ordering;

use super::Probe;
use crate::container::{
    ClearableContainer, Container, DictionaryContainer, LinearContainer, Mappable,
    OrderedDictionaryContainer, PostOrderTraversable, PreOrderTraversable, Traversable,
};
use crate::error::{ContainerError, Result};
use crate::linear::{List, ListIntoIter, ListIter};

/// A sorted set of unique keys stored in a [`List`].
///
/// Every operation walks the chain from the front, so each costs O(n). The
/// observable behavior matches [`SetVec`](crate::set::SetVec) exactly.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut set: SetLst<&str> = ["pear", "apple", "fig"].into_iter().collect();
/// assert_eq!(set.min(), Ok(&"apple"));
/// assert_eq!(set.predecessor(&"fig"), Ok(&"apple"));
/// assert_eq!(set.successor_n_remove(&"fig"), Ok("pear"));
/// assert_eq!(set.size(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SetLst<T> {
    list: List<T>,
}

static_assertions::assert_impl_all!(SetLst<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(SetLst<std::rc::Rc<String>>: Send, Sync);

impl<T> SetLst<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { list: List::new() }
    }

    /// Returns an iterator over the keys in ascending order.
    #[inline]
    pub fn iter(&self) -> ListIter<'_, T> {
        self.list.iter()
    }
}

impl<T: Ord> SetLst<T> {
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

    /// Walks the chain until it reaches a key `>= key`.
    fn probe(&self, key: &T) -> Probe {
        for (index, element) in self.list.iter().enumerate() {
            match element.cmp(key) {
                Ordering::Less => {}
                Ordering::Equal => return Probe::Found(index),
                Ordering::Greater => return Probe::Vacant(index),
            }
        }
        Probe::Vacant(self.list.size())
    }

    fn element(&self, index: usize) -> Option<&T> {
        self.list.iter().nth(index)
    }
}

impl<T> Default for SetLst<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Container for SetLst<T> {
    type Element = T;
    const NAME: &'static str = "SetLst";

    #[inline]
    fn size(&self) -> usize {
        self.list.size()
    }
}

impl<T> ClearableContainer for SetLst<T> {
    #[inline]
    fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T: Ord> Traversable for SetLst<T> {
    #[inline]
    fn elements(&self) -> impl Iterator<Item = &T> {
        self.list.iter()
    }

    /// Stops at the first key `>= value`.
    #[inline]
    fn exists(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.probe(value).exists_index().is_some()
    }
}

impl<T: Ord> PreOrderTraversable for SetLst<T> {}

impl<T: Ord> PostOrderTraversable for SetLst<T> {
    #[inline]
    fn post_order_elements(&self) -> impl Iterator<Item = &T> {
        self.list.post_order_elements()
    }
}

impl<T: Ord> LinearContainer for SetLst<T> {
    fn get(&self, index: usize) -> Result<&T> {
        self.element(index)
            .ok_or_else(|| ContainerError::out_of_range(Self::NAME, index, self.size()))
    }
}

impl<T: Ord> DictionaryContainer for SetLst<T> {
    fn insert(&mut self, value: T) -> bool {
        let probe = self.probe(&value);
        if probe.exists_index().is_some() {
            return false;
        }
        self.list.insert_at(probe.insertion_index(), value);
        true
    }

    fn remove(&mut self, value: &T) -> bool {
        self.probe(value)
            .exists_index()
            .and_then(|index| self.list.remove_at(index))
            .is_some()
    }
}

impl<T: Ord> OrderedDictionaryContainer for SetLst<T> {
    #[inline]
    fn min(&self) -> Result<&T> {
        self.element(0)
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    fn min_n_remove(&mut self) -> Result<T> {
        self.list
            .remove_at(0)
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    fn max(&self) -> Result<&T> {
        self.list
            .iter()
            .last()
            .ok_or_else(|| ContainerError::empty(Self::NAME))
    }

    fn max_n_remove(&mut self) -> Result<T> {
        self.size()
            .checked_sub(1)
            .and_then(|last| self.list.remove_at(last))
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
            .and_then(|index| self.list.remove_at(index))
            .ok_or_else(|| ContainerError::not_found(Self::NAME))
    }

    fn successor(&self, key: &T) -> Result<&T> {
        self.probe(key)
            .strict_successor_index(self.size())
            .and_then(|index| self.element(index))
            .ok_or_else(|| ContainerError::not_found(Self::NAME))
    }

    fn successor_n_remove(&mut self, key: &T) -> Result<T> {
        let size = self.size();
        self.probe(key)
            .strict_successor_index(size)
            .and_then(|index| self.list.remove_at(index))
            .ok_or_else(|| ContainerError::not_found(Self::NAME))
    }
}

impl<T: Ord> std::ops::Index<usize> for SetLst<T> {
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

impl<T: std::fmt::Debug> std::fmt::Debug for SetLst<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.list.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for SetLst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        elements.sort();
        elements.dedup();
        Self {
            list: elements.into_iter().collect(),
        }
    }
}

impl<T: Ord> Extend<T> for SetLst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for SetLst<T> {
    type Item = T;
    type IntoIter = ListIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SetLst<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
