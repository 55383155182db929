//! Dictionary containers - keyed insertion, removal and order statistics.

use super::Traversable;
use crate::error::Result;

/// A container of unique keys supporting insertion and removal.
///
/// # Required Methods
///
/// - `insert`: Add a key, reporting whether it was new
/// - `remove`: Drop a key, reporting whether it was held
///
/// # Provided Methods
///
/// - `insert_all`, `insert_all_owned`: `true` iff every insertion succeeded
/// - `insert_some`, `insert_some_owned`: `true` iff at least one succeeded
/// - `remove_all`: `true` iff every removal succeeded
/// - `remove_some`: `true` iff at least one succeeded
///
/// Bulk operations always visit every source element; they never stop at
/// the first failure.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut set = SetLst::new();
/// assert!(set.insert_all_owned([3, 1, 2]));
/// assert!(!set.insert_all_owned([2, 4]));
/// assert_eq!(set.size(), 4);
///
/// let doomed: Vector<i32> = [1, 9].into_iter().collect();
/// assert!(set.remove_some(&doomed));
/// assert!(!set.exists(&1));
/// ```
pub trait DictionaryContainer: Traversable {
    /// Inserts `value`, returning `false` if an equal key was already held.
    fn insert(&mut self, value: Self::Element) -> bool;

    /// Removes the key equal to `value`, returning `false` if none was held.
    fn remove(&mut self, value: &Self::Element) -> bool;

    /// Inserts a clone of every element of `source`.
    fn insert_all<C>(&mut self, source: &C) -> bool
    where
        C: Traversable<Element = Self::Element>,
        Self::Element: Clone,
    {
        source.fold(true, |all, element| {
            let inserted = self.insert(element.clone());
            all && inserted
        })
    }

    /// Inserts every element of `values`, taking ownership.
    fn insert_all_owned<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
        Self: Sized,
    {
        values.into_iter().fold(true, |all, element| {
            let inserted = self.insert(element);
            all && inserted
        })
    }

    /// Inserts a clone of every element of `source`.
    fn insert_some<C>(&mut self, source: &C) -> bool
    where
        C: Traversable<Element = Self::Element>,
        Self::Element: Clone,
    {
        source.fold(false, |any, element| {
            let inserted = self.insert(element.clone());
            any || inserted
        })
    }

    /// Inserts every element of `values`, taking ownership.
    fn insert_some_owned<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
        Self: Sized,
    {
        values.into_iter().fold(false, |any, element| {
            let inserted = self.insert(element);
            any || inserted
        })
    }

    /// Removes every key held by `source`.
    fn remove_all<C>(&mut self, source: &C) -> bool
    where
        C: Traversable<Element = Self::Element>,
    {
        source.fold(true, |all, element| {
            let removed = self.remove(element);
            all && removed
        })
    }

    /// Removes every key held by `source`.
    fn remove_some<C>(&mut self, source: &C) -> bool
    where
        C: Traversable<Element = Self::Element>,
    {
        source.fold(false, |any, element| {
            let removed = self.remove(element);
            any || removed
        })
    }
}

/// A dictionary whose keys are totally ordered.
///
/// Predecessor and successor queries are strict: the predecessor of `key` is
/// the largest held key `< key`, whether or not `key` itself is held.
///
/// # Errors
///
/// - Min/max queries fail with
///   [`ContainerError::EmptyCollection`](crate::ContainerError::EmptyCollection)
///   on an empty container.
/// - Neighbour queries fail with
///   [`ContainerError::NotFound`](crate::ContainerError::NotFound) when no key
///   satisfies the relation.
///
/// A failing call never modifies the container.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut set: SetVec<i32> = [5, 3, 8, 1].into_iter().collect();
/// assert_eq!(set.predecessor(&5), Ok(&3));
/// assert_eq!(set.successor(&5), Ok(&8));
/// assert!(set.predecessor(&1).is_err());
///
/// assert_eq!(set.max_n_remove(), Ok(8));
/// assert_eq!(set.max(), Ok(&5));
/// ```
pub trait OrderedDictionaryContainer: DictionaryContainer {
    /// Returns the smallest key.
    ///
    /// # Errors
    ///
    /// Fails when the container is empty.
    fn min(&self) -> Result<&Self::Element>;

    /// Removes and returns the smallest key.
    ///
    /// # Errors
    ///
    /// Fails when the container is empty.
    fn min_n_remove(&mut self) -> Result<Self::Element>;

    /// Removes the smallest key.
    ///
    /// # Errors
    ///
    /// Fails when the container is empty.
    #[inline]
    fn remove_min(&mut self) -> Result<()> {
        self.min_n_remove().map(drop)
    }

    /// Returns the largest key.
    ///
    /// # Errors
    ///
    /// Fails when the container is empty.
    fn max(&self) -> Result<&Self::Element>;

    /// Removes and returns the largest key.
    ///
    /// # Errors
    ///
    /// Fails when the container is empty.
    fn max_n_remove(&mut self) -> Result<Self::Element>;

    /// Removes the largest key.
    ///
    /// # Errors
    ///
    /// Fails when the container is empty.
    #[inline]
    fn remove_max(&mut self) -> Result<()> {
        self.max_n_remove().map(drop)
    }

    /// Returns the largest key strictly smaller than `key`.
    ///
    /// # Errors
    ///
    /// Fails when every held key is `>= key`.
    fn predecessor(&self, key: &Self::Element) -> Result<&Self::Element>;

    /// Removes and returns the largest key strictly smaller than `key`.
    ///
    /// # Errors
    ///
    /// Fails when every held key is `>= key`.
    fn predecessor_n_remove(&mut self, key: &Self::Element) -> Result<Self::Element>;

    /// Removes the largest key strictly smaller than `key`.
    ///
    /// # Errors
    ///
    /// Fails when every held key is `>= key`.
    #[inline]
    fn remove_predecessor(&mut self, key: &Self::Element) -> Result<()> {
        self.predecessor_n_remove(key).map(drop)
    }

    /// Returns the smallest key strictly greater than `key`.
    ///
    /// # Errors
    ///
    /// Fails when every held key is `<= key`.
    fn successor(&self, key: &Self::Element) -> Result<&Self::Element>;

    /// Removes and returns the smallest key strictly greater than `key`.
    ///
    /// # Errors
    ///
    /// Fails when every held key is `<= key`.
    fn successor_n_remove(&mut self, key: &Self::Element) -> Result<Self::Element>;

    /// Removes the smallest key strictly greater than `key`.
    ///
    /// # Errors
    ///
    /// Fails when every held key is `<= key`.
    #[inline]
    fn remove_successor(&mut self, key: &Self::Element) -> Result<()> {
        self.successor_n_remove(key).map(drop)
    }
}
