//! Ordered sets of unique keys.
//!
//! Both sets implement [`OrderedDictionaryContainer`] with identical
//! observable behavior and differ only in cost:
//!
//! - [`SetVec`]: A circular array buffer with binary search; O(log n) queries
//! - [`SetLst`]: A sorted singly-linked list; O(n) per operation
//!
//! Both locate a key the same way: a search reports either the position of
//! the key or the number of held keys smaller than it, and every neighbour
//! query is derived from that single answer in O(1).
//!
//! # Examples
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let array: SetVec<i32> = [4, 2, 9].into_iter().collect();
//! let chain: SetLst<i32> = SetLst::from_traversable(&array);
//!
//! assert!(array.equals(&chain));
//! assert_eq!(array.successor(&4), chain.successor(&4));
//! ```
//!
//! [`OrderedDictionaryContainer`]: crate::container::OrderedDictionaryContainer

mod lst;
mod vec;

pub use lst::SetLst;
pub use vec::{IntoIter as SetVecIntoIter, Iter as SetVecIter, SetVec};

/// Where a key sits relative to the held keys, by logical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The key is held at this position.
    Found(usize),
    /// The key is absent; this many held keys are smaller than it.
    Vacant(usize),
}

impl Probe {
    /// Position of the key itself.
    pub(crate) const fn exists_index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::Vacant(_) => None,
        }
    }

    /// Position of the largest key `<=` the probed one.
    pub(crate) const fn predecessor_or_equal_index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::Vacant(smaller) => smaller.checked_sub(1),
        }
    }

    /// Position of the largest key `<` the probed one.
    pub(crate) const fn strict_predecessor_index(self) -> Option<usize> {
        match self {
            Self::Found(index) | Self::Vacant(index) => index.checked_sub(1),
        }
    }

    /// Position of the smallest key `>` the probed one, among `size` keys.
    pub(crate) const fn strict_successor_index(self, size: usize) -> Option<usize> {
        let next = match self {
            Self::Found(index) => index + 1,
            Self::Vacant(smaller) => smaller,
        };
        if next < size { Some(next) } else { None }
    }

    /// Position at which an absent key would be stored.
    pub(crate) const fn insertion_index(self) -> usize {
        match self.predecessor_or_equal_index() {
            Some(index) => index + 1,
            None => 0,
        }
    }
}
