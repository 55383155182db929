//! # corral
//!
//! Generic in-memory containers built around a shared trait hierarchy.
//!
//! ## Overview
//!
//! Every container answers to the same small set of capability traits, so
//! algorithms written against [`container::Traversable`] or
//! [`container::OrderedDictionaryContainer`] work with any of them:
//!
//! - **Linear containers**: [`Vector`](linear::Vector), an explicitly resized
//!   array, and [`List`](linear::List), a singly-linked list
//! - **Heaps**: [`HeapVec`](heap::HeapVec), a vector in max-heap order, and
//!   [`PqHeap`](heap::PqHeap), a priority queue with managed capacity
//! - **Ordered sets**: [`SetVec`](set::SetVec), a sorted circular buffer with
//!   O(log n) search, and [`SetLst`](set::SetLst), a sorted linked list
//!
//! Failing queries return [`ContainerError`] and never modify the container.
//!
//! ## Feature Flags
//!
//! - `container`: The trait hierarchy
//! - `linear`: `Vector` and `List`
//! - `heap`: `HeapVec`, `PqHeap` and the `PriorityQueue` trait
//! - `set`: `SetVec` and `SetLst`
//! - `full`: Enable all features (the default)
//!
//! ## Example
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let mut set = SetVec::new();
//! set.insert_all_owned([5, 3, 8, 1]);
//!
//! assert_eq!(set.min(), Ok(&1));
//! assert_eq!(set.successor(&3), Ok(&5));
//! assert_eq!(
//!     set.predecessor(&1),
//!     Err(ContainerError::not_found("SetVec"))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled container, the container traits and
/// [`ContainerError`](crate::ContainerError).
///
/// # Usage
///
/// ```rust
/// use corral::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ContainerError;

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "linear")]
    pub use crate::linear::*;

    #[cfg(feature = "heap")]
    pub use crate::heap::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;
}

pub mod error;

pub use error::{ContainerError, Result};

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "linear")]
pub mod linear;

#[cfg(feature = "heap")]
pub mod heap;

#[cfg(feature = "set")]
pub mod set;
