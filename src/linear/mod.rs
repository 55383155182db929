//! Linear containers.
//!
//! - [`Vector`]: Explicitly resizable array with O(1) indexed access
//! - [`List`]: Singly-linked list with O(1) front operations
//!
//! Both implement the full linear hierarchy ([`LinearContainer`],
//! [`MutableLinearContainer`], pre-order and post-order traversal and
//! mapping), so they compare equal to each other element-wise:
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let vector: Vector<i32> = (1..=3).collect();
//! let list = List::from_traversable(&vector);
//! assert!(list.equals(&vector));
//! ```
//!
//! [`LinearContainer`]: crate::container::LinearContainer
//! [`MutableLinearContainer`]: crate::container::MutableLinearContainer

mod list;
mod vector;

pub use list::{IntoIter as ListIntoIter, Iter as ListIter, IterMut as ListIterMut, List};
pub use vector::Vector;
