//! Container traits shared by every data structure in the crate.
//!
//! The hierarchy mirrors the capabilities a container can offer:
//!
//! - [`Container`]: Size queries and a name used in error reports
//! - [`ClearableContainer`]: Reset to the canonical empty state
//! - [`ResizableContainer`]: Change the number of held elements
//! - [`Traversable`]: Visit each element once, in a defined order
//! - [`PreOrderTraversable`], [`PostOrderTraversable`]: Fixed visiting orders
//! - [`Mappable`]: Visit each element once, replacing it in place
//! - [`PreOrderMappable`], [`PostOrderMappable`]: Fixed mapping orders
//! - [`LinearContainer`]: Indexed read access
//! - [`MutableLinearContainer`]: Indexed write access
//! - [`SortableLinearContainer`]: In-place sorting
//! - [`DictionaryContainer`]: Keyed insertion and removal
//! - [`OrderedDictionaryContainer`]: Order statistics (min, max, neighbours)
//!
//! # Examples
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let vector: Vector<i32> = (1..=4).collect();
//! let sum = vector.fold(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 10);
//!
//! let mut set = SetVec::new();
//! set.insert_all(&vector);
//! assert_eq!(set.min(), Ok(&1));
//! ```

mod dictionary;
mod linear;
pub(crate) mod load;
mod mappable;
mod traversable;

pub use dictionary::{DictionaryContainer, OrderedDictionaryContainer};
pub use linear::{LinearContainer, MutableLinearContainer, SortableLinearContainer};
pub use mappable::{Mappable, PostOrderMappable, PreOrderMappable};
pub use traversable::{PostOrderTraversable, PreOrderTraversable, Traversable};

/// The root of the container hierarchy.
///
/// A container holds a finite number of elements of a single type.
pub trait Container {
    /// The type of the held elements.
    type Element;

    /// Name of the container type, reported in [`ContainerError`](crate::ContainerError)s.
    const NAME: &'static str;

    /// Returns the number of held elements.
    fn size(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A container that can be reset to its canonical empty state.
pub trait ClearableContainer: Container {
    /// Removes every element.
    ///
    /// Implementations release oversized storage rather than only resetting
    /// their size, so a cleared container is indistinguishable from a newly
    /// created one.
    fn clear(&mut self);
}

/// A container whose size can be changed directly.
pub trait ResizableContainer: ClearableContainer {
    /// Changes the size of the container to `new_size`.
    ///
    /// Resizing to zero is equivalent to [`ClearableContainer::clear`].
    fn resize(&mut self, new_size: usize);
}
