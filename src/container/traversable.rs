//! Traversable containers - visiting each element once.
//!
//! A `Traversable` produces every element exactly once, in an order fixed by
//! the container. Folding and linear membership tests are derived from it.
//!
//! # Laws
//!
//! ## Consistency between `traverse` and `fold`
//!
//! ```text
//! container.fold(init, f) == { let mut acc = init; container.traverse(|e| acc = f(acc, e)); acc }
//! ```
//!
//! ## Consistency with `size`
//!
//! ```text
//! container.fold(0, |count, _| count + 1) == container.size()
//! ```
//!
//! ## Pre-order and post-order are mirror images
//!
//! ```text
//! container.post_order_fold(vec![], push) == reverse(container.pre_order_fold(vec![], push))
//! ```

use super::Container;

/// A container whose elements can be visited one by one.
///
/// # Required Methods
///
/// - `elements`: An iterator over the elements in traversal order
///
/// # Provided Methods
///
/// - `traverse`: Apply a function to each element
/// - `fold`: Accumulate the elements into a single value
/// - `exists`: Check whether an element equal to a value is held
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let list: List<i32> = [1, 2, 3].into_iter().collect();
///
/// let mut seen = Vec::new();
/// list.traverse(|element| seen.push(*element));
/// assert_eq!(seen, vec![1, 2, 3]);
///
/// assert!(list.exists(&2));
/// assert!(!list.exists(&9));
/// ```
pub trait Traversable: Container {
    /// Returns an iterator over the elements in traversal order.
    fn elements(&self) -> impl Iterator<Item = &Self::Element>;

    /// Applies `function` to each element in traversal order.
    #[inline]
    fn traverse<F>(&self, function: F)
    where
        F: FnMut(&Self::Element),
    {
        self.elements().for_each(function);
    }

    /// Folds the elements in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::prelude::*;
    ///
    /// let vector: Vector<i32> = (1..=3).collect();
    /// let rendered = vector.fold(String::new(), |accumulator, element| {
    ///     format!("{accumulator}{element}")
    /// });
    /// assert_eq!(rendered, "123");
    /// ```
    #[inline]
    fn fold<A, F>(&self, init: A, function: F) -> A
    where
        F: FnMut(A, &Self::Element) -> A,
    {
        self.elements().fold(init, function)
    }

    /// Returns `true` if an element equal to `value` is held.
    ///
    /// The provided implementation is a linear scan. Ordered containers
    /// override it with their own search.
    #[inline]
    fn exists(&self, value: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.elements().any(|element| element == value)
    }
}

/// A traversable container visited front to back.
pub trait PreOrderTraversable: Traversable {
    /// Applies `function` to each element, front to back.
    #[inline]
    fn pre_order_traverse<F>(&self, function: F)
    where
        F: FnMut(&Self::Element),
    {
        self.elements().for_each(function);
    }

    /// Folds the elements front to back.
    #[inline]
    fn pre_order_fold<A, F>(&self, init: A, function: F) -> A
    where
        F: FnMut(A, &Self::Element) -> A,
    {
        self.elements().fold(init, function)
    }
}

/// A traversable container visited back to front.
pub trait PostOrderTraversable: Traversable {
    /// Returns an iterator over the elements, back to front.
    fn post_order_elements(&self) -> impl Iterator<Item = &Self::Element>;

    /// Applies `function` to each element, back to front.
    #[inline]
    fn post_order_traverse<F>(&self, function: F)
    where
        F: FnMut(&Self::Element),
    {
        self.post_order_elements().for_each(function);
    }

    /// Folds the elements back to front.
    #[inline]
    fn post_order_fold<A, F>(&self, init: A, function: F) -> A
    where
        F: FnMut(A, &Self::Element) -> A,
    {
        self.post_order_elements().fold(init, function)
    }
}
