//! Binary max-heaps and the priority queue built on them.
//!
//! - [`HeapVec`]: A vector kept in max-heap order, with in-place heapsort
//! - [`PqHeap`]: A [`PriorityQueue`] over an array heap with managed capacity
//!
//! The heap layout is the usual implicit tree: the children of position `i`
//! live at `2i + 1` and `2i + 2`, and every parent is `>=` its children.
//!
//! # Examples
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let mut queue: PqHeap<u32> = [4, 9, 1].into_iter().collect();
//! queue.insert(7);
//! assert_eq!(queue.tip(), Ok(&9));
//! assert_eq!(queue.tip_n_remove(), Ok(9));
//! assert_eq!(queue.tip_n_remove(), Ok(7));
//! ```

mod heap_vec;
mod pq_heap;

pub use heap_vec::HeapVec;
pub use pq_heap::PqHeap;

use crate::container::{ClearableContainer, LinearContainer};
use crate::error::Result;

/// A container that always exposes its greatest element.
///
/// # Errors
///
/// Tip queries fail with
/// [`ContainerError::EmptyCollection`](crate::ContainerError::EmptyCollection)
/// on an empty queue; [`PriorityQueue::change`] fails with
/// [`ContainerError::OutOfRange`](crate::ContainerError::OutOfRange) for a
/// position outside the queue. A failing call never modifies the queue.
pub trait PriorityQueue: LinearContainer + ClearableContainer {
    /// Returns the greatest element.
    ///
    /// # Errors
    ///
    /// Fails when the queue is empty.
    fn tip(&self) -> Result<&Self::Element>;

    /// Removes and returns the greatest element.
    ///
    /// # Errors
    ///
    /// Fails when the queue is empty.
    fn tip_n_remove(&mut self) -> Result<Self::Element>;

    /// Removes the greatest element.
    ///
    /// # Errors
    ///
    /// Fails when the queue is empty.
    #[inline]
    fn remove_tip(&mut self) -> Result<()> {
        self.tip_n_remove().map(drop)
    }

    /// Adds `element` to the queue.
    fn insert(&mut self, element: Self::Element);

    /// Replaces the element stored at position `index` with `element`,
    /// restores heap order and returns the replaced element.
    ///
    /// # Errors
    ///
    /// Fails when `index` is not smaller than the queue size.
    fn change(&mut self, index: usize, element: Self::Element) -> Result<Self::Element>;
}

/// Moves the element at `index` up until its parent is not smaller.
pub(crate) fn sift_up<T: Ord>(elements: &mut [T], mut index: usize) {
    while index > 0 {
        let parent = (index - 1) / 2;
        if elements[parent] >= elements[index] {
            break;
        }
        elements.swap(parent, index);
        index = parent;
    }
}

/// Moves the element at `index` down until no child within `elements` is
/// greater.
pub(crate) fn sift_down<T: Ord>(elements: &mut [T], mut index: usize) {
    let len = elements.len();
    loop {
        let left = 2 * index + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let larger = if right < len && elements[right] > elements[left] {
            right
        } else {
            left
        };
        if elements[index] >= elements[larger] {
            break;
        }
        elements.swap(index, larger);
        index = larger;
    }
}

/// Rearranges `elements` into max-heap order in O(n).
pub(crate) fn build_heap<T: Ord>(elements: &mut [T]) {
    for index in (0..elements.len() / 2).rev() {
        sift_down(elements, index);
    }
}

/// Returns `true` if `elements` is in max-heap order.
pub(crate) fn is_heap<T: Ord>(elements: &[T]) -> bool {
    (1..elements.len()).all(|index| elements[(index - 1) / 2] >= elements[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![1, 2])]
    #[case(vec![3, 1, 4, 1, 5, 9, 2, 6])]
    #[case(vec![9, 8, 7, 6, 5, 4, 3, 2, 1])]
    #[case(vec![1, 2, 3, 4, 5, 6, 7, 8, 9])]
    fn test_build_heap_establishes_order(#[case] mut elements: Vec<i32>) {
        build_heap(&mut elements);
        assert!(is_heap(&elements));
    }

    #[rstest]
    fn test_sift_up_after_push() {
        let mut elements = vec![9, 5, 8, 1];
        elements.push(10);
        let last = elements.len() - 1;
        sift_up(&mut elements, last);
        assert_eq!(elements[0], 10);
        assert!(is_heap(&elements));
    }

    #[rstest]
    fn test_sift_down_after_root_replacement() {
        let mut elements = vec![9, 5, 8, 1, 2];
        elements[0] = 0;
        sift_down(&mut elements, 0);
        assert_eq!(elements[0], 8);
        assert!(is_heap(&elements));
    }

    #[rstest]
    fn test_is_heap_rejects_violation() {
        assert!(!is_heap(&[1, 2]));
        assert!(is_heap(&[2, 2, 2]));
    }
}
