//! Mappable containers - replacing elements in place.
//!
//! A `Mappable` visits each element once and may rewrite it. Ordered sets
//! are deliberately not mappable: rewriting an element in place could break
//! their ordering.

use super::Traversable;

/// A container whose elements can be rewritten in place while visiting them.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut vector: Vector<i32> = (1..=3).collect();
/// vector.map(|element| *element *= 10);
/// assert_eq!(vector.fold(0, |accumulator, element| accumulator + element), 60);
/// ```
pub trait Mappable: Traversable {
    /// Returns an iterator over mutable references, in traversal order.
    fn elements_mut(&mut self) -> impl Iterator<Item = &mut Self::Element>;

    /// Applies `function` to each element in traversal order.
    #[inline]
    fn map<F>(&mut self, function: F)
    where
        F: FnMut(&mut Self::Element),
    {
        self.elements_mut().for_each(function);
    }
}

/// A mappable container rewritten front to back.
pub trait PreOrderMappable: Mappable {
    /// Applies `function` to each element, front to back.
    #[inline]
    fn pre_order_map<F>(&mut self, function: F)
    where
        F: FnMut(&mut Self::Element),
    {
        self.elements_mut().for_each(function);
    }
}

/// A mappable container rewritten back to front.
pub trait PostOrderMappable: Mappable {
    /// Returns an iterator over mutable references, back to front.
    fn post_order_elements_mut(&mut self) -> impl Iterator<Item = &mut Self::Element>;

    /// Applies `function` to each element, back to front.
    #[inline]
    fn post_order_map<F>(&mut self, function: F)
    where
        F: FnMut(&mut Self::Element),
    {
        self.post_order_elements_mut().for_each(function);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use rstest::rstest;

    struct Cells(Vec<u32>);

    impl Container for Cells {
        type Element = u32;
        const NAME: &'static str = "Cells";

        fn size(&self) -> usize {
            self.0.len()
        }
    }

    impl Traversable for Cells {
        fn elements(&self) -> impl Iterator<Item = &u32> {
            self.0.iter()
        }
    }

    impl Mappable for Cells {
        fn elements_mut(&mut self) -> impl Iterator<Item = &mut u32> {
            self.0.iter_mut()
        }
    }

    impl PreOrderMappable for Cells {}

    impl PostOrderMappable for Cells {
        fn post_order_elements_mut(&mut self) -> impl Iterator<Item = &mut u32> {
            self.0.iter_mut().rev()
        }
    }

    #[rstest]
    fn test_map_rewrites_every_element() {
        let mut cells = Cells(vec![1, 2, 3]);
        cells.map(|element| *element += 1);
        assert_eq!(cells.0, vec![2, 3, 4]);
    }

    #[rstest]
    fn test_pre_order_map_visits_front_to_back() {
        let mut cells = Cells(vec![0, 0, 0]);
        let mut counter = 0;
        cells.pre_order_map(|element| {
            counter += 1;
            *element = counter;
        });
        assert_eq!(cells.0, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_post_order_map_visits_back_to_front() {
        let mut cells = Cells(vec![0, 0, 0]);
        let mut counter = 0;
        cells.post_order_map(|element| {
            counter += 1;
            *element = counter;
        });
        assert_eq!(cells.0, vec![3, 2, 1]);
    }
}
