//! Load-factor policy shared by the array-backed dynamic containers.
//!
//! A container of capacity `C` holding `n` elements is kept inside the band
//! `0.25 < n / C < 0.9`, except at the capacity floor of 2. Ratios are
//! compared in integer arithmetic.

#![cfg_attr(not(any(feature = "heap", feature = "set")), allow(dead_code))]

/// The smallest capacity an array-backed container ever owns.
pub(crate) const MIN_CAPACITY: usize = 2;

/// What a container must do to its storage after its size changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Adjustment {
    /// Storage is below the floor: discard it and start over empty.
    Reset,
    /// Reallocate to exactly this many slots.
    Resize(usize),
}

/// Returns the storage adjustment required for `size` elements in
/// `capacity` slots, or `None` when the load factor is inside the band.
#[inline]
pub(crate) const fn adjustment(size: usize, capacity: usize) -> Option<Adjustment> {
    if capacity < MIN_CAPACITY {
        Some(Adjustment::Reset)
    } else if size * 4 <= capacity && capacity > MIN_CAPACITY {
        let halved = capacity / 2;
        Some(Adjustment::Resize(if halved > MIN_CAPACITY {
            halved
        } else {
            MIN_CAPACITY
        }))
    } else if size * 10 >= capacity * 9 {
        Some(Adjustment::Resize(capacity * 2))
    } else {
        None
    }
}

/// Returns the capacity a freshly built container holding `size` elements
/// starts with: the first doubling of the floor that satisfies the band.
#[inline]
pub(crate) const fn fitting_capacity(size: usize) -> usize {
    let mut capacity = MIN_CAPACITY;
    while size * 10 >= capacity * 9 {
        capacity *= 2;
    }
    capacity
}

/// Returns `true` if `size` elements in `capacity` slots satisfy the band.
#[cfg(any(test, debug_assertions))]
#[cfg_attr(not(feature = "set"), allow(dead_code))]
#[inline]
pub(crate) const fn within_band(size: usize, capacity: usize) -> bool {
    capacity == MIN_CAPACITY || (size * 4 > capacity && size * 10 < capacity * 9)
}
