//! Integration tests for HeapVec and PqHeap.

#![cfg(feature = "heap")]

use corral::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn queue() -> PqHeap<i32> {
    [4, 9, 1, 7, 3].into_iter().collect()
}

// =============================================================================
// PqHeap
// =============================================================================

#[rstest]
fn test_tip_is_maximum(queue: PqHeap<i32>) {
    assert_eq!(queue.tip(), Ok(&9));
    assert_eq!(queue.front(), Ok(&9));
    assert_eq!(queue.size(), 5);
}

#[rstest]
fn test_tip_n_remove_yields_descending(mut queue: PqHeap<i32>) {
    let mut drained = Vec::new();
    while let Ok(tip) = queue.tip_n_remove() {
        drained.push(tip);
    }
    assert_eq!(drained, vec![9, 7, 4, 3, 1]);
    assert_eq!(queue.tip(), Err(ContainerError::empty("PqHeap")));
    assert_eq!(queue.remove_tip(), Err(ContainerError::empty("PqHeap")));
    assert_eq!(queue.capacity(), 2);
}

#[rstest]
fn test_duplicates_are_kept(mut queue: PqHeap<i32>) {
    queue.insert(9);
    assert_eq!(queue.size(), 6);
    assert_eq!(queue.tip_n_remove(), Ok(9));
    assert_eq!(queue.tip_n_remove(), Ok(9));
    assert_eq!(queue.tip(), Ok(&7));
}

#[rstest]
fn test_change_raises_element_to_tip(mut queue: PqHeap<i32>) {
    let position = queue.elements().position(|element| *element == 1).unwrap();
    assert_eq!(queue.change(position, 20), Ok(1));
    assert_eq!(queue.tip(), Ok(&20));
}

#[rstest]
fn test_change_lowers_tip(mut queue: PqHeap<i32>) {
    assert_eq!(queue.change(0, 0), Ok(9));
    assert_eq!(queue.tip(), Ok(&7));
    assert!(queue.exists(&0));
}

#[rstest]
fn test_change_out_of_range(mut queue: PqHeap<i32>) {
    assert_eq!(
        queue.change(5, 100),
        Err(ContainerError::out_of_range("PqHeap", 5, 5))
    );
    assert_eq!(queue.tip(), Ok(&9));
}

#[rstest]
fn test_clear_then_reuse(mut queue: PqHeap<i32>) {
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 2);
    queue.insert(5);
    assert_eq!(queue.tip(), Ok(&5));
}

#[rstest]
fn test_from_traversable_copies() {
    let list: List<u8> = [2, 8, 5].into_iter().collect();
    let queue = PqHeap::from_traversable(&list);
    assert_eq!(queue.tip(), Ok(&8));
    assert_eq!(list.size(), 3);
}

#[rstest]
fn test_capacity_tracks_size() {
    let mut queue = PqHeap::new();
    for value in 0..10 {
        queue.insert(value);
    }
    assert_eq!(queue.capacity(), 16);
    for _ in 0..8 {
        queue.remove_tip().unwrap();
    }
    assert_eq!(queue.capacity(), 4);
}

// =============================================================================
// HeapVec
// =============================================================================

#[rstest]
fn test_heap_vec_from_vector() {
    let vector: Vector<i32> = [1, 5, 2, 8, 3].into_iter().collect();
    let heap = HeapVec::from_vector(vector);
    assert!(heap.is_heap());
    assert_eq!(heap.front(), Ok(&8));
    assert_eq!(heap.size(), 5);
}

#[rstest]
fn test_heap_vec_sort_and_restore() {
    let mut heap: HeapVec<i32> = [6, 2, 9, 4].into_iter().collect();
    heap.sort();
    assert_eq!(heap.into_vector().as_slice(), &[2, 4, 6, 9]);
}

#[rstest]
fn test_heap_vec_mapping_then_heapify() {
    let mut heap: HeapVec<i32> = (1..=6).collect();
    heap.map(|element| *element = -*element);
    assert!(!heap.is_heap());
    heap.heapify();
    assert!(heap.is_heap());
    assert_eq!(heap.front(), Ok(&-1));
}

#[rstest]
fn test_heap_vec_clear() {
    let mut heap: HeapVec<i32> = (1..=6).collect();
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.back(), Err(ContainerError::empty("HeapVec")));
}
