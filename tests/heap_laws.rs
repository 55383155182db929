//! Property-based tests for HeapVec and PqHeap.
//!
//! `PqHeap` is replayed against `std::collections::BinaryHeap`.

#![cfg(feature = "heap")]

use std::collections::BinaryHeap;

use corral::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum QueueOperation {
    Insert(i32),
    TipNRemove,
    Change(usize, i32),
}

fn queue_operation() -> impl Strategy<Value = QueueOperation> {
    prop_oneof![
        4 => (-1000_i32..1000).prop_map(QueueOperation::Insert),
        2 => Just(QueueOperation::TipNRemove),
        1 => (0_usize..64, -1000_i32..1000)
            .prop_map(|(index, value)| QueueOperation::Change(index, value)),
    ]
}

fn in_band(queue: &PqHeap<i32>) -> bool {
    let (size, capacity) = (queue.size(), queue.capacity());
    capacity >= 2 && (capacity == 2 || (size * 4 > capacity && size * 10 < capacity * 9))
}

fn heap_ordered(elements: &[i32]) -> bool {
    (1..elements.len()).all(|index| elements[(index - 1) / 2] >= elements[index])
}

proptest! {
    #[test]
    fn prop_queue_matches_binary_heap(
        operations in prop::collection::vec(queue_operation(), 0..300)
    ) {
        let mut queue = PqHeap::new();
        let mut model = BinaryHeap::new();
        for operation in operations {
            match operation {
                QueueOperation::Insert(value) => {
                    queue.insert(value);
                    model.push(value);
                }
                QueueOperation::TipNRemove => {
                    prop_assert_eq!(queue.tip_n_remove().ok(), model.pop());
                }
                QueueOperation::Change(index, value) => {
                    let expected = queue.get(index).ok().copied();
                    prop_assert_eq!(queue.change(index, value).ok(), expected);
                    if let Some(previous) = expected {
                        // Rebuild the model with the same multiset.
                        let mut values = model.into_vec();
                        if let Some(slot) = values.iter().position(|held| *held == previous) {
                            values[slot] = value;
                        }
                        model = values.into();
                    }
                }
            }
            prop_assert_eq!(queue.tip().ok(), model.peek());
            prop_assert_eq!(queue.size(), model.len());
            prop_assert!(in_band(&queue));
            let layout: Vec<i32> = queue.elements().copied().collect();
            prop_assert!(heap_ordered(&layout));
        }
    }

    #[test]
    fn prop_drain_is_sorted_descending(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut queue: PqHeap<i32> = values.iter().copied().collect();
        let mut drained = Vec::with_capacity(values.len());
        while let Ok(tip) = queue.tip_n_remove() {
            drained.push(tip);
        }
        let mut expected = values;
        expected.sort_unstable_by(|left, right| right.cmp(left));
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prop_heap_vec_sort_matches_std(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut heap: HeapVec<i32> = values.iter().copied().collect();
        prop_assert!(heap.is_heap());
        heap.sort();
        let mut expected = values;
        expected.sort_unstable();
        let sorted = heap.into_vector();
        prop_assert_eq!(sorted.as_slice(), expected.as_slice());
    }
}
