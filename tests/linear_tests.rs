//! Integration tests for Vector and List.

#![cfg(feature = "linear")]

use corral::prelude::*;
use rstest::rstest;

// =============================================================================
// Vector
// =============================================================================

#[rstest]
fn test_vector_new_is_empty() {
    let vector: Vector<u8> = Vector::new();
    assert!(vector.is_empty());
    assert_eq!(vector.front(), Err(ContainerError::empty("Vector")));
}

#[rstest]
fn test_vector_from_traversable_copies_list_order() {
    let list: List<i32> = [3, 1, 2].into_iter().collect();
    let vector = Vector::from_traversable(&list);
    assert_eq!(vector.as_slice(), &[3, 1, 2]);
    assert!(vector.equals(&list));
}

#[rstest]
fn test_vector_write_through_index() {
    let mut vector: Vector<i32> = Vector::with_len(3);
    vector[0] = 4;
    *vector.back_mut().unwrap() = 6;
    *vector.get_mut(1).unwrap() = 5;
    assert_eq!(vector.as_slice(), &[4, 5, 6]);
    assert_eq!(
        vector.get_mut(3),
        Err(ContainerError::out_of_range("Vector", 3, 3))
    );
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![1])]
#[case(vec![3, 1, 2], vec![1, 2, 3])]
#[case(vec![5, 5, -1, 0, 5], vec![-1, 0, 5, 5, 5])]
fn test_vector_sort(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    let mut vector: Vector<i32> = input.into();
    vector.sort();
    assert_eq!(vector.as_slice(), expected.as_slice());
}

#[rstest]
fn test_vector_resize_then_clear() {
    let mut vector: Vector<String> = ["a", "b"].into_iter().map(String::from).collect();
    vector.resize(3);
    assert_eq!(vector.back(), Ok(&String::new()));
    vector.resize(1);
    assert_eq!(vector.as_slice(), &["a".to_string()]);
    vector.clear();
    assert!(vector.is_empty());
}

#[rstest]
fn test_vector_map_orders() {
    let mut vector: Vector<i32> = (1..=4).collect();
    let mut visited = Vec::new();
    vector.post_order_map(|element| {
        visited.push(*element);
        *element *= -1;
    });
    assert_eq!(visited, vec![4, 3, 2, 1]);
    vector.pre_order_map(|element| *element += 10);
    assert_eq!(vector.as_slice(), &[9, 8, 7, 6]);
}

// =============================================================================
// List
// =============================================================================

#[rstest]
fn test_list_front_and_back_operations() {
    let mut list = List::new();
    list.insert_at_front(2);
    list.insert_at_front(1);
    list.insert_at_back(3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(list.back_n_remove(), Ok(3));
    assert_eq!(list.front_n_remove(), Ok(1));
    assert_eq!(list.remove_from_back(), Ok(()));
    assert_eq!(list.remove_from_front(), Err(ContainerError::empty("List")));
    assert_eq!(list.back_n_remove(), Err(ContainerError::empty("List")));
}

#[rstest]
fn test_list_indexed_access() {
    let mut list: List<char> = "xyz".chars().collect();
    assert_eq!(list.get(2), Ok(&'z'));
    assert_eq!(list[0], 'x');
    *list.get_mut(1).unwrap() = 'Y';
    assert_eq!(list.iter().collect::<String>(), "xYz");
    assert_eq!(
        list.get(3),
        Err(ContainerError::out_of_range("List", 3, 3))
    );
}

#[rstest]
fn test_list_clone_is_deep() {
    let original: List<String> = ["one", "two"].into_iter().map(String::from).collect();
    let mut copy = original.clone();
    copy.map(|word| word.push('!'));
    assert_eq!(original.front(), Ok(&"one".to_string()));
    assert_eq!(copy.front(), Ok(&"one!".to_string()));
    assert_ne!(copy, original);
}

#[rstest]
fn test_list_extend_after_removals() {
    let mut list: List<i32> = (0..5).collect();
    list.remove_from_back().unwrap();
    list.extend([10, 11]);
    assert_eq!(list.size(), 6);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 10, 11]);
    assert_eq!(list.iter().len(), 6);
}

#[rstest]
fn test_list_and_vector_compare_by_elements() {
    let list: List<i32> = (1..=3).collect();
    let vector: Vector<i32> = (1..=3).collect();
    assert!(list.equals(&vector));
    assert!(vector.equals(&list));
    let shorter: Vector<i32> = (1..=2).collect();
    assert!(!list.equals(&shorter));
}

#[rstest]
fn test_list_clear_on_long_chain() {
    let mut list: List<u32> = (0..100_000).collect();
    list.clear();
    assert!(list.is_empty());
    list.insert_at_back(7);
    assert_eq!(list.front(), Ok(&7));
}
