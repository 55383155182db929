//! Integration tests for the behavior the container traits provide to every
//! implementation: bulk dictionary operations and generic algorithms.

#![cfg(all(feature = "linear", feature = "set"))]

use corral::prelude::*;
use rstest::rstest;

fn total<C>(container: &C) -> i64
where
    C: Traversable<Element = i64>,
{
    container.fold(0, |sum, element| sum + element)
}

fn drain_ascending<S>(mut set: S) -> Vec<S::Element>
where
    S: OrderedDictionaryContainer,
{
    let mut drained = Vec::with_capacity(set.size());
    while let Ok(key) = set.min_n_remove() {
        drained.push(key);
    }
    drained
}

#[rstest]
fn test_fold_is_container_agnostic() {
    let values = [4_i64, -2, 9, 4];
    let vector: Vector<i64> = values.into_iter().collect();
    let list: List<i64> = values.into_iter().collect();
    let array: SetVec<i64> = values.into_iter().collect();
    let chain: SetLst<i64> = values.into_iter().collect();
    assert_eq!(total(&vector), 15);
    assert_eq!(total(&list), 15);
    assert_eq!(total(&array), 11);
    assert_eq!(total(&chain), 11);
}

#[rstest]
fn test_drain_is_container_agnostic() {
    let array: SetVec<u8> = [3, 1, 2].into_iter().collect();
    let chain: SetLst<u8> = [3, 1, 2].into_iter().collect();
    assert_eq!(drain_ascending(array), vec![1, 2, 3]);
    assert_eq!(drain_ascending(chain), vec![1, 2, 3]);
}

#[rstest]
#[case(vec![1, 2, 3], true)]
#[case(vec![1, 2, 2], false)]
#[case(vec![5, 1, 5], false)]
#[case(vec![], true)]
fn test_insert_all_reports_every_success(#[case] values: Vec<i32>, #[case] expected: bool) {
    let source: Vector<i32> = values.into();
    let mut set = SetVec::new();
    set.insert(5);
    assert_eq!(set.insert_all(&source), expected);
    for value in &source {
        assert!(set.exists(value));
    }
}

#[rstest]
#[case(vec![1, 2], true)]
#[case(vec![5, 2], true)]
#[case(vec![5, 5], false)]
#[case(vec![], false)]
fn test_insert_some_reports_any_success(#[case] values: Vec<i32>, #[case] expected: bool) {
    let mut set = SetLst::new();
    set.insert(5);
    assert_eq!(set.insert_some_owned(values), expected);
}

#[rstest]
fn test_insert_all_owned_moves_values() {
    let mut set = SetVec::new();
    let words = vec![String::from("b"), String::from("a"), String::from("b")];
    assert!(!set.insert_all_owned(words));
    assert_eq!(set.size(), 2);
    assert_eq!(set.min(), Ok(&String::from("a")));
}

#[rstest]
fn test_insert_some_copies_from_list() {
    let source: List<i32> = [7, 8].into_iter().collect();
    let mut set: SetVec<i32> = [7].into_iter().collect();
    assert!(set.insert_some(&source));
    assert!(!set.insert_some(&source));
    assert_eq!(source.size(), 2);
}

#[rstest]
fn test_remove_all_visits_every_element() {
    let mut set: SetVec<i32> = (1..=5).collect();
    let doomed: List<i32> = [2, 9, 4].into_iter().collect();
    assert!(!set.remove_all(&doomed));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
}

#[rstest]
fn test_remove_some() {
    let mut set: SetLst<i32> = (1..=5).collect();
    let absent: Vector<i32> = [0, 6].into_iter().collect();
    assert!(!set.remove_some(&absent));
    let mixed: Vector<i32> = [0, 3].into_iter().collect();
    assert!(set.remove_some(&mixed));
    assert_eq!(set.size(), 4);
    let all: Vector<i32> = [1, 2, 4, 5].into_iter().collect();
    assert!(set.remove_all(&all));
    assert!(set.is_empty());
}

#[rstest]
fn test_errors_render_container_names() {
    let set: SetLst<i32> = SetLst::new();
    let error = set.max().unwrap_err();
    assert_eq!(error.to_string(), "SetLst: the container is empty");
    let vector: Vector<i32> = Vector::new();
    let error = vector.get(2).unwrap_err();
    assert_eq!(error.to_string(), "Vector: index 2 is out of range for size 0");
}
