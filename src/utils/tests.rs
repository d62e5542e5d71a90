use std::collections::BTreeSet;

use crate::utils::{Selections, UtilsError, build_pool, merge_distinct, validate_integer_count};

#[test]
fn test_selections_order() {
    let selections: Vec<Vec<i64>> = Selections::new(&[1, 2], 2).collect();
    assert_eq!(
        selections,
        vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]]
    );
}

#[test]
fn test_selections_count() {
    let items = [1, 2, 3, 4, 5];
    assert_eq!(Selections::new(&items, 3).count(), 125);
}

#[test]
fn test_selections_zero_length() {
    let selections: Vec<Vec<i64>> = Selections::new(&[1, 2, 3], 0).collect();
    assert_eq!(selections, vec![Vec::<i64>::new()]);
}

#[test]
fn test_selections_from_empty_items() {
    let items: [i64; 0] = [];
    assert_eq!(Selections::new(&items, 2).count(), 0);
}

#[test]
fn test_build_pool() {
    let excluded: BTreeSet<i64> = [2, 4].into_iter().collect();
    assert_eq!(build_pool(5, &excluded), vec![1, 3, 5]);
    assert_eq!(build_pool(0, &BTreeSet::new()), Vec::<i64>::new());
    assert_eq!(build_pool(-3, &BTreeSet::new()), Vec::<i64>::new());
}

#[test]
fn test_merge_distinct() {
    assert_eq!(merge_distinct(&[1, 3, 5], &[2, 3]), vec![1, 2, 3, 5]);
    assert_eq!(merge_distinct(&[], &[4]), vec![4]);
}

#[test]
fn test_validate_integer_count() {
    assert!(validate_integer_count(6).is_ok());
    assert_eq!(
        validate_integer_count(11),
        Err(UtilsError::IntegerCountTooLarge {
            requested: 11,
            limit: 10
        })
    );
}
