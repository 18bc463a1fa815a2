//! Pointer-set comparison and map-key extraction tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use utilkit_core::{are_set_of_ptr_equal, get_keys, set_of_ptr_contains};

use super::helpers::ptr_set;

// ============================================================================
// set_of_ptr_contains
// ============================================================================

#[test]
fn set_of_ptr_contains_int() {
    let mut set: Vec<Option<Rc<i32>>> = Vec::new();

    let ptr0 = Some(Rc::new(0));
    let same_ptr0 = ptr0.clone();
    let other_ptr1 = Some(Rc::new(1));
    let ptr4 = Some(Rc::new(4));
    let null: Option<Rc<i32>> = None;

    // empty set
    assert!(!set_of_ptr_contains(&set, &same_ptr0));
    assert!(!set_of_ptr_contains(&set, &other_ptr1));
    assert!(!set_of_ptr_contains(&set, &ptr4));
    assert!(!set_of_ptr_contains(&set, &null));

    set.push(ptr0);
    set.extend(ptr_set(&[1, 2, 3]));

    // same pointer
    assert!(set_of_ptr_contains(&set, &same_ptr0));

    // equal value behind a different pointer
    assert!(!Rc::ptr_eq(
        set[1].as_ref().unwrap(),
        other_ptr1.as_ref().unwrap()
    ));
    assert!(set_of_ptr_contains(&set, &other_ptr1));

    assert!(!set_of_ptr_contains(&set, &ptr4));
    assert!(!set_of_ptr_contains(&set, &null));
}

#[test]
fn set_of_ptr_with_null_contains_int() {
    let mut set = ptr_set(&[0, 1, 2, 3]);
    set.push(None);

    assert!(set_of_ptr_contains(&set, &None));
    assert!(set_of_ptr_contains(&set, &set[0].clone()));
    assert!(set_of_ptr_contains(&set, &Some(Rc::new(1))));
    assert!(!set_of_ptr_contains(&set, &Some(Rc::new(4))));
}

#[test]
fn set_of_ptr_contains_string() {
    let set = ptr_set(&[
        "a".to_string(),
        "Barro".to_string(),
        "String with spaces".to_string(),
        "I count him braver who overcomes his desires than him who conquers his enemies, \
         for the hardest victory is over self. ― Aristotle"
            .to_string(),
    ]);

    let lookup = |s: &str| set_of_ptr_contains(&set, &Some(Rc::new(s.to_string())));

    assert!(lookup("a"));
    assert!(lookup("Barro"));

    assert!(!lookup("Stringwithspaces"));
    assert!(!lookup("Barr"));
    assert!(!lookup("4"));
}

// ============================================================================
// are_set_of_ptr_equal
// ============================================================================

/// Assert equality and that it holds in both argument orders
fn assert_ptr_sets_equal(lhs: &[Option<Rc<i32>>], rhs: &[Option<Rc<i32>>], expected: bool) {
    assert_eq!(are_set_of_ptr_equal(lhs, rhs), expected);
    assert_eq!(are_set_of_ptr_equal(rhs, lhs), expected);
}

#[test]
fn are_set_of_ptr_equal_int() {
    let mut set1: Vec<Option<Rc<i32>>> = Vec::new();
    let mut set2: Vec<Option<Rc<i32>>> = Vec::new();

    // both empty
    assert_ptr_sets_equal(&set1, &set2, true);

    set1.extend(ptr_set(&[0, 1, 2]));

    // one empty
    assert_ptr_sets_equal(&set1, &set2, false);

    // shares the pointer to 0, fresh pointers otherwise
    set2.push(set1[0].clone());
    set2.extend(ptr_set(&[1, 2]));

    // same elements
    assert_ptr_sets_equal(&set1, &set2, true);

    set1.extend(ptr_set(&[3]));

    // different elements, different size
    assert_ptr_sets_equal(&set1, &set2, false);

    set2.extend(ptr_set(&[4]));

    // different elements, same size
    assert_ptr_sets_equal(&set1, &set2, false);

    set1.push(None);
    set2.extend(ptr_set(&[3]));

    // different elements, one with null
    assert_ptr_sets_equal(&set1, &set2, false);

    set2.push(None);
    set1.extend(ptr_set(&[4]));

    // same elements with null
    assert_ptr_sets_equal(&set1, &set2, true);

    // each with itself
    assert!(are_set_of_ptr_equal(&set1, &set1));
    assert!(are_set_of_ptr_equal(&set2, &set2));
}

// ============================================================================
// get_keys
// ============================================================================

#[test]
fn get_map_keys() {
    let keys: BTreeSet<String> = ["a", "b", "c", "d"].iter().map(|k| k.to_string()).collect();
    let map: BTreeMap<String, String> = keys
        .iter()
        .map(|k| (k.clone(), "value".to_string()))
        .collect();
    assert_eq!(get_keys(&map), keys);

    let keys: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
    let map: BTreeMap<i32, String> = keys.iter().map(|&k| (k, "value".to_string())).collect();
    assert_eq!(get_keys(&map), keys);
}

#[test]
fn get_unordered_map_keys() {
    let keys: BTreeSet<String> = ["a", "b", "c", "d"].iter().map(|k| k.to_string()).collect();
    let map: HashMap<String, String> = keys
        .iter()
        .map(|k| (k.clone(), "value".to_string()))
        .collect();
    assert_eq!(get_keys(&map), keys);

    let keys: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
    let map: HashMap<i32, String> = keys.iter().map(|&k| (k, "value".to_string())).collect();
    assert_eq!(get_keys(&map), keys);
}

#[test]
fn get_keys_of_empty_map() {
    let map: HashMap<u8, ()> = HashMap::new();
    assert!(get_keys(&map).is_empty());
}
