//! Value-based comparisons over collections and map-key extraction.
//!
//! Collections of shared pointers are compared by the values they point to,
//! never by address. The general forms take the comparator explicitly; the
//! `*_of_ptr_*` helpers plug in [`pointee_eq`].

use std::collections::BTreeSet;
use std::ops::Deref;

/// Whether any element of `items` matches `target` under `eq`
pub fn contains_by<'a, T, I, F>(items: I, target: &T, mut eq: F) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &T) -> bool,
{
    items.into_iter().any(|item| eq(item, target))
}

/// Whether `lhs` and `rhs` hold the same elements under `eq`.
///
/// Both sides must have the same length and every element on either side
/// must have a match on the other, so the result does not depend on argument
/// order.
pub fn are_equal_by<'a, T, L, R, F>(lhs: L, rhs: R, mut eq: F) -> bool
where
    T: 'a,
    L: IntoIterator<Item = &'a T>,
    R: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &T) -> bool,
{
    let lhs: Vec<&T> = lhs.into_iter().collect();
    let rhs: Vec<&T> = rhs.into_iter().collect();

    lhs.len() == rhs.len()
        && lhs.iter().all(|&l| rhs.iter().any(|&r| eq(l, r)))
        && rhs.iter().all(|&r| lhs.iter().any(|&l| eq(l, r)))
}

/// Compare two optional pointers by pointee; two `None`s are equal
pub fn pointee_eq<P>(lhs: &Option<P>, rhs: &Option<P>) -> bool
where
    P: Deref,
    P::Target: PartialEq,
{
    match (lhs, rhs) {
        (Some(l), Some(r)) => **l == **r,
        (None, None) => true,
        _ => false,
    }
}

/// Whether `set` holds a pointer whose value equals `target`'s
pub fn set_of_ptr_contains<'a, P, I>(set: I, target: &Option<P>) -> bool
where
    P: Deref + 'a,
    P::Target: PartialEq,
    I: IntoIterator<Item = &'a Option<P>>,
{
    contains_by(set, target, pointee_eq)
}

/// Whether two sets of pointers hold the same values
pub fn are_set_of_ptr_equal<'a, P, L, R>(lhs: L, rhs: R) -> bool
where
    P: Deref + 'a,
    P::Target: PartialEq,
    L: IntoIterator<Item = &'a Option<P>>,
    R: IntoIterator<Item = &'a Option<P>>,
{
    are_equal_by(lhs, rhs, pointee_eq)
}

/// Collect the keys of a map into an ordered set.
///
/// Accepts anything iterating `(&K, &V)`, such as `&HashMap` or `&BTreeMap`.
pub fn get_keys<'a, K, V, M>(map: M) -> BTreeSet<K>
where
    K: Ord + Clone + 'a,
    V: 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    map.into_iter().map(|(key, _)| key.clone()).collect()
}
