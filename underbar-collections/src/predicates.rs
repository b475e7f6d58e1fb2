//! # Predicates
//!
//! Boolean questions about a collection: [`every`], [`some`], [`contains`]
//! and [`index_of`].
//!
//! `every` folds an AND over the whole collection. Traversal never stops
//! early, but once the accumulator is false the predicate is no longer
//! consulted. `some` is `every` with the predicate negated (De Morgan), not a
//! second traversal.

use underbar_common::{Collection, Key, Sequence, Truthy};

use crate::iteration::{each, not, reduce};

/// True if `predicate` holds for every value. Vacuously true when empty.
///
/// # Example
/// ```
/// use underbar_collections::every;
/// assert!(every(&[2, 4, 6], |n| n % 2 == 0));
/// assert!(!every(&[2, 3, 6], |n| n % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(
        collection,
        |accumulator, value| accumulator && predicate(value),
        true,
    )
}

/// True if every value is truthy.
///
/// # Example
/// ```
/// use underbar_collections::every_truthy;
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&["a", ""]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, |value| value.is_truthy())
}

/// True if `predicate` holds for at least one value. False when empty.
///
/// # Example
/// ```
/// use underbar_collections::some;
/// assert!(some(&[1, 3, 4], |n| n % 2 == 0));
/// assert!(!some(&[1, 3, 5], |n| n % 2 == 0));
/// ```
pub fn some<C, P>(collection: &C, predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    !every(collection, not::<C::Item, P>(predicate))
}

/// True if at least one value is truthy.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, |value| value.is_truthy())
}

/// True if some value equals `target`.
///
/// # Example
/// ```
/// use underbar_collections::contains;
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce(
        collection,
        |found, value| found || value == target,
        false,
    )
}

/// Index of the first value equal to `target`, or `None`.
///
/// # Example
/// ```
/// use underbar_collections::index_of;
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20], &99), None);
/// ```
pub fn index_of<C>(sequence: &C, target: &C::Item) -> Option<usize>
where
    C: Sequence + ?Sized,
    C::Item: PartialEq,
{
    let mut result = None;
    each(sequence, |value, key, _| {
        if let (None, Key::Index(index)) = (result, key) {
            if value == target {
                result = Some(index);
            }
        }
    });
    result
}
