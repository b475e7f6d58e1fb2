//! # Iteration and Reduction Primitives
//!
//! [`try_each`] is the only place in this crate that walks a collection.
//! Everything else is a reduction over it, and [`try_reduce`] is itself
//! written on top of [`try_each`].
//!
//! ```text
//! try_each ──> each
//!    │
//!    └──> try_reduce ──> reduce ──> filter / map / every / uniq / flatten / ...
//! ```
//!
//! A visitor that fails stops the traversal at that element and its error is
//! returned as-is. Panics unwind through untouched.

use std::convert::Infallible;

use underbar_common::{Collection, Key};

/// Returns its argument.
///
/// # Example
/// ```
/// use underbar_collections::identity;
/// assert_eq!(identity(7), 7);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Negates a predicate.
///
/// # Example
/// ```
/// use underbar_collections::not;
/// let mut is_odd = not(|n: &i32| n % 2 == 0);
/// assert!(is_odd(&3));
/// ```
pub fn not<T, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Calls `visitor(value, key, collection)` for every entry, stopping at the
/// first error.
///
/// # Example
/// ```
/// use underbar_collections::try_each;
///
/// let mut seen = Vec::new();
/// let result = try_each(&[1, 2, 3, 4], |value, _, _| {
///     if *value == 3 {
///         return Err("three");
///     }
///     seen.push(*value);
///     Ok(())
/// });
/// assert_eq!(result, Err("three"));
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub fn try_each<C, E, F>(collection: &C, mut visitor: F) -> Result<(), E>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, Key<'_>, &C) -> Result<(), E>,
{
    for (key, value) in collection.entries() {
        visitor(value, key, collection)?;
    }
    Ok(())
}

/// Calls `visitor(value, key, collection)` for every entry.
///
/// # Example
/// ```
/// use underbar_collections::each;
/// use underbar_common::Key;
///
/// let mut visits = Vec::new();
/// each(&["a", "b"], |value, key, _| visits.push((key, *value)));
/// assert_eq!(visits, vec![(Key::Index(0), "a"), (Key::Index(1), "b")]);
/// ```
pub fn each<C, F>(collection: &C, mut visitor: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, Key<'_>, &C),
{
    let Ok(()) = try_each::<C, Infallible, _>(collection, |value, key, collection| {
        visitor(value, key, collection);
        Ok(())
    });
}

/// Left fold threading `accumulator` through `iterator`, stopping at the
/// first error.
pub fn try_reduce<C, A, E, F>(collection: &C, mut iterator: F, initial: A) -> Result<A, E>
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> Result<A, E>,
{
    let mut slot = Some(initial);
    try_each(collection, |value, _, _| {
        if let Some(accumulator) = slot.take() {
            slot = Some(iterator(accumulator, value)?);
        }
        Ok(())
    })?;
    Ok(slot.unwrap_or_else(|| unreachable!("every visit refills the accumulator")))
}

/// Left fold: `next = iterator(accumulator, value)`, seeded by `initial`.
///
/// # Example
/// ```
/// use underbar_collections::reduce;
/// assert_eq!(reduce(&[1, 2, 3], |total, n| total + n, 0), 6);
/// ```
pub fn reduce<C, A, F>(collection: &C, mut iterator: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    let Ok(accumulator) = try_reduce::<C, A, Infallible, _>(
        collection,
        |accumulator, value| Ok(iterator(accumulator, value)),
        initial,
    );
    accumulator
}

/// Left fold seeded with the first value instead of an explicit initial
/// accumulator. Returns `None` for an empty collection.
///
/// # Example
/// ```
/// use underbar_collections::reduce_first;
/// assert_eq!(reduce_first(&[4, 9, 2], |max, n| max.max(*n)), Some(9));
/// assert_eq!(reduce_first(&Vec::<i32>::new(), |a, b| a + b), None);
/// ```
pub fn reduce_first<C, F>(collection: &C, mut iterator: F) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    reduce(
        collection,
        |accumulator: Option<C::Item>, value| match accumulator {
            None => Some(value.clone()),
            Some(accumulator) => Some(iterator(accumulator, value)),
        },
        None,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    #[test]
    fn test_each_visits_sequence_in_order() {
        let list = vec!['a', 'b', 'c'];
        let mut visits = Vec::new();
        each(&list, |value, key, collection| {
            visits.push((*value, key.index()));
            assert_eq!(collection.len(), 3);
        });
        assert_eq!(
            visits,
            vec![('a', Some(0)), ('b', Some(1)), ('c', Some(2))]
        );
    }

    #[test]
    fn test_each_visits_every_mapping_entry() {
        let mut map = HashMap::new();
        map.insert("one".to_string(), 1);
        map.insert("two".to_string(), 2);
        map.insert("three".to_string(), 3);

        let mut names = Vec::new();
        each(&map, |value, key, collection| {
            assert_eq!(collection.get(key.name().unwrap()), Some(value));
            names.push(key.to_string());
        });
        names.sort();
        assert_eq!(names, vec!["one", "three", "two"]);
    }

    #[test]
    fn test_each_on_empty_collection() {
        let mut calls = 0;
        each(&Vec::<u8>::new(), |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_try_each_stops_at_first_error() {
        let mut visited = Vec::new();
        let result = try_each(&[1, 2, 3, 4, 5], |value, _, _| {
            visited.push(*value);
            if *value % 2 == 0 {
                Err(format!("even: {value}"))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("even: 2".to_string()));
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn test_reduce_sum() {
        assert_eq!(reduce(&[1, 2, 3], |acc, v| acc + v, 0), 6);
    }

    #[test]
    fn test_reduce_empty_returns_seed() {
        assert_eq!(reduce(&Vec::<i32>::new(), |acc, v| acc + v, 42), 42);
    }

    #[test]
    fn test_reduce_over_mapping() {
        let map = BTreeMap::from([("a".to_string(), 2), ("b".to_string(), 5)]);
        assert_eq!(reduce(&map, |acc, v| acc * v, 1), 10);
    }

    #[test]
    fn test_reduce_does_not_mutate_source() {
        let list = vec![String::from("x"), String::from("y")];
        let joined = reduce(&list, |acc, v| acc + v, String::new());
        assert_eq!(joined, "xy");
        assert_eq!(list, vec!["x", "y"]);
    }

    #[test]
    fn test_try_reduce_propagates_error() {
        let result: Result<i32, &str> = try_reduce(
            &[1, 2, 3],
            |acc, v| if *v == 2 { Err("boom") } else { Ok(acc + v) },
            0,
        );
        assert_eq!(result, Err("boom"));

        let ok: Result<i32, &str> = try_reduce(&[1, 2, 3], |acc, v| Ok(acc + v), 0);
        assert_eq!(ok, Ok(6));
    }

    #[test]
    fn test_reduce_first() {
        assert_eq!(reduce_first(&[1, 2, 3], |a, b| a + b), Some(6));
        assert_eq!(reduce_first(&[5], |a, b| a + b), Some(5));
    }

    #[test]
    fn test_identity_and_not() {
        assert_eq!(identity("same"), "same");
        let mut is_empty = not(|s: &str| !s.is_empty());
        assert!(is_empty(""));
        assert!(!is_empty("x"));
    }
}
