//! # Set Algebra
//!
//! Multi-array [`intersection`] and [`difference`] built on membership
//! tables. Results are deduplicated: every output value appears once no
//! matter how often it occurs in the inputs.
//!
//! Output order is the order in which values are first discovered, which for
//! `difference` is first-occurrence order within the first array.

use std::hash::Hash;

use underbar_common::{Collection, Table};

use crate::iteration::{each, reduce};
use crate::predicates::every;
use crate::transforms::{map, uniq};

fn membership_table<C>(array: &C) -> Table<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + Eq + Hash,
{
    reduce(
        array,
        |mut table: Table<C::Item>, value| {
            table.mark(value.clone());
            table
        },
        Table::new(),
    )
}

/// Values present in every one of `arrays`.
///
/// One membership table is built per input; a value belongs to the result
/// iff every table holds it. No inputs means an empty result.
///
/// # Example
/// ```
/// use underbar_collections::intersection;
///
/// let mut shared = intersection(&[vec![1, 2, 3], vec![2, 3, 4]]);
/// shared.sort();
/// assert_eq!(shared, vec![2, 3]);
/// ```
pub fn intersection<C>(arrays: &[C]) -> Vec<C::Item>
where
    C: Collection,
    C::Item: Clone + Eq + Hash,
{
    let tables = map(arrays, |array| membership_table(array));
    let mut results: Table<C::Item> = Table::new();

    each(arrays, |array, _, _| {
        each(array, |value, _, _| {
            if every(&tables, |table| table.contains(value)) {
                results.mark(value.clone());
            }
        });
    });

    results.into_keys()
}

/// Values of `array` that appear in none of `others`.
///
/// With a single other array, a table seeded from `array` has every value of
/// the other array deleted from it. With several, the others are folded in
/// order: each step removes from the running result its intersection with the
/// next array. With none, this is [`uniq`] of `array`.
///
/// # Example
/// ```
/// use underbar_collections::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[[2, 4]]), vec![1, 3]);
/// assert_eq!(
///     difference(&vec![1, 2, 3, 4, 5], &[vec![1], vec![5, 9]]),
///     vec![2, 3, 4]
/// );
/// ```
pub fn difference<C, O>(array: &C, others: &[O]) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    O: Collection<Item = C::Item>,
    C::Item: Clone + Eq + Hash,
{
    match others {
        [] => uniq(array),
        [other] => reduce(
            other,
            |mut remaining: Table<C::Item>, value| {
                remaining.remove(value);
                remaining
            },
            membership_table(array),
        )
        .into_keys(),
        _ => reduce(
            others,
            |result: Vec<C::Item>, other| {
                let other_values = map(other, Clone::clone);
                let shared = intersection(&[&result[..], &other_values[..]]);
                difference(&result, &[shared])
            },
            map(array, Clone::clone),
        ),
    }
}
