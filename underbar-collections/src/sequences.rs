//! # Sequence Helpers
//!
//! Thin wrappers over the core: element access from either end, [`zip`], and
//! [`shuffle`]. None of them mutate their input.

use rand::Rng;
use rand::seq::SliceRandom;
use underbar_common::{Collection, Sequence};

use crate::iteration::{each, reduce};
use crate::transforms::map;

/// The first element, if any.
///
/// # Example
/// ```
/// use underbar_collections::first;
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(list: &[T]) -> Option<&T> {
    list.first()
}

/// Up to `n` elements from the front.
///
/// # Example
/// ```
/// use underbar_collections::first_n;
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<T>(list: &[T], n: usize) -> &[T] {
    &list[..n.min(list.len())]
}

/// The last element, if any.
#[inline]
pub fn last<T>(list: &[T]) -> Option<&T> {
    list.last()
}

/// Up to `n` elements from the back.
///
/// # Example
/// ```
/// use underbar_collections::last_n;
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 0), &[] as &[i32]);
/// ```
#[inline]
pub fn last_n<T>(list: &[T], n: usize) -> &[T] {
    &list[list.len().saturating_sub(n)..]
}

/// Groups elements by position across `arrays`. Shorter arrays are padded
/// with `None` up to the longest one.
///
/// # Example
/// ```
/// use underbar_collections::zip;
///
/// let rows = zip(&[vec!['a', 'b', 'c'], vec!['x']]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some('a'), Some('x')],
///         vec![Some('b'), None],
///         vec![Some('c'), None],
///     ]
/// );
/// ```
pub fn zip<C>(arrays: &[C]) -> Vec<Vec<Option<C::Item>>>
where
    C: Sequence,
    C::Item: Clone,
{
    let width = reduce(arrays, |longest, array| longest.max(array.len()), 0);
    let mut rows: Vec<Vec<Option<C::Item>>> = (0..width)
        .map(|_| Vec::with_capacity(arrays.len()))
        .collect();

    each(arrays, |array, _, _| {
        let mut column = map(array, |value| Some(value.clone()));
        column.resize(width, None);
        for (row, value) in rows.iter_mut().zip(column) {
            row.push(value);
        }
    });

    rows
}

/// A shuffled copy of `collection` using the thread-local RNG.
pub fn shuffle<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
{
    shuffle_with(collection, &mut rand::rng())
}

/// A shuffled copy of `collection` using `rng`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar_collections::shuffle_with;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle_with(&original, &mut StdRng::seed_from_u64(7));
/// shuffled.sort();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle_with<C, R>(collection: &C, rng: &mut R) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = map(collection, Clone::clone);
    shuffled.shuffle(rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_first_and_last() {
        let list = vec![1, 2, 3];
        assert_eq!(first(&list), Some(&1));
        assert_eq!(last(&list), Some(&3));
        assert_eq!(first_n(&list, 0), &[] as &[i32]);
        assert_eq!(last_n(&list, 5), &[1, 2, 3]);
        assert_eq!(last::<u8>(&[]), None);
    }

    #[test]
    fn test_zip_pads_shorter_arrays() {
        let rows = zip(&[vec![1, 2], vec![10, 20, 30], vec![]]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![Some(1), Some(10), None]);
        assert_eq!(rows[2], vec![None, Some(30), None]);
    }

    #[test]
    fn test_zip_of_nothing() {
        let none: [Vec<i32>; 0] = [];
        assert!(zip(&none).is_empty());
    }

    #[test]
    fn test_shuffle_is_a_permutation_and_leaves_input() {
        let original: Vec<i32> = (0..50).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled = shuffle_with(&original, &mut rng);

        assert_eq!(original, (0..50).collect::<Vec<_>>());
        assert_ne!(shuffled, original);

        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_shuffle_with_same_seed_is_deterministic() {
        let original = vec!['a', 'b', 'c', 'd', 'e', 'f'];
        let once = shuffle_with(&original, &mut StdRng::seed_from_u64(3));
        let again = shuffle_with(&original, &mut StdRng::seed_from_u64(3));
        assert_eq!(once, again);
        assert_eq!(shuffle(&original).len(), original.len());
    }
}
