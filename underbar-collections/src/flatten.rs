//! # Recursive Flattening
//!
//! A nested sequence is a tree: leaves hold values, branches hold further
//! nested sequences. [`flatten`] collects every leaf depth-first, left to
//! right.
//!
//! ```text
//! [1, [2, [3, [4]], 5]]  ──flatten──>  [1, 2, 3, 4, 5]
//! ```

use underbar_common::Collection;

use crate::iteration::reduce;

/// An element of a nested sequence: a value, or another nested sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Leaf(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn seq(children: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::Seq(children.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Number of leaves at any depth.
    pub fn count_leaves(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::Seq(children) => children.iter().map(Nested::count_leaves).sum(),
        }
    }

    /// Nesting depth; a leaf has depth 0 and an empty sequence depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::Seq(children) => 1 + children.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

/// Every leaf of `nested`, depth-first and left to right.
///
/// # Example
/// ```
/// use underbar_collections::{flatten, Nested};
///
/// let nested = vec![
///     Nested::leaf(1),
///     Nested::seq([Nested::leaf(2), Nested::seq([Nested::leaf(3), Nested::seq([Nested::leaf(4)])])]),
///     Nested::leaf(5),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten<C, T>(nested: &C) -> Vec<T>
where
    C: Collection<Item = Nested<T>> + ?Sized,
    T: Clone,
{
    reduce(
        nested,
        |mut result: Vec<T>, element| {
            match element {
                Nested::Leaf(value) => result.push(value.clone()),
                Nested::Seq(children) => result.extend(flatten(children)),
            }
            result
        },
        Vec::new(),
    )
}
