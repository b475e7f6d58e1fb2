//! # underbar Collections
//!
//! Functional combinators over any [`Collection`](underbar_common::Collection):
//! ordered sequences and keyed mappings alike.
//!
//! ## Modules
//!
//! - [`iteration`]: `each` and `reduce`, the two primitives everything else is built on
//! - [`transforms`]: `filter`, `reject`, `map`, `uniq`, `pluck` and `invoke`
//! - [`predicates`]: `every`, `some`, `contains` and `index_of`
//! - [`set_algebra`]: Multi-array `intersection` and `difference`
//! - [`ordering`]: Stable merge-sort `sort_by`
//! - [`flatten`]: Recursive flattening of [`Nested`] sequences
//! - [`sequences`]: `first`, `last`, `zip` and `shuffle`
//! - [`objects`]: `extend` and `defaults` for records
//!
//! ## Example
//!
//! ```
//! use underbar_collections::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//! let evens = filter(&numbers, |n| n % 2 == 0);
//! let squares = map(&evens, |n| n * n);
//! assert_eq!(reduce(&squares, |acc, n| acc + n, 0), 56);
//! ```

pub mod flatten;
pub mod iteration;
pub mod objects;
pub mod ordering;
pub mod predicates;
pub mod sequences;
pub mod set_algebra;
pub mod transforms;

pub use flatten::{Nested, flatten};
pub use iteration::{each, identity, not, reduce, reduce_first, try_each, try_reduce};
pub use objects::{defaults, extend};
pub use ordering::{KeyExtractor, sort_by, sort_by_key};
pub use predicates::{contains, every, every_truthy, index_of, some, some_truthy};
pub use sequences::{first, first_n, last, last_n, shuffle, shuffle_with, zip};
pub use set_algebra::{difference, intersection};
pub use transforms::{
    Invocable, Method, filter, invoke, map, pluck, reject, try_filter, try_map, uniq,
};
