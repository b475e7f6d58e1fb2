//! # Transforms
//!
//! New sequences derived from a collection: [`filter`], [`reject`], [`map`],
//! [`uniq`], [`pluck`] and [`invoke`], plus the fallible [`try_filter`] and
//! [`try_map`]. Each one is a reduction into a growing `Vec`, so output order
//! is the collection's entry order.

use std::hash::Hash;

use underbar_common::{Collection, FieldAccess, Result, Table, UnderbarError};

use crate::iteration::{not, reduce, try_reduce};

/// Values for which `predicate` returns true, in order.
///
/// # Example
/// ```
/// use underbar_collections::filter;
/// assert_eq!(filter(&[1, 2, 3, 4], |n| n % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    reduce(
        collection,
        |mut accumulator: Vec<C::Item>, value| {
            if predicate(value) {
                accumulator.push(value.clone());
            }
            accumulator
        },
        Vec::new(),
    )
}

/// Values for which `predicate` returns false, in order.
///
/// # Example
/// ```
/// use underbar_collections::reject;
/// assert_eq!(reject(&[1, 2, 3, 4], |n| n % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<C, P>(collection: &C, predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, not::<C::Item, P>(predicate))
}

/// `transform(value)` for every value, in order.
///
/// # Example
/// ```
/// use underbar_collections::map;
/// assert_eq!(map(&[1, 2, 3], |n| n * n), vec![1, 4, 9]);
/// ```
pub fn map<C, U, F>(collection: &C, mut transform: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    reduce(
        collection,
        |mut accumulator: Vec<U>, value| {
            accumulator.push(transform(value));
            accumulator
        },
        Vec::new(),
    )
}

/// [`filter`] with a fallible predicate; the first error aborts.
pub fn try_filter<C, E, P>(collection: &C, mut predicate: P) -> Result<Vec<C::Item>, E>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> Result<bool, E>,
{
    try_reduce(
        collection,
        |mut accumulator: Vec<C::Item>, value| {
            if predicate(value)? {
                accumulator.push(value.clone());
            }
            Ok(accumulator)
        },
        Vec::new(),
    )
}

/// [`map`] with a fallible transform; the first error aborts.
pub fn try_map<C, U, E, F>(collection: &C, mut transform: F) -> Result<Vec<U>, E>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> Result<U, E>,
{
    try_reduce(
        collection,
        |mut accumulator: Vec<U>, value| {
            accumulator.push(transform(value)?);
            Ok(accumulator)
        },
        Vec::new(),
    )
}

/// Removes duplicates, keeping each value's first occurrence in place.
///
/// # Example
/// ```
/// use underbar_collections::uniq;
/// assert_eq!(uniq(&[2, 1, 2, 3, 1]), vec![2, 1, 3]);
/// ```
pub fn uniq<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + Eq + Hash,
{
    let mut seen: Table<C::Item> = Table::new();
    filter(collection, |value| seen.mark(value.clone()))
}

/// Reads the field `name` off every value. Values without that field yield `None`.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use underbar_collections::pluck;
///
/// let people = vec![
///     HashMap::from([("age".to_string(), 30)]),
///     HashMap::from([("height".to_string(), 180)]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(30), None]);
/// ```
pub fn pluck<C, K>(collection: &C, name: &str) -> Vec<Option<K>>
where
    C: Collection + ?Sized,
    C::Item: FieldAccess<K>,
{
    map(collection, |value| value.field(name))
}

/// Values that know how to run a method by name.
pub trait Invocable<R> {
    /// Runs the method called `name`, or returns `None` if there is none.
    fn invoke(&self, name: &str) -> Option<R>;
}

/// The method applied to each element by [`invoke`].
pub enum Method<'a, T, R> {
    /// A function called with each element.
    Function(Box<dyn Fn(&T) -> R + 'a>),
    /// A method resolved on each element through [`Invocable`].
    Named(&'a str),
}

impl<'a, T, R> Method<'a, T, R> {
    pub fn function(function: impl Fn(&T) -> R + 'a) -> Self {
        Method::Function(Box::new(function))
    }

    pub fn named(name: &'a str) -> Self {
        Method::Named(name)
    }
}

/// Calls `method` on every value, in order.
///
/// A named method that some element does not support fails the whole call
/// with [`UnderbarError::UnknownMethod`].
///
/// # Example
/// ```
/// use underbar_collections::{invoke, Invocable, Method};
///
/// struct Word(&'static str);
///
/// impl Invocable<String> for Word {
///     fn invoke(&self, name: &str) -> Option<String> {
///         match name {
///             "upper" => Some(self.0.to_uppercase()),
///             _ => None,
///         }
///     }
/// }
///
/// let words = [Word("a"), Word("b")];
/// assert_eq!(invoke(&words, Method::named("upper")).unwrap(), vec!["A", "B"]);
/// assert!(invoke(&words, Method::named("reverse")).is_err());
/// ```
pub fn invoke<C, R>(collection: &C, method: Method<'_, C::Item, R>) -> Result<Vec<R>>
where
    C: Collection + ?Sized,
    C::Item: Invocable<R>,
{
    try_map(collection, |value| match &method {
        Method::Function(function) => Ok(function(value)),
        Method::Named(name) => value
            .invoke(name)
            .ok_or_else(|| UnderbarError::UnknownMethod {
                name: (*name).to_string(),
            }),
    })
}
