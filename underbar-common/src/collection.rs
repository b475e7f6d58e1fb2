//! # Collections
//!
//! The one abstraction every combinator in the workspace is written against.
//!
//! A [`Collection`] is either an **ordered sequence** (slices, arrays, `Vec`,
//! `VecDeque`, `im::Vector`) addressed by [`Key::Index`], or a **keyed
//! mapping** (`HashMap`, `BTreeMap`, `IndexMap`, `im::HashMap` with `String`
//! keys) addressed by [`Key::Name`]. Both produce their entries as
//! `(Key, &Item)` pairs through [`Collection::entries`].
//!
//! Mapping iteration order is whatever the concrete container enumerates.
//! Callers must not depend on it.
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use underbar_common::{Collection, Key};
//!
//! let seq = vec!['a', 'b'];
//! let entries: Vec<_> = seq.entries().collect();
//! assert_eq!(entries, vec![(Key::Index(0), &'a'), (Key::Index(1), &'b')]);
//!
//! let map = BTreeMap::from([("x".to_string(), 1)]);
//! let entries: Vec<_> = map.entries().collect();
//! assert_eq!(entries, vec![(Key::Name("x"), &1)]);
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// Position of a value inside a collection: an index for sequences,
/// a name for mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl Key<'_> {
    /// Returns the index if this key addresses a sequence slot.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this key addresses a mapping entry.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

/// Indices render as decimal so that a sequence merged into a mapping gets
/// `"0"`, `"1"`, ... as field names.
impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Whether a collection is addressed by position or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Sequence,
    Mapping,
}

/// A read-only collection of values that can enumerate its entries.
pub trait Collection {
    type Item;

    /// Yields every `(key, value)` entry exactly once.
    ///
    /// Sequences yield in index order. Mappings yield in the container's
    /// own enumeration order.
    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &Self::Item)>;

    fn kind(&self) -> CollectionKind;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Marker for collections addressed by a 0-based index where element order
/// is part of the value's identity.
pub trait Sequence: Collection {}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &Self::Item)> {
        (**self).entries()
    }

    fn kind(&self) -> CollectionKind {
        (**self).kind()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<C: Sequence + ?Sized> Sequence for &C {}

// ============================================================================
// Ordered sequences
// ============================================================================

impl<T> Collection for [T] {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (Key::Index(index), value))
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Sequence
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> Sequence for [T] {}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.as_slice().entries()
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Sequence
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Sequence for [T; N] {}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.as_slice().entries()
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Sequence
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Sequence for Vec<T> {}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (Key::Index(index), value))
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Sequence
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Sequence for VecDeque<T> {}

impl<T: Clone> Collection for im::Vector<T> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (Key::Index(index), value))
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Sequence
    }

    fn len(&self) -> usize {
        im::Vector::len(self)
    }
}

impl<T: Clone> Sequence for im::Vector<T> {}

// ============================================================================
// Keyed mappings
// ============================================================================

impl<V, S> Collection for HashMap<String, V, S> {
    type Item = V;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &V)> {
        self.iter().map(|(name, value)| (Key::Name(name.as_str()), value))
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Mapping
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<V> Collection for BTreeMap<String, V> {
    type Item = V;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &V)> {
        self.iter().map(|(name, value)| (Key::Name(name.as_str()), value))
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Mapping
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<V, S> Collection for IndexMap<String, V, S> {
    type Item = V;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &V)> {
        self.iter().map(|(name, value)| (Key::Name(name.as_str()), value))
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Mapping
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }
}

impl<V, S> Collection for im::HashMap<String, V, S>
where
    V: Clone,
    S: BuildHasher,
{
    type Item = V;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &V)> {
        self.iter().map(|(name, value)| (Key::Name(name.as_str()), value))
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Mapping
    }

    fn len(&self) -> usize {
        im::HashMap::len(self)
    }
}

/// Collects a collection's values into a `Vec` in entry order.
///
/// # Example
/// ```
/// use underbar_common::collection::values;
/// assert_eq!(values(&[3, 1, 2]), vec![3, 1, 2]);
/// ```
pub fn values<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
{
    collection.entries().map(|(_, value)| value.clone()).collect()
}
