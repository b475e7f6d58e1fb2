//! # Membership Tables
//!
//! A one-dimensional table keyed by value, used for set membership in
//! expected constant time. Keys remember their first insertion order, so
//! anything read back out of a table (deduplicated sequences, set-algebra
//! results) comes out in a deterministic order.
//!
//! ## Example
//!
//! ```
//! use underbar_common::Table;
//!
//! let mut seen: Table<i32> = Table::new();
//! assert!(seen.mark(2));
//! assert!(seen.mark(1));
//! assert!(!seen.mark(2));
//! assert_eq!(seen.into_keys(), vec![2, 1]);
//! ```

use std::hash::Hash;

use indexmap::IndexMap;

/// Insertion-ordered table from keys to records.
///
/// `Table<K>` (with the default `()` record) is a plain membership set.
#[derive(Debug, Clone)]
pub struct Table<K, V = ()> {
    records: IndexMap<K, V>,
}

impl<K: Eq + Hash, V> Table<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Table {
            records: IndexMap::new(),
        }
    }

    pub fn lookup(&self, key: &K) -> Option<&V> {
        self.records.get(key)
    }

    /// Inserts or replaces a record. A replaced key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.records.insert(key, value)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.records.contains_key(key)
    }

    /// Removes a key, keeping the relative order of the remaining keys.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.records.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.records.keys()
    }

    /// Consumes the table, returning its keys in insertion order.
    #[must_use]
    pub fn into_keys(self) -> Vec<K> {
        self.records.into_keys().collect()
    }
}

impl<K: Eq + Hash> Table<K> {
    /// Builds a membership table from keys; duplicates collapse onto the
    /// first occurrence.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut table = Table::new();
        for key in keys {
            table.mark(key);
        }
        table
    }

    /// Marks `key` as present. Returns `true` if it was not present before.
    pub fn mark(&mut self, key: K) -> bool {
        self.records.insert(key, ()).is_none()
    }
}

impl<K: Eq + Hash, V> Default for Table<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
