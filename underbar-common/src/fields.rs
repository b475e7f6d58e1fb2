//! # Named Fields
//!
//! Records whose values can be read (and, for string-keyed maps, written)
//! by field name. This is what lets `sort_by` and `pluck` take a field name
//! instead of a function, and what `extend`/`defaults` write into.
//!
//! A record type may implement [`FieldAccess`] once per key type it exposes:
//!
//! ```
//! use underbar_common::FieldAccess;
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl FieldAccess<u32> for Person {
//!     fn field(&self, name: &str) -> Option<u32> {
//!         (name == "age").then_some(self.age)
//!     }
//! }
//!
//! impl FieldAccess<String> for Person {
//!     fn field(&self, name: &str) -> Option<String> {
//!         (name == "name").then(|| self.name.clone())
//!     }
//! }
//!
//! let ada = Person { name: "Ada".into(), age: 36 };
//! assert_eq!(FieldAccess::<u32>::field(&ada, "age"), Some(36));
//! assert_eq!(FieldAccess::<String>::field(&ada, "age"), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// Read access to a named field of type `K`. `None` means the field is absent.
pub trait FieldAccess<K> {
    fn field(&self, name: &str) -> Option<K>;
}

/// Write access to named fields, used as the target of `extend`/`defaults`.
pub trait FieldsMut<V> {
    fn has_field(&self, name: &str) -> bool;

    fn set_field(&mut self, name: String, value: V);
}

impl<V: Clone, S: BuildHasher> FieldAccess<V> for HashMap<String, V, S> {
    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone> FieldAccess<V> for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone, S: BuildHasher> FieldAccess<V> for IndexMap<String, V, S> {
    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone, S: BuildHasher> FieldAccess<V> for im::HashMap<String, V, S> {
    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V, S: BuildHasher> FieldsMut<V> for HashMap<String, V, S> {
    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn set_field(&mut self, name: String, value: V) {
        self.insert(name, value);
    }
}

impl<V> FieldsMut<V> for BTreeMap<String, V> {
    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn set_field(&mut self, name: String, value: V) {
        self.insert(name, value);
    }
}

impl<V, S: BuildHasher> FieldsMut<V> for IndexMap<String, V, S> {
    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn set_field(&mut self, name: String, value: V) {
        self.insert(name, value);
    }
}

impl<V: Clone, S: BuildHasher + Clone> FieldsMut<V> for im::HashMap<String, V, S> {
    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn set_field(&mut self, name: String, value: V) {
        self.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_field_access() {
        let mut map = HashMap::new();
        map.insert("age".to_string(), 30);
        assert_eq!(map.field("age"), Some(30));
        assert_eq!(map.field("name"), None);
    }

    #[test]
    fn test_fields_mut() {
        let mut map: BTreeMap<String, i32> = BTreeMap::new();
        assert!(!map.has_field("a"));
        map.set_field("a".to_string(), 1);
        assert!(map.has_field("a"));

        let mut persistent: im::HashMap<String, i32> = im::HashMap::new();
        persistent.set_field("b".to_string(), 2);
        assert_eq!(persistent.field("b"), Some(2));
    }
}
