//! # Stable Ordering
//!
//! [`sort_by`] and [`sort_by_key`] return a new sequence sorted ascending by
//! a key derived from each value, using a top-down merge sort.
//!
//! ```text
//!            [d3, a1, c3, b2]
//!              /          \
//!         [d3, a1]      [c3, b2]
//!          /    \        /    \
//!        [d3]  [a1]    [c3]  [b2]
//!          \    /        \    /
//!         [a1, d3]      [b2, c3]
//!              \          /
//!            [a1, b2, d3, c3]     (d3 stays ahead of c3: equal keys keep input order)
//! ```
//!
//! The merge takes the left run's head unless its key is strictly greater
//! than the right run's head, so ties always resolve left-first. That is what
//! makes the sort stable; it must not be swapped for an unstable sort.
//!
//! Keys are `Option<K>`. A missing key (`None`) or a falsy one (`0`, `""`,
//! `false`, `NaN`, see [`Truthy`]) compares greater than every truthy key, so
//! such values sort last, in input order.

use underbar_common::{Collection, FieldAccess, Result, Truthy, UnderbarError};

use crate::transforms::map;

type Accessor<'a, T, K> = Box<dyn Fn(&T) -> Option<K> + 'a>;

/// How to derive a sort key from a value: a function, or the name of a field
/// read through [`FieldAccess`].
pub enum KeyExtractor<'a, T, K> {
    Function(Accessor<'a, T, K>),
    FieldName {
        name: String,
        read: Accessor<'a, T, K>,
    },
}

impl<'a, T, K> KeyExtractor<'a, T, K> {
    /// Key extractor from a function. Return `None` for "no key".
    pub fn function(extract: impl Fn(&T) -> Option<K> + 'a) -> Self {
        KeyExtractor::Function(Box::new(extract))
    }

    /// Key extractor reading the field `name` off every value.
    ///
    /// Fails with [`UnderbarError::EmptyFieldName`] when `name` is empty.
    pub fn field(name: impl Into<String>) -> Result<Self>
    where
        T: FieldAccess<K> + 'a,
        K: 'a,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(UnderbarError::EmptyFieldName);
        }
        let field = name.clone();
        Ok(KeyExtractor::FieldName {
            name,
            read: Box::new(move |value: &T| value.field(&field)),
        })
    }

    /// The field name, for extractors built with [`field`](Self::field).
    pub fn field_name(&self) -> Option<&str> {
        match self {
            KeyExtractor::Function(_) => None,
            KeyExtractor::FieldName { name, .. } => Some(name),
        }
    }

    fn into_accessor(self) -> Accessor<'a, T, K> {
        match self {
            KeyExtractor::Function(extract) => extract,
            KeyExtractor::FieldName { read, .. } => read,
        }
    }
}

/// Sorts by a [`KeyExtractor`].
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use underbar_collections::{sort_by, KeyExtractor};
///
/// let row = |age: i64| HashMap::from([("age".to_string(), age)]);
/// let people = vec![row(50), row(30), HashMap::new(), row(40)];
///
/// let by_age = sort_by(&people, KeyExtractor::field("age").unwrap());
/// let ages: Vec<_> = by_age.iter().map(|p| p.get("age").copied()).collect();
/// assert_eq!(ages, vec![Some(30), Some(40), Some(50), None]);
///
/// let numbers = sort_by(&[3, 1, 2], KeyExtractor::function(|n: &i32| Some(*n)));
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
pub fn sort_by<'a, C, K>(collection: &C, key: KeyExtractor<'a, C::Item, K>) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd + Truthy,
{
    sort_by_key(collection, key.into_accessor())
}

/// Sorts by the key `extract` returns for each value.
///
/// # Example
/// ```
/// use underbar_collections::sort_by_key;
///
/// let words = ["ccc", "a", "bb", "d"];
/// assert_eq!(
///     sort_by_key(&words, |w| Some(w.len())),
///     vec!["a", "d", "bb", "ccc"]
/// );
/// assert_eq!(sort_by_key(&[3, 0, 1], |n| Some(*n)), vec![1, 3, 0]);
/// ```
pub fn sort_by_key<C, K, F>(collection: &C, extract: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd + Truthy,
    F: Fn(&C::Item) -> Option<K>,
{
    let items = map(collection, Clone::clone);
    merge_sort(items, &|left: &C::Item, right: &C::Item| {
        greater(extract(left), extract(right))
    })
}

/// `left > right`, where a missing or falsy key is larger than any truthy key
/// and ties with other missing or falsy keys.
fn greater<K: PartialOrd + Truthy>(left: Option<K>, right: Option<K>) -> bool {
    let left = left.filter(Truthy::is_truthy);
    let right = right.filter(Truthy::is_truthy);
    match (left, right) {
        (Some(left), Some(right)) => left > right,
        (None, Some(_)) => true,
        (_, None) => false,
    }
}

fn merge_sort<T, G>(mut items: Vec<T>, greater: &G) -> Vec<T>
where
    G: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    merge(merge_sort(items, greater), merge_sort(right, greater), greater)
}

fn merge<T, G>(left: Vec<T>, right: Vec<T>, greater: &G) -> Vec<T>
where
    G: Fn(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if greater(l, r) {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        age: Option<u32>,
    }

    impl FieldAccess<u32> for Person {
        fn field(&self, name: &str) -> Option<u32> {
            match name {
                "age" => self.age,
                _ => None,
            }
        }
    }

    impl FieldAccess<&'static str> for Person {
        fn field(&self, name: &str) -> Option<&'static str> {
            (name == "name").then_some(self.name)
        }
    }

    fn person(name: &'static str, age: Option<u32>) -> Person {
        Person { name, age }
    }

    fn names(people: &[Person]) -> Vec<&'static str> {
        people.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_sort_by_field_name() {
        let people = vec![
            person("moe", Some(40)),
            person("curly", Some(60)),
            person("larry", Some(50)),
        ];
        let sorted = sort_by::<_, u32>(&people, KeyExtractor::field("age").unwrap());
        assert_eq!(names(&sorted), vec!["moe", "larry", "curly"]);

        let sorted = sort_by::<_, &str>(&people, KeyExtractor::field("name").unwrap());
        assert_eq!(names(&sorted), vec!["curly", "larry", "moe"]);
    }

    #[test]
    fn test_sort_by_function() {
        let people = vec![person("a", Some(3)), person("b", Some(1))];
        let sorted = sort_by(&people, KeyExtractor::function(|p: &Person| p.age));
        assert_eq!(names(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let people = vec![
            person("first", Some(2)),
            person("second", Some(1)),
            person("third", Some(2)),
            person("fourth", Some(1)),
            person("fifth", Some(2)),
        ];
        let sorted = sort_by::<_, u32>(&people, KeyExtractor::field("age").unwrap());
        assert_eq!(
            names(&sorted),
            vec!["second", "fourth", "first", "third", "fifth"]
        );
    }

    #[test]
    fn test_missing_keys_sort_last_in_input_order() {
        let people = vec![
            person("x", None),
            person("y", Some(5)),
            person("z", None),
            person("w", Some(1)),
        ];
        let sorted = sort_by::<_, u32>(&people, KeyExtractor::field("age").unwrap());
        assert_eq!(names(&sorted), vec!["w", "y", "x", "z"]);
    }

    #[test]
    fn test_empty_field_name_is_rejected() {
        let result = KeyExtractor::<Person, u32>::field("");
        assert!(matches!(result, Err(UnderbarError::EmptyFieldName)));
    }

    #[test]
    fn test_sort_by_key_leaves_input_untouched() {
        let numbers = vec![3, 1, 2];
        let sorted = sort_by_key(&numbers, |n| Some(*n));
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_key_on_floats_and_mappings() {
        let values = BTreeMap::from([
            ("a".to_string(), 2.5),
            ("b".to_string(), -1.0),
            ("c".to_string(), 0.0),
        ]);
        assert_eq!(sort_by_key(&values, |v| Some(*v)), vec![-1.0, 2.5, 0.0]);
    }

    #[test]
    fn test_falsy_keys_sort_last_in_input_order() {
        assert_eq!(sort_by_key(&[3, 0, 1], |n| Some(*n)), vec![1, 3, 0]);
        assert_eq!(sort_by_key(&["b", "", "a"], |s| Some(*s)), vec!["a", "b", ""]);

        let tagged = [("x", 0), ("y", 2), ("z", 0), ("w", 1)];
        let sorted = sort_by_key(&tagged, |(_, key)| Some(*key));
        assert_eq!(sorted, vec![("w", 1), ("y", 2), ("x", 0), ("z", 0)]);
    }

    #[test]
    fn test_sort_primitives_through_function_extractor() {
        let sorted = sort_by(&[3, 1, 2], KeyExtractor::function(|n: &i32| Some(*n)));
        assert_eq!(sorted, vec![1, 2, 3]);

        let words = vec!["pear".to_string(), "fig".to_string()];
        let sorted = sort_by(&words, KeyExtractor::function(|w: &String| Some(w.len())));
        assert_eq!(sorted, vec!["fig".to_string(), "pear".to_string()]);
    }

    #[test]
    fn test_field_extractor_keeps_its_name() {
        let key = KeyExtractor::<Person, u32>::field("age").unwrap();
        assert_eq!(key.field_name(), Some("age"));
        let key = KeyExtractor::<Person, u32>::function(|p| p.age);
        assert_eq!(key.field_name(), None);
    }

    #[test]
    fn test_sort_small_inputs() {
        assert!(sort_by_key(&Vec::<i32>::new(), |n| Some(*n)).is_empty());
        assert_eq!(sort_by_key(&[9], |n| Some(*n)), vec![9]);
    }

    #[test]
    fn test_greater_treats_missing_and_falsy_as_largest() {
        assert!(greater(None, Some(1)));
        assert!(!greater(Some(1), None));
        assert!(!greater::<i32>(None, None));
        assert!(greater(Some(2), Some(1)));
        assert!(!greater(Some(1), Some(1)));
        assert!(greater(Some(0), Some(5)));
        assert!(!greater(Some(0), None));
        assert!(!greater(None, Some(0)));
    }
}
