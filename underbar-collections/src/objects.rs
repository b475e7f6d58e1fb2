//! # Merging Records
//!
//! [`extend`] copies every entry of each source into a target record,
//! overwriting what is there. [`defaults`] only fills in names the target
//! does not have yet. Sources are visited in order, so for `extend` the last
//! source wins and for `defaults` the first one does.
//!
//! Sources can be any [`Collection`]: mapping entries keep their names and
//! sequence entries are stored under their index (`"0"`, `"1"`, ...).

use underbar_common::{Collection, FieldsMut};

use crate::iteration::each;

fn merge_into<M, S>(target: &mut M, sources: &[S], overwrite: bool)
where
    M: FieldsMut<S::Item> + ?Sized,
    S: Collection,
    S::Item: Clone,
{
    each(sources, |source, _, _| {
        each(source, |value, key, _| {
            let name = key.to_string();
            if overwrite || !target.has_field(&name) {
                target.set_field(name, value.clone());
            }
        });
    });
}

/// Copies every entry of `sources` into `target`, overwriting existing names.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use underbar_collections::extend;
///
/// let mut target = BTreeMap::from([("a".to_string(), 1)]);
/// extend(&mut target, &[BTreeMap::from([("a".to_string(), 10), ("b".to_string(), 2)])]);
/// assert_eq!(target["a"], 10);
/// assert_eq!(target["b"], 2);
/// ```
pub fn extend<'m, M, S>(target: &'m mut M, sources: &[S]) -> &'m mut M
where
    M: FieldsMut<S::Item> + ?Sized,
    S: Collection,
    S::Item: Clone,
{
    merge_into(target, sources, true);
    target
}

/// Copies entries of `sources` into `target` only where the name is missing.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use underbar_collections::defaults;
///
/// let mut target = BTreeMap::from([("a".to_string(), 1)]);
/// defaults(&mut target, &[BTreeMap::from([("a".to_string(), 10), ("b".to_string(), 2)])]);
/// assert_eq!(target["a"], 1);
/// assert_eq!(target["b"], 2);
/// ```
pub fn defaults<'m, M, S>(target: &'m mut M, sources: &[S]) -> &'m mut M
where
    M: FieldsMut<S::Item> + ?Sized,
    S: Collection,
    S::Item: Clone,
{
    merge_into(target, sources, false);
    target
}
