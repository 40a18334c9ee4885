//! Query composition over entity snapshots.
//!
//! Everything here is synchronous and works on borrowed data obtained from
//! [`Repository::get_all`](crate::framework::Repository::get_all). The generic helpers follow
//! the familiar join/group semantics:
//!
//! - [`inner_join`]: for each outer element in order, every matching inner element in inner order.
//! - [`group_join`]: each outer element paired with its (possibly empty) list of matches.
//! - [`group_by`]: groups in first-encounter key order, members in original order.
//!
//! The concrete queries in [`joins`] and [`grouping`] are built from these.

pub mod grouping;
pub mod joins;

pub use grouping::*;
pub use joins::*;

use std::collections::HashMap;
use std::hash::Hash;

/// Pairs every outer element with every inner element sharing its key.
pub fn inner_join<'a, O: 'a, I: 'a, K, R>(
    outer: impl IntoIterator<Item = &'a O>,
    inner: impl IntoIterator<Item = &'a I>,
    outer_key: impl Fn(&O) -> K,
    inner_key: impl Fn(&I) -> K,
    mut project: impl FnMut(&'a O, &'a I) -> R,
) -> Vec<R>
where
    K: Eq + Hash,
{
    let lookup = index_by(inner, inner_key);
    let mut joined = Vec::new();
    for o in outer {
        if let Some(matches) = lookup.get(&outer_key(o)) {
            for &i in matches {
                joined.push(project(o, i));
            }
        }
    }
    joined
}

/// Pairs every outer element with all inner elements sharing its key; unmatched outer
/// elements get an empty list.
pub fn group_join<'a, O: 'a, I: 'a, K>(
    outer: impl IntoIterator<Item = &'a O>,
    inner: impl IntoIterator<Item = &'a I>,
    outer_key: impl Fn(&O) -> K,
    inner_key: impl Fn(&I) -> K,
) -> Vec<(&'a O, Vec<&'a I>)>
where
    K: Eq + Hash,
{
    let lookup = index_by(inner, inner_key);
    outer
        .into_iter()
        .map(|o| {
            let matches = lookup.get(&outer_key(o)).cloned().unwrap_or_default();
            (o, matches)
        })
        .collect()
}

/// Partitions `items` by key.
pub fn group_by<'a, T: 'a, K>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match positions.get(&k) {
            Some(&index) => groups[index].1.push(item),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}

fn index_by<'a, T: 'a, K>(
    items: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
) -> HashMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
{
    let mut lookup: HashMap<K, Vec<&'a T>> = HashMap::new();
    for item in items {
        lookup.entry(key(item)).or_default().push(item);
    }
    lookup
}
