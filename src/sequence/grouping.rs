//! Grouping of items by a derived key.
//!
//! Both functions consume any `IntoIterator`; pass `items.iter()` to group
//! references, or `items.iter().cloned()` to keep the source intact.

use std::hash::Hash;

use crate::hash::DefaultHashBuilder;
use crate::hash::GroupMap;

/// Indexes `items` by the key `key_of` derives from each of them.
///
/// When several items share a key, the last one in traversal order wins.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::group_by_unique_key;
///
/// let pairs = [(1, "a"), (2, "b"), (1, "c")];
/// let by_id = group_by_unique_key(pairs, |pair| pair.0);
///
/// assert_eq!(by_id.len(), 2);
/// assert_eq!(by_id[&1], (1, "c"));
/// ```
pub fn group_by_unique_key<I, K, F>(items: I, mut key_of: F) -> GroupMap<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let items = items.into_iter();
    let mut grouped =
        GroupMap::with_capacity_and_hasher(items.size_hint().0, DefaultHashBuilder::default());
    for item in items {
        grouped.insert(key_of(&item), item);
    }
    grouped
}

/// Collects `items` into one `Vec` per key derived by `key_of`.
///
/// Items keep their relative order inside each group.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::collect_by_key;
///
/// let words = ["apple", "bean", "avocado", "beet", "corn"];
/// let by_initial = collect_by_key(words, |word| word.as_bytes()[0]);
///
/// assert_eq!(by_initial[&b'a'], vec!["apple", "avocado"]);
/// assert_eq!(by_initial[&b'b'], vec!["bean", "beet"]);
/// assert_eq!(by_initial[&b'c'], vec!["corn"]);
/// ```
pub fn collect_by_key<I, K, F>(items: I, mut key_of: F) -> GroupMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let items = items.into_iter();
    let mut grouped: GroupMap<K, Vec<I::Item>> =
        GroupMap::with_capacity_and_hasher(items.size_hint().0, DefaultHashBuilder::default());
    for item in items {
        grouped.entry(key_of(&item)).or_default().push(item);
    }
    grouped
}
