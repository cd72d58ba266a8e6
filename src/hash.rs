//! Hash builder selection.
//!
//! Every hash-based container produced by this crate ([`Set`] and the
//! grouping maps returned by [`collect_by_key`] and
//! [`group_by_unique_key`]) is built with [`DefaultHashBuilder`]. The alias
//! is chosen at compile time:
//!
//! | Feature  | Hash builder                              |
//! |----------|-------------------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`               |
//! | `ahash`  | `ahash::RandomState`                      |
//! | neither  | `std::collections::hash_map::RandomState` |
//!
//! When both features are enabled `fxhash` wins.
//!
//! [`Set`]: crate::set::Set
//! [`collect_by_key`]: crate::sequence::collect_by_key
//! [`group_by_unique_key`]: crate::sequence::group_by_unique_key

/// Hash builder used by default for every hash-based container.
///
/// With the `fxhash` feature enabled, this is `rustc_hash::FxBuildHasher`,
/// which is fast but not resistant to `HashDoS`.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by default for every hash-based container.
///
/// With the `ahash` feature enabled, this is `ahash::RandomState`.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by default for every hash-based container.
///
/// Without a fast-hash feature, this is the standard library's
/// `RandomState` (SipHash 1-3 with random keys).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// A `HashMap` keyed with [`DefaultHashBuilder`].
///
/// Returned by the grouping functions of the [`sequence`](crate::sequence)
/// module.
pub type GroupMap<K, V> = std::collections::HashMap<K, V, DefaultHashBuilder>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_default_hash_builder_is_deterministic_per_instance() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
    }

    #[rstest]
    fn test_group_map_uses_default_hash_builder() {
        let mut map: GroupMap<&str, i32> = GroupMap::default();
        map.insert("one", 1);
        map.insert("one", 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("one"), Some(&2));
    }
}
