//! Keys-only hash set.
//!
//! [`Set`] wraps a `HashSet<K>` so that keys are stored without any
//! associated value. The backing set is never exposed.
//!
//! - O(1) expected `contains`, `add` and `remove`
//! - O(k) `pops` for k requested keys
//! - O(n) export, O(n log n) when sorted
//!
//! # Examples
//!
//! ```rust
//! use seqkit::set::Set;
//!
//! let mut set = Set::from_slice(&["a", "b", "a"]);
//! assert_eq!(set.len(), 2);
//!
//! set.add("c");
//! set.remove(&"a");
//! assert_eq!(set.to_sorted_vec(), vec!["b", "c"]);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::export::{ExportOption, SortOutput};
use crate::hash::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// A uniqueness-preserving set of keys.
///
/// Keys must implement `Hash` and `Eq`. Iteration order is unspecified;
/// request a deterministic order at export time with
/// [`to_sorted_vec`](Self::to_sorted_vec) or [`SortOutput`].
///
/// # Time Complexity
///
/// | Operation        | Complexity          |
/// |------------------|---------------------|
/// | `new`            | O(1)                |
/// | `from_slice`     | O(n)                |
/// | `from_extract`   | O(n)                |
/// | `add`            | O(1) expected       |
/// | `contains`       | O(1) expected       |
/// | `remove`         | O(1) expected       |
/// | `pops`           | O(k) expected       |
/// | `len`/`is_empty` | O(1)                |
/// | `to_vec`         | O(n)                |
/// | `to_sorted_vec`  | O(n log n)          |
///
/// # Examples
///
/// ```rust
/// use seqkit::set::Set;
///
/// let mut set: Set<i32> = Set::new();
/// assert!(set.add(42));
/// assert!(!set.add(42));
/// assert!(set.contains(&42));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct Set<K, S = DefaultHashBuilder> {
    inner: HashSet<K, S>,
}

impl<K> Set<K> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` keys.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, S> Set<K, S> {
    /// Creates an empty set that hashes keys with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::set::Set;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.add("key");
    /// assert!(set.contains("key"));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with room for at least `capacity` keys, hashing
    /// keys with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of keys in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.add(1);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the keys in unspecified order.
    #[inline]
    pub fn iter(&self) -> SetIterator<'_, K> {
        SetIterator {
            inner: self.inner.iter(),
        }
    }

    /// Removes every key, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<K: Hash + Eq> Set<K> {
    /// Creates a set holding exactly the distinct keys of `keys`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::set::Set;
    ///
    /// let set = Set::from_slice(&[1, 2, 2, 3, 1]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(keys: &[K]) -> Self
    where
        K: Clone,
    {
        let mut set = Self::with_capacity(keys.len());
        set.extend(keys.iter().cloned());
        set
    }

    /// Creates a set of the keys `extract` derives from each item.
    ///
    /// Items mapping to the same key contribute it once.
    ///
    /// # Arguments
    ///
    /// * `items` - The items to derive keys from
    /// * `extract` - The key-extraction function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::set::Set;
    ///
    /// let words = ["apple", "avocado", "banana"];
    /// let initials = Set::from_extract(&words, |word| word.chars().next());
    ///
    /// assert_eq!(initials.len(), 2);
    /// assert!(initials.contains(&Some('a')));
    /// ```
    #[must_use]
    pub fn from_extract<T, F>(items: &[T], mut extract: F) -> Self
    where
        F: FnMut(&T) -> K,
    {
        let mut set = Self::with_capacity(items.len());
        for item in items {
            set.add(extract(item));
        }
        set
    }
}

impl<K: Hash + Eq, S: BuildHasher> Set<K, S> {
    /// Inserts `key`.
    ///
    /// Returns `true` if the key was not present. Adding a key that is
    /// already present leaves the set unchanged.
    #[inline]
    pub fn add(&mut self, key: K) -> bool {
        self.inner.insert(key)
    }

    /// Returns `true` if the set contains `key`.
    ///
    /// The key may be any borrowed form of the set's key type, but `Hash`
    /// and `Eq` on the borrowed form must match those for the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::set::Set;
    ///
    /// let set: Set<String> = ["hello".to_string()].into_iter().collect();
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(key)
    }

    /// Removes `key` if present.
    ///
    /// Returns `true` if the key was present. Removing an absent key is a
    /// no-op.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key)
    }

    /// Removes every requested key that is present and returns those keys
    /// in the order they were requested.
    ///
    /// Keys that are not in the set are skipped, so the result is never
    /// longer than the request. A key requested twice is popped only once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::set::Set;
    ///
    /// let mut set = Set::from_slice(&[1, 2, 3, 4]);
    ///
    /// assert_eq!(set.pops([4, 9, 1, 4]), vec![4, 1]);
    /// assert_eq!(set.len(), 2);
    ///
    /// // The popped keys are gone
    /// assert!(set.pops([4, 1]).is_empty());
    /// ```
    pub fn pops<I>(&mut self, keys: I) -> Vec<K>
    where
        I: IntoIterator<Item = K>,
    {
        let keys = keys.into_iter();
        let mut subtracted = Vec::with_capacity(keys.size_hint().0.min(self.len()));
        for key in keys {
            if let Some(key) = self.inner.take(&key) {
                subtracted.push(key);
            }
        }
        subtracted
    }

    /// Exports the keys into a `Vec` in unspecified order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Exports the keys and applies each option to the result in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::set::{Set, SortOutput};
    ///
    /// let set = Set::from_slice(&[3, 1, 2]);
    /// assert_eq!(set.to_vec_with(&[&SortOutput]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec_with(&self, options: &[&dyn ExportOption<K>]) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = self.to_vec();
        apply_options(&mut keys, options);
        keys
    }

    /// Exports the keys in ascending order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<K>
    where
        K: Clone + Ord,
    {
        self.to_vec_with(&[&SortOutput])
    }

    /// Consumes the set and returns its keys in unspecified order.
    #[must_use]
    pub fn into_vec(self) -> Vec<K> {
        self.inner.into_iter().collect()
    }

    /// Consumes the set and returns its keys in ascending order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<K>
    where
        K: Ord,
    {
        let mut keys = self.into_vec();
        SortOutput.apply(&mut keys);
        keys
    }
}

fn apply_options<K>(keys: &mut [K], options: &[&dyn ExportOption<K>]) {
    for option in options {
        option.apply(keys);
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the keys of a [`Set`].
pub struct SetIterator<'a, K> {
    inner: hash_set::Iter<'a, K>,
}

impl<'a, K> Iterator for SetIterator<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for SetIterator<'_, K> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the keys of a [`Set`].
pub struct SetIntoIterator<K> {
    inner: hash_set::IntoIter<K>,
}

impl<K> Iterator for SetIntoIterator<K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for SetIntoIterator<K> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, S: Default> Default for Set<K, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: Hash + Eq, S: BuildHasher + Default> FromIterator<K> for Set<K, S> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<K: Hash + Eq, S: BuildHasher> Extend<K> for Set<K, S> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K: Hash + Eq, const N: usize> From<[K; N]> for Set<K> {
    fn from(keys: [K; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.extend(keys);
        set
    }
}

impl<K, S> IntoIterator for Set<K, S> {
    type Item = K;
    type IntoIter = SetIntoIterator<K>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, K, S> IntoIterator for &'a Set<K, S> {
    type Item = &'a K;
    type IntoIter = SetIterator<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq, S: BuildHasher> PartialEq for Set<K, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|key| other.contains(key))
    }
}

impl<K: Hash + Eq, S: BuildHasher> Eq for Set<K, S> {}

impl<K: fmt::Debug, S> fmt::Debug for Set<K, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, S> fmt::Display for Set<K, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, S> serde::Serialize for Set<K, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<K, S> {
    marker: std::marker::PhantomData<Set<K, S>>,
}

#[cfg(feature = "serde")]
impl<'de, K, S> serde::de::Visitor<'de> for SetVisitor<K, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = Set<K, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Set::default();
        while let Some(key) = seq.next_element()? {
            set.add(key);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, S> serde::Deserialize<'de> for Set<K, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_sequence() {
        let set = Set::from([7]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[7]");
    }

    #[rstest]
    fn test_deserialize_collapses_duplicates() {
        let set: Set<i32> = serde_json::from_str("[3, 1, 3, 2, 1]").unwrap();
        assert_eq!(set.to_sorted_vec(), vec![1, 2, 3]);
    }
}
