//! Export options for [`Set::to_vec_with`](super::Set::to_vec_with).
//!
//! An export option receives the freshly exported key buffer and may
//! rearrange it in place. Options are applied in the order they are
//! passed, so `[&SortOutput, &reverse]` yields keys in descending order.
//!
//! Any `Fn(&mut [K])` closure is an option:
//!
//! ```rust
//! use seqkit::set::{Set, SortOutput};
//!
//! let set = Set::from_slice(&[3, 1, 2]);
//! let reverse = |keys: &mut [i32]| keys.reverse();
//!
//! assert_eq!(set.to_vec_with(&[&SortOutput, &reverse]), vec![3, 2, 1]);
//! ```

/// An in-place transformation applied to the keys exported from a set.
pub trait ExportOption<K> {
    /// Rearranges `keys` in place.
    fn apply(&self, keys: &mut [K]);
}

impl<K, F> ExportOption<K> for F
where
    F: Fn(&mut [K]),
{
    #[inline]
    fn apply(&self, keys: &mut [K]) {
        self(keys);
    }
}

/// Sorts exported keys in ascending order of `K: Ord`.
///
/// Keys of a set are unique, so an unstable sort gives the same result as a
/// stable one.
///
/// # Examples
///
/// ```rust
/// use seqkit::set::{ExportOption, SortOutput};
///
/// let mut keys = vec!["pear", "apple", "fig"];
/// SortOutput.apply(&mut keys);
/// assert_eq!(keys, vec!["apple", "fig", "pear"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOutput;

impl<K: Ord> ExportOption<K> for SortOutput {
    #[inline]
    fn apply(&self, keys: &mut [K]) {
        keys.sort_unstable();
    }
}
