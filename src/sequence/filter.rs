//! Stable in-place filtering.
//!
//! [`filter_inplace`] partitions a slice without allocating: kept elements
//! are compacted to the front in their original order and the kept prefix
//! is returned. The algorithm runs two cursors over the slice:
//!
//! ```text
//!  keep = is_even
//!
//!  [1, 2, 3, 4, 5, 6]      read scans every element once,
//!   ^w ^r                  write moves only when an element is kept
//!
//!  [2, 1, 3, 4, 5, 6]      swap(w, r) when w != r
//!      ^w    ^r
//!
//!  [2, 4, 3, 1, 5, 6] ...  [2, 4, 6, 1, 5, 3]
//!   \_____/                 \_____/ returned prefix
//! ```
//!
//! - O(n) time, one call of `keep` per element
//! - O(1) extra space

/// Moves the elements of `items` satisfying `keep` to the front, in their
/// original relative order, and returns that prefix.
///
/// Elements past the returned prefix are the rejected ones, in unspecified
/// order.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::filter_inplace;
///
/// let mut numbers = [1, 2, 3, 4, 5, 6];
/// let kept = filter_inplace(&mut numbers, |number| number % 2 == 0);
/// assert_eq!(kept, &[2, 4, 6]);
///
/// // The tail still holds the rejected elements
/// numbers[3..].sort_unstable();
/// assert_eq!(numbers[3..], [1, 3, 5]);
/// ```
pub fn filter_inplace<T, F>(items: &mut [T], mut keep: F) -> &mut [T]
where
    F: FnMut(&T) -> bool,
{
    let mut write = 0;
    for read in 0..items.len() {
        if keep(&items[read]) {
            if write != read {
                items.swap(write, read);
            }
            write += 1;
        }
    }
    &mut items[..write]
}

/// Filters `items` in place like [`filter_inplace`] and truncates the
/// vector to the kept prefix, dropping the rejected elements.
///
/// Returns the number of kept elements. The vector's capacity is left
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::filter_inplace_vec;
///
/// let mut names = vec!["ada".to_string(), String::new(), "alan".to_string()];
/// let kept = filter_inplace_vec(&mut names, |name| !name.is_empty());
///
/// assert_eq!(kept, 2);
/// assert_eq!(names, vec!["ada", "alan"]);
/// ```
pub fn filter_inplace_vec<T, F>(items: &mut Vec<T>, keep: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let kept = filter_inplace(items, keep).len();
    items.truncate(kept);
    kept
}
