//! Traversal helpers over slices.

use std::ops::Add;

/// Calls `function` on every element of `items`, front to back.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::for_each;
///
/// let mut seen = Vec::new();
/// for_each(&[1, 2, 3], |number| seen.push(*number));
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
#[inline]
pub fn for_each<T, F>(items: &[T], function: F)
where
    F: FnMut(&T),
{
    items.iter().for_each(function);
}

/// Returns a new `Vec` holding `function(&items[i])` at every index `i`.
///
/// The input is left untouched.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::map;
///
/// let words = ["one", "three"];
/// assert_eq!(map(&words, |word| word.len()), vec![3, 5]);
/// ```
pub fn map<T, U, F>(items: &[T], function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(function).collect()
}

/// Sums `function(item)` over `items` in order, starting from
/// `U::default()`.
///
/// An empty slice yields `U::default()`. Overflow behaves as `+` does for
/// `U`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::reduce;
///
/// struct Line {
///     price: u32,
///     quantity: u32,
/// }
///
/// let lines = [
///     Line { price: 3, quantity: 2 },
///     Line { price: 10, quantity: 1 },
/// ];
/// assert_eq!(reduce(&lines, |line| line.price * line.quantity), 16);
///
/// let empty: [Line; 0] = [];
/// assert_eq!(reduce(&empty, |line| line.price), 0);
/// ```
pub fn reduce<T, U, F>(items: &[T], mut function: F) -> U
where
    U: Default + Add<Output = U>,
    F: FnMut(&T) -> U,
{
    items
        .iter()
        .fold(U::default(), |accumulator, item| accumulator + function(item))
}

/// Returns the index of the first element satisfying `predicate`, or `None`
/// if there is none.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::find_first_match;
///
/// let numbers = [5, 8, 12, 8];
/// assert_eq!(find_first_match(&numbers, |number| *number == 8), Some(1));
/// assert_eq!(find_first_match(&numbers, |number| *number > 100), None);
/// ```
#[inline]
pub fn find_first_match<T, P>(items: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    items.iter().position(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_for_each_visits_in_order() {
        let mut order = String::new();
        for_each(&['a', 'b', 'c'], |letter| order.push(*letter));
        assert_eq!(order, "abc");
    }

    #[rstest]
    fn test_for_each_on_empty_never_calls() {
        let mut calls = 0;
        for_each(&[] as &[i32], |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_map_preserves_length_and_input() {
        let input = vec![1, 2, 3];
        let output = map(&input, |number| number * 10);
        assert_eq!(output, vec![10, 20, 30]);
        assert_eq!(input, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_map_changes_type() {
        let output = map(&[1, 22, 333], |number| number.to_string());
        assert_eq!(output, vec!["1", "22", "333"]);
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[4], 4)]
    #[case(&[1, 2, 3, 4], 10)]
    #[case(&[-5, 5, -1], -1)]
    fn test_reduce_sums_mapped_values(#[case] items: &[i64], #[case] expected: i64) {
        assert_eq!(reduce(items, i64::clone), expected);
    }

    #[rstest]
    fn test_reduce_with_floats() {
        let total = reduce(&[0.5_f64, 0.25, 0.25], f64::clone);
        assert!((total - 1.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_reduce_into_wider_type() {
        let total: u64 = reduce(&[u32::MAX, u32::MAX], |value| u64::from(*value));
        assert_eq!(total, 2 * u64::from(u32::MAX));
    }

    #[rstest]
    #[case(&[1, 3, 4, 6], Some(2))]
    #[case(&[2], Some(0))]
    #[case(&[1, 3, 5], None)]
    #[case(&[], None)]
    fn test_find_first_match_even(#[case] items: &[i32], #[case] expected: Option<usize>) {
        assert_eq!(find_first_match(items, |number| number % 2 == 0), expected);
    }

    #[rstest]
    fn test_find_first_match_stops_at_first() {
        let mut inspected = 0;
        let index = find_first_match(&[0, 1, 1, 1], |number| {
            inspected += 1;
            *number == 1
        });
        assert_eq!(index, Some(1));
        assert_eq!(inspected, 2);
    }
}
