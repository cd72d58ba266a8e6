//! Resettable forward cursor.
//!
//! A [`Cursor`] owns a sequence and a position inside it. It moves through
//! three states:
//!
//! ```text
//!             advance (len > 0)              advance (index + 1 < len)
//!     Fresh ─────────────────────► Positioned ◄──────┐
//!       │                              │    └────────┘
//!       │ advance (len == 0)           │ advance (index + 1 == len)
//!       ▼                              ▼
//!   Exhausted ◄────────────────────────┘
//!
//!   reset: any state ──► Fresh (index 0, new sequence)
//! ```
//!
//! A fresh cursor already points at index 0, so [`Cursor::pick`] returns the
//! first element before the first advance. The first [`Cursor::advance`]
//! lands on that same element; every later advance moves one step forward.
//! This makes the `while let Some(value) = cursor.pick_next()` loop visit
//! every element exactly once.

/// A forward cursor over an owned sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::Cursor;
///
/// let mut cursor = Cursor::new(vec![10, 20, 30]);
/// assert_eq!(cursor.pick_next(), Some(10));
/// assert_eq!(cursor.pick_next(), Some(20));
/// assert_eq!(cursor.pick_next(), Some(30));
/// assert_eq!(cursor.pick_next(), None);
///
/// // Exhaustion is not an error: `pick` falls back to the default value
/// assert_eq!(cursor.pick(), 0);
///
/// cursor.reset(vec![40, 50]);
/// assert_eq!(cursor.pick_next(), Some(40));
/// assert_eq!(cursor.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<T> {
    values: Vec<T>,
    index: usize,
    started: bool,
}

impl<T> Cursor<T> {
    /// Creates a fresh cursor over `values`.
    ///
    /// The cursor is exhausted immediately if `values` is empty.
    #[inline]
    #[must_use]
    pub const fn new(values: Vec<T>) -> Self {
        Self {
            values,
            index: 0,
            started: false,
        }
    }

    /// Creates a fresh cursor over a copy of `values`.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(values.to_vec())
    }

    /// Moves the cursor forward and reports whether it landed on an element.
    ///
    /// The first call after construction or [`reset`](Self::reset) lands on
    /// index 0. Calling `advance` on an exhausted cursor keeps it exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Cursor;
    ///
    /// let mut cursor = Cursor::new(vec!['a', 'b']);
    /// assert!(cursor.advance());
    /// assert_eq!(cursor.index(), 0);
    /// assert!(cursor.advance());
    /// assert_eq!(cursor.index(), 1);
    /// assert!(!cursor.advance());
    /// assert!(!cursor.advance());
    /// assert_eq!(cursor.index(), 2);
    /// ```
    pub fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
        } else if self.index < self.values.len() {
            self.index += 1;
        }
        debug_assert!(self.index <= self.values.len());
        self.index < self.values.len()
    }

    /// Returns the element under the cursor, or `T::default()` when the
    /// cursor is exhausted.
    #[must_use]
    pub fn pick(&self) -> T
    where
        T: Clone + Default,
    {
        self.peek().cloned().unwrap_or_default()
    }

    /// Returns a reference to the element under the cursor, or `None` when
    /// the cursor is exhausted.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.values.get(self.index)
    }

    /// Advances the cursor and returns the element it landed on.
    ///
    /// Returns `None` once the sequence is exhausted.
    pub fn pick_next(&mut self) -> Option<T>
    where
        T: Clone,
    {
        if self.advance() {
            self.peek().cloned()
        } else {
            None
        }
    }

    /// Replaces the sequence and rewinds the cursor to its fresh state.
    pub fn reset(&mut self, values: Vec<T>) {
        self.values = values;
        self.index = 0;
        self.started = false;
    }

    /// Returns the length of the whole sequence.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns the current index, equal to [`size`](Self::size) once
    /// exhausted.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the cursor has run past the last element.
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.index >= self.values.len()
    }

    /// Returns how many elements [`pick_next`](Self::pick_next) will still
    /// yield.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        let consumed = if self.started { self.index + 1 } else { 0 };
        self.values.len().saturating_sub(consumed)
    }
}

impl<T> From<Vec<T>> for Cursor<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for Cursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Default for Cursor<T> {
    #[inline]
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Drives the cursor with [`Cursor::pick_next`].
impl<T: Clone> Iterator for Cursor<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pick_next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Cursor<T> {}

impl<T: Clone> std::iter::FusedIterator for Cursor<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_cursor_is_fresh_at_zero() {
        let cursor = Cursor::new(vec![1, 2]);
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.started);
        assert!(!cursor.is_exhausted());
        assert_eq!(cursor.pick(), 1);
    }

    #[rstest]
    fn test_empty_cursor_is_exhausted_immediately() {
        let mut cursor: Cursor<i32> = Cursor::new(Vec::new());
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.pick(), 0);
        assert!(!cursor.advance());
        assert_eq!(cursor.pick_next(), None);
        assert_eq!(cursor.index(), 0);
    }

    #[rstest]
    fn test_pick_does_not_advance() {
        let mut cursor = Cursor::new(vec!["x", "y"]);
        cursor.advance();
        assert_eq!(cursor.pick(), "x");
        assert_eq!(cursor.pick(), "x");
        assert_eq!(cursor.index(), 0);
    }

    #[rstest]
    fn test_index_never_exceeds_size() {
        let mut cursor = Cursor::new(vec![1]);
        for _ in 0..5 {
            cursor.advance();
        }
        assert_eq!(cursor.index(), cursor.size());
    }

    #[rstest]
    fn test_reset_mid_traversal_returns_to_fresh() {
        let mut cursor = Cursor::new(vec![1, 2, 3]);
        cursor.advance();
        cursor.advance();
        cursor.reset(vec![7]);

        assert!(!cursor.started);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.size(), 1);
        assert_eq!(cursor.pick_next(), Some(7));
        assert_eq!(cursor.pick_next(), None);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1], 1)]
    #[case(vec![1, 2, 3], 3)]
    fn test_remaining_before_start(#[case] values: Vec<i32>, #[case] expected: usize) {
        assert_eq!(Cursor::new(values).remaining(), expected);
    }

    #[rstest]
    fn test_remaining_counts_down() {
        let mut cursor = Cursor::new(vec![1, 2, 3]);
        let mut seen = Vec::new();
        while cursor.remaining() > 0 {
            seen.push(cursor.remaining());
            cursor.advance();
        }
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(cursor.pick(), 3);
        assert_eq!(cursor.pick_next(), None);
    }

    const fn summary(cursor: &Cursor<i32>) -> (usize, usize, bool) {
        (cursor.size(), cursor.remaining(), cursor.is_exhausted())
    }

    #[rstest]
    fn test_accessors_usable_from_const_fn() {
        let mut cursor = Cursor::new(vec![4, 5]);
        assert_eq!(summary(&cursor), (2, 2, false));
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(summary(&cursor), (2, 0, true));
    }

    #[rstest]
    fn test_iterator_yields_every_element_once() {
        let cursor = Cursor::new(vec![1, 2, 3]);
        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
