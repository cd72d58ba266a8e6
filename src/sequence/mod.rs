//! Sequence transforms and a resettable cursor.
//!
//! This module provides stateless functions over slices and iterators:
//!
//! - [`for_each`], [`map`], [`reduce`], [`find_first_match`]: Traversal
//! - [`group_by_unique_key`], [`collect_by_key`]: Grouping into a [`GroupMap`]
//! - [`filter_inplace`], [`filter_inplace_vec`]: Allocation-free stable filter
//!
//! and one stateful type:
//!
//! - [`Cursor`]: Forward cursor over an owned sequence that can be rewound
//!   onto a new sequence
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{collect_by_key, filter_inplace, reduce, Cursor};
//!
//! let lengths = reduce(&["a", "bb", "ccc"], |word| word.len());
//! assert_eq!(lengths, 6);
//!
//! let by_parity = collect_by_key(1..=5, |number| number % 2);
//! assert_eq!(by_parity[&1], vec![1, 3, 5]);
//!
//! let mut scores = [12, 3, 40, 7];
//! let passing = filter_inplace(&mut scores, |score| *score >= 10);
//! assert_eq!(passing, &[12, 40]);
//!
//! let mut cursor = Cursor::new(vec!['x', 'y']);
//! assert_eq!(cursor.pick_next(), Some('x'));
//! ```
//!
//! [`GroupMap`]: crate::hash::GroupMap

mod cursor;
mod filter;
mod grouping;
mod transform;

pub use cursor::Cursor;
pub use filter::filter_inplace;
pub use filter::filter_inplace_vec;
pub use grouping::collect_by_key;
pub use grouping::group_by_unique_key;
pub use transform::find_first_match;
pub use transform::for_each;
pub use transform::map;
pub use transform::reduce;
