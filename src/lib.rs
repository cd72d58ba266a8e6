//! # seqkit
//!
//! Keyed sets, sequence transforms and a resettable cursor.
//!
//! ## Overview
//!
//! This library collects the small container helpers that keep showing up
//! in application code but that the standard library does not spell out:
//!
//! - **Set**: a keys-only hash container with bulk pop and composable,
//!   optionally sorted export
//! - **Sequence transforms**: map, reduce, grouping by key, first-match
//!   search and an allocation-free stable filter
//! - **Cursor**: a forward, restartable cursor over an owned sequence
//!
//! ## Feature Flags
//!
//! - `set`: The [`set`] module
//! - `sequence`: The [`sequence`] module
//! - `serde`: `Serialize`/`Deserialize` for [`set::Set`]
//! - `fxhash`: Use `rustc-hash` as the default hasher
//! - `ahash`: Use `ahash` as the default hasher
//! - `full`: Enable all modules and `serde`
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let mut set = Set::from_slice(&[3, 1, 2, 3]);
//! assert_eq!(set.pops([2, 7]), vec![2]);
//! assert_eq!(set.to_sorted_vec(), vec![1, 3]);
//!
//! let mut numbers = vec![1, 2, 3, 4, 5, 6];
//! let even = filter_inplace(&mut numbers, |number| number % 2 == 0);
//! assert_eq!(even, &[2, 4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::hash::DefaultHashBuilder;

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

pub mod hash;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "sequence")]
pub mod sequence;
