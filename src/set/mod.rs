//! Keys-only hash set.
//!
//! This module provides [`Set`], a uniqueness-preserving container that
//! stores keys only, backed by a `HashSet`, together
//! with the [`ExportOption`]s that shape the `Vec` a set is exported to.
//!
//! - [`Set`]: Keyed container with bulk construction and bulk pop
//! - [`ExportOption`]: In-place transformation of an exported key buffer
//! - [`SortOutput`]: Export option sorting keys in ascending order
//!
//! # Examples
//!
//! ```rust
//! use seqkit::set::{Set, SortOutput};
//!
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let users = [
//!     User { id: 7, name: "ada" },
//!     User { id: 3, name: "grace" },
//!     User { id: 7, name: "alan" },
//! ];
//!
//! // Build the set straight from domain objects
//! let mut ids = Set::from_extract(&users, |user| user.id);
//! assert_eq!(ids.len(), 2);
//! assert!(ids.contains(&3));
//!
//! // Pop in request order; absent keys are skipped
//! assert_eq!(ids.pops([9, 7]), vec![7]);
//!
//! ids.add(1);
//! assert_eq!(ids.to_vec_with(&[&SortOutput]), vec![1, 3]);
//!
//! // Any field can serve as the key
//! let names = Set::from_extract(&users, |user| user.name);
//! assert_eq!(names.to_sorted_vec(), vec!["ada", "alan", "grace"]);
//! ```

mod export;
mod keyset;

pub use export::ExportOption;
pub use export::SortOutput;
pub use keyset::Set;
pub use keyset::SetIntoIterator;
pub use keyset::SetIterator;
