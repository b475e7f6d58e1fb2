//! # underbar Common
//!
//! Shared building blocks for the underbar crates.
//!
//! ## Modules
//!
//! - [`collection`]: The [`Collection`] abstraction over ordered sequences and keyed mappings
//! - [`fields`]: Reading and writing named fields of records
//! - [`table`]: Insertion-ordered membership tables
//! - [`truthy`]: The default truthiness predicate
//! - [`error`]: The shared [`UnderbarError`] type
//!
//! ## Design Principles
//!
//! 1. **Read-only inputs**: Collections are only ever borrowed; results are new values
//! 2. **One traversal abstraction**: Every combinator goes through [`Collection::entries`]
//! 3. **Strict equality**: Membership uses `Eq + Hash`, never coercion

pub mod collection;
pub mod error;
pub mod fields;
pub mod table;
pub mod truthy;

// Re-export main types for convenience
pub use collection::{Collection, CollectionKind, Key, Sequence};
pub use error::{Result, UnderbarError};
pub use fields::{FieldAccess, FieldsMut};
pub use table::Table;
pub use truthy::Truthy;
