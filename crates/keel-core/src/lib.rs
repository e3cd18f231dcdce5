//! Core identifiers and error types for the Keel containers.
//!
//! This is the leaf crate with zero internal dependencies. It holds the
//! pieces both containers agree on: the [`PersistentId`] that names a ring
//! deque element independently of its buffer slot, and the [`AccessError`]
//! taxonomy reported by every checked accessor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{AccessError, ErrorKind};
pub use id::PersistentId;
