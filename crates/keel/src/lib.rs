//! Keel: containers that keep caller-visible positions stable across
//! growth, removal, and reuse of storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Keel sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! // A slot table of ring deques: one FIFO per connection slot.
//! let mut queues: SlotTable<RingDeque<&str>> = SlotTable::new();
//! let conn = queues.find_free_index();
//! let first = queues.get_or_occupy(conn).push_back("hello");
//! queues.get_or_occupy(conn).push_back("world");
//!
//! let queue = queues.get(conn).unwrap();
//! assert_eq!(queue.get_by_id(first), Ok(&"hello"));
//!
//! // Popping another element never disturbs a live ID.
//! let queue = queues.get_or_occupy(conn);
//! let second = queue.id_at(1).unwrap();
//! assert_eq!(queue.pop_front(), Some("hello"));
//! assert_eq!(queue.get_by_id(second), Ok(&"world"));
//! assert!(queue.get_by_id(first).is_err());
//!
//! queues.release(conn);
//! assert_eq!(queues.slot_extent(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `keel-core` | `PersistentId`, `AccessError`, `ErrorKind` |
//! | [`slot`] | `keel-slot` | `SlotTable` and its iterators |
//! | [`ring`] | `keel-ring` | `RingDeque`, `Cursor`, `RingConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers and error types (`keel-core`).
pub use keel_core as types;

/// Sparse slot table (`keel-slot`).
///
/// [`slot::SlotTable`] hands out stable indices; releasing the last
/// occupied slot trims the free tail.
pub use keel_slot as slot;

/// Ring-buffer deque with persistent IDs (`keel-ring`).
///
/// [`ring::RingDeque`] pushes at the back and pops at the front; IDs
/// returned by `push_back` survive growth and rotation.
pub use keel_ring as ring;

/// Common imports for typical Keel usage.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    pub use keel_core::{AccessError, ErrorKind, PersistentId};
    pub use keel_ring::{ConfigError, Cursor, RingConfig, RingDeque};
    pub use keel_slot::{Slot, SlotTable};
}
