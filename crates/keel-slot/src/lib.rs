//! Sparse slot table for the Keel containers.
//!
//! A [`SlotTable`] is a randomly-indexed collection in which any index may
//! be free or occupied. Occupying an index never moves another occupied
//! element, so an index handed out to a caller keeps naming the same value
//! until the caller releases it.
//!
//! ```text
//! index     0     1     2     3     4
//! slots   [ a ] [   ] [ c ] [   ] [ e ]      extent = 5, occupied = 3
//! mask      O     F     O     F     O
//!
//! release(4) ─▶ extent = 3 (slot 3 was free and trailing, so it goes too)
//! ```
//!
//! # Access model
//!
//! - **Mutable access auto-vivifies.** [`SlotTable::get_or_occupy`] (and
//!   `table[i] = v`) grows the table up to `i`, marking any gap free.
//! - **Read access is checked.** [`SlotTable::get`] fails with
//!   [`AccessError::AccessDenied`](keel_core::AccessError::AccessDenied)
//!   for free or out-of-range slots; a free slot has no meaningful value.
//! - **Release trims.** Freeing the highest occupied slot sheds every
//!   trailing free slot, so the extent tracks actual use rather than a
//!   high-water mark.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod iter;
pub mod table;

pub use iter::{Indices, IntoIter, Iter, IterMut, Slot, Slots};
pub use table::SlotTable;
