//! Growable ring-buffer deque with persistent element IDs.
//!
//! A [`RingDeque`] appends at the logical back and removes from the logical
//! front in amortised O(1), backed by a circular buffer that grows on
//! demand. Every element receives a [`PersistentId`](keel_core::PersistentId)
//! when it is pushed; the ID keeps resolving to that element across growth,
//! linearisation, and front pops of *other* elements.
//!
//! # Addressing
//!
//! ```text
//! physical   0     1     2     3     4     5
//! buffer   [ e ] [ f ] [   ] [ b ] [ c ] [ d ]     begin = 3, len = 5
//! logical    3     4           0     1     2       id_offset = 17
//! id        #20   #21         #17   #18   #19
//!
//! slot(logical i) = (begin + i) mod capacity
//! slot(id)        = (begin + (id - id_offset)) mod capacity,
//!                   valid while id_offset <= id < id_offset + len
//! ```
//!
//! # Position kinds
//!
//! - **Borrowing iterators** ([`Iter`], [`IterMut`]) walk the live range
//!   front to back; the borrow keeps the layout fixed while they run.
//! - **Cursors** ([`Cursor`]) are detached buffer-relative positions. They
//!   record the deque's layout epoch and are rejected once the layout moves
//!   (pop, growth, linearisation, clear).
//! - **Persistent IDs** survive every layout change and only expire when
//!   their element leaves the live window.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod deque;
pub mod iter;

pub use config::{ConfigError, RingConfig};
pub use cursor::Cursor;
pub use deque::RingDeque;
pub use iter::{IntoIter, Iter, IterMut, PersistentIter};
