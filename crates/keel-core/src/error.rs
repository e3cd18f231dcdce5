//! Error types for checked container access.
//!
//! Every checked accessor in the workspace reports failure through
//! [`AccessError`]. Failing reads never mutate the container.

use std::error::Error;
use std::fmt;

use crate::id::PersistentId;

/// Broad classification of an [`AccessError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A logical index at or beyond the container's length.
    OutOfRange,
    /// A read of a slot that is not occupied.
    AccessDenied,
    /// Use of a handle the container no longer honours. Only reachable
    /// through caller misuse.
    InvariantViolation,
}

/// Errors returned by checked accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// Checked indexing past the logical end of a ring deque.
    OutOfRange {
        /// The requested logical index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// Read-only access to a free or never-allocated slot.
    AccessDenied {
        /// The requested slot index.
        index: usize,
        /// Backing extent of the table at the time of the call.
        extent: usize,
    },
    /// A persistent ID outside the deque's live window.
    ExpiredId {
        /// The offending ID.
        id: PersistentId,
        /// First live ID (inclusive).
        live_start: PersistentId,
        /// One past the last live ID.
        live_end: PersistentId,
    },
    /// A buffer-relative cursor taken before the deque's layout changed.
    StaleCursor {
        /// Layout epoch recorded in the cursor.
        cursor_epoch: u64,
        /// Current layout epoch of the deque.
        current_epoch: u64,
    },
}

impl AccessError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::AccessDenied { .. } => ErrorKind::AccessDenied,
            Self::ExpiredId { .. } | Self::StaleCursor { .. } => ErrorKind::InvariantViolation,
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::AccessDenied { index, extent } => {
                if index < extent {
                    write!(f, "slot {index} is free")
                } else {
                    write!(f, "slot {index} is beyond the table extent {extent}")
                }
            }
            Self::ExpiredId {
                id,
                live_start,
                live_end,
            } => {
                write!(
                    f,
                    "persistent id {id} outside live window [{}, {})",
                    live_start.0, live_end.0
                )
            }
            Self::StaleCursor {
                cursor_epoch,
                current_epoch,
            } => {
                write!(
                    f,
                    "stale cursor: taken at layout epoch {cursor_epoch}, deque is at {current_epoch}"
                )
            }
        }
    }
}

impl Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_taxonomy() {
        assert_eq!(
            AccessError::OutOfRange { index: 3, len: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            AccessError::AccessDenied {
                index: 0,
                extent: 4
            }
            .kind(),
            ErrorKind::AccessDenied
        );
        assert_eq!(
            AccessError::ExpiredId {
                id: PersistentId(1),
                live_start: PersistentId(2),
                live_end: PersistentId(5),
            }
            .kind(),
            ErrorKind::InvariantViolation
        );
        assert_eq!(
            AccessError::StaleCursor {
                cursor_epoch: 1,
                current_epoch: 2
            }
            .kind(),
            ErrorKind::InvariantViolation
        );
    }

    #[test]
    fn access_denied_message_distinguishes_free_from_beyond() {
        let free = AccessError::AccessDenied {
            index: 1,
            extent: 4,
        };
        let beyond = AccessError::AccessDenied {
            index: 9,
            extent: 4,
        };
        assert_eq!(free.to_string(), "slot 1 is free");
        assert_eq!(beyond.to_string(), "slot 9 is beyond the table extent 4");
    }

    #[test]
    fn expired_id_message_names_window() {
        let err = AccessError::ExpiredId {
            id: PersistentId(1),
            live_start: PersistentId(2),
            live_end: PersistentId(5),
        };
        assert_eq!(
            err.to_string(),
            "persistent id #1 outside live window [2, 5)"
        );
    }
}
