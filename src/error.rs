use thiserror::Error as ThisError;

use crate::point::Point;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by record construction and tree mutation.
///
/// Every failing operation leaves the tree exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The buffer does not hold a well-formed record.
    #[error("malformed record: {reason}")]
    MalformedRecord {
        /// What is wrong with the buffer.
        reason: &'static str,
    },

    /// Two keys first differ at a byte offset that a [`Point`] can not address.
    #[error("keys diverge at byte {offset}, beyond the maximum of {}", Point::MAX_OFFSET)]
    KeyTooLong {
        /// Byte offset of the first divergence.
        offset: usize,
    },

    /// The branch arena holds as many nodes as it is allowed to.
    #[error("branch capacity of {capacity} nodes exhausted")]
    CapacityExhausted {
        /// The configured number of branch nodes.
        capacity: usize,
    },

    /// A structural check of the tree failed.
    #[error("invariant violated: {0}")]
    InvariantViolated(String),
}

impl Error {
    pub(crate) const fn malformed(reason: &'static str) -> Self {
        Self::MalformedRecord { reason }
    }
}
