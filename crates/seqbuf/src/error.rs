//! Sequence-specific error types.
//!
//! Only recoverable failures live here. Index contract violations are
//! programmer errors and panic at the call site instead.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing or growing a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// A requested capacity was not positive.
    InvalidArgument {
        /// The rejected capacity.
        capacity: usize,
    },
    /// The allocator could not provide a block for the requested capacity,
    /// or the byte size of that block does not fit in `isize`.
    OutOfMemory {
        /// Number of element slots that were requested.
        requested_capacity: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },
}

impl SequenceError {
    /// Whether this error came from the allocator rather than the caller.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { capacity } => {
                write!(f, "invalid capacity {capacity}: capacity must be positive")
            }
            Self::OutOfMemory {
                requested_capacity,
                element_size,
            } => {
                write!(
                    f,
                    "out of memory: cannot allocate {requested_capacity} slots of {element_size} bytes"
                )
            }
        }
    }
}

impl Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_names_capacity() {
        let err = SequenceError::InvalidArgument { capacity: 0 };
        assert_eq!(
            err.to_string(),
            "invalid capacity 0: capacity must be positive"
        );
        assert!(!err.is_out_of_memory());
    }

    #[test]
    fn out_of_memory_display_names_request() {
        let err = SequenceError::OutOfMemory {
            requested_capacity: 64,
            element_size: 8,
        };
        assert_eq!(
            err.to_string(),
            "out of memory: cannot allocate 64 slots of 8 bytes"
        );
        assert!(err.is_out_of_memory());
    }
}
