//! Sequence configuration parameters.

use crate::error::SequenceError;

/// Construction parameters for a [`Sequence`](crate::Sequence).
///
/// Validated when the sequence is built; a sequence never consults its
/// config again after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of element slots allocated up front.
    ///
    /// Default: 8. Must be at least 1. This is pre-allocation only; a new
    /// sequence always starts with zero live elements.
    pub initial_capacity: usize,
}

impl SequenceConfig {
    /// Default number of slots for a freshly constructed sequence.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Factor applied to the capacity each time a full sequence grows.
    pub const GROWTH_FACTOR: usize = 2;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Create a config with the given initial capacity.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.initial_capacity == 0 {
            return Err(SequenceError::InvalidArgument {
                capacity: self.initial_capacity,
            });
        }
        Ok(())
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new()
    }
}
