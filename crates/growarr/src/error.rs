//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Why a buffer allocation could not be satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocFailure {
    /// The request exceeds the configured `max_capacity`.
    CapacityLimit {
        /// The configured limit, in slots.
        limit: usize,
    },
    /// The byte size of the request overflows `isize::MAX`.
    Overflow,
    /// The allocator reported that memory is exhausted.
    OutOfMemory,
}

impl fmt::Display for AllocFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityLimit { limit } => write!(f, "capacity limit of {limit} slots"),
            Self::Overflow => write!(f, "byte size overflow"),
            Self::OutOfMemory => write!(f, "out of memory"),
        }
    }
}

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A backing buffer of `requested_slots` could not be allocated.
    ///
    /// Raised by `initialize` and by growth or shrink reallocations.
    /// Growth failures leave the array untouched.
    Allocation {
        /// Number of element slots requested.
        requested_slots: usize,
        /// What refused the request.
        reason: AllocFailure,
    },
    /// `remove` was called with a position outside `[0, size)`.
    OutOfBounds {
        /// The rejected position.
        position: isize,
        /// Logical size at the time of the call.
        size: usize,
    },
    /// The array has been released and holds no storage.
    Released,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation {
                requested_slots,
                reason,
            } => {
                write!(f, "allocation of {requested_slots} slots failed: {reason}")
            }
            Self::OutOfBounds { position, size } => {
                write!(f, "position {position} out of bounds for array of size {size}")
            }
            Self::Released => write!(f, "array has been released"),
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_position_and_size() {
        let err = ArrayError::OutOfBounds {
            position: -3,
            size: 7,
        };
        assert_eq!(err.to_string(), "position -3 out of bounds for array of size 7");
    }

    #[test]
    fn capacity_limit_message_names_limit() {
        let err = ArrayError::Allocation {
            requested_slots: 9,
            reason: AllocFailure::CapacityLimit { limit: 8 },
        };
        assert_eq!(err.to_string(), "allocation of 9 slots failed: capacity limit of 8 slots");
    }
}
