//! Array configuration parameters.

use crate::Element;

/// What `remove` does to the capacity after a successful removal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShrinkPolicy {
    /// Reallocate to `capacity - 1` after every removal.
    #[default]
    ByOne,
    /// Halve the capacity once `size < capacity / 4`.
    Halve,
}

impl ShrinkPolicy {
    /// Target capacity after a removal, or `None` to leave the buffer alone.
    ///
    /// The returned capacity is never below `size`.
    pub fn target(self, size: usize, capacity: usize) -> Option<usize> {
        match self {
            Self::ByOne if capacity > size => Some(capacity - 1),
            Self::Halve if size < capacity / 4 => Some((capacity / 2).max(size)),
            _ => None,
        }
    }
}

/// Configuration for a [`GrowableArray`](crate::GrowableArray).
///
/// Immutable after initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated by `initialize`.
    ///
    /// Default: 10. Zero is accepted; the first append grows to one slot.
    pub start_capacity: usize,

    /// Hard upper bound on capacity, in slots.
    ///
    /// Requests above it fail with `AllocFailure::CapacityLimit`; growth
    /// is clamped to it. Default: [`ArrayConfig::MAX_ADDRESSABLE_SLOTS`].
    pub max_capacity: usize,

    /// Shrink policy for `remove`. Default: [`ShrinkPolicy::ByOne`].
    pub shrink: ShrinkPolicy,
}

impl ArrayConfig {
    /// Default starting capacity.
    pub const DEFAULT_START_CAPACITY: usize = 10;

    /// Largest slot count whose byte size fits in `isize`.
    pub const MAX_ADDRESSABLE_SLOTS: usize = isize::MAX as usize / std::mem::size_of::<Element>();

    /// Create a config with the given starting capacity and defaults elsewhere.
    pub fn new(start_capacity: usize) -> Self {
        Self {
            start_capacity,
            max_capacity: Self::MAX_ADDRESSABLE_SLOTS,
            shrink: ShrinkPolicy::default(),
        }
    }

    /// Set `max_capacity`.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Set the shrink policy.
    pub fn with_shrink(mut self, shrink: ShrinkPolicy) -> Self {
        self.shrink = shrink;
        self
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START_CAPACITY)
    }
}
