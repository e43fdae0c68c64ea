//! The growable array and its capacity bookkeeping.
//!
//! [`GrowableArray`] owns a single `Vec<Element>` whose length is the
//! physical capacity. The logical size is tracked separately: slots
//! `[0, size)` hold live elements, slots `[size, capacity)` are allocated
//! but unspecified.
//!
//! Capacity only changes through a single reallocation path, which asks
//! the [`SlotAllocator`] for a fresh buffer, copies the live prefix, and
//! swaps it in. The old buffer is dropped after the swap, so a failed
//! allocation leaves the array exactly as it was.

use tracing::{debug, warn};

use crate::alloc::{SlotAllocator, SystemAllocator};
use crate::config::ArrayConfig;
use crate::error::{AllocFailure, ArrayError};
use crate::Element;

/// Lifecycle state of a [`GrowableArray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayState {
    /// Storage is allocated; all operations are valid.
    Initialized,
    /// Storage has been freed by [`GrowableArray::release`].
    Released,
}

/// What happened to the capacity after a removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShrinkOutcome {
    /// The shrink policy did not ask for a smaller buffer.
    Unchanged,
    /// The buffer was reallocated to a smaller capacity.
    Shrunk {
        /// Capacity before the shrink.
        from: usize,
        /// Capacity after the shrink.
        to: usize,
    },
    /// The shrink reallocation failed. The removal itself still happened.
    Failed(ArrayError),
}

/// Result of a successful [`GrowableArray::remove`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removal {
    /// The element that was removed.
    pub value: Element,
    /// Whether the post-removal shrink succeeded.
    pub shrink: ShrinkOutcome,
}

/// A growable, exclusively-owned array of [`Element`]s.
#[derive(Debug)]
pub struct GrowableArray<A: SlotAllocator = SystemAllocator> {
    /// Backing storage; `buffer.len()` is the capacity.
    buffer: Vec<Element>,
    /// Number of live elements at the front of `buffer`.
    size: usize,
    state: ArrayState,
    config: ArrayConfig,
    alloc: A,
}

impl GrowableArray {
    /// Allocate an empty array with `start_capacity` slots.
    pub fn initialize(start_capacity: usize) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::new(start_capacity))
    }

    /// Allocate an empty array described by `config`.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        Self::with_allocator(config, SystemAllocator)
    }
}

impl<A: SlotAllocator> GrowableArray<A> {
    /// Allocate an empty array described by `config`, drawing every buffer
    /// from `alloc`.
    pub fn with_allocator(config: ArrayConfig, mut alloc: A) -> Result<Self, ArrayError> {
        let requested_slots = config.start_capacity;
        let limit = config.max_capacity;
        if requested_slots > limit {
            warn!(requested_slots, limit, "start capacity above limit");
            return Err(ArrayError::Allocation {
                requested_slots,
                reason: AllocFailure::CapacityLimit { limit },
            });
        }
        let buffer = alloc.allocate(requested_slots).map_err(|reason| {
            warn!(requested_slots, %reason, "initial allocation failed");
            ArrayError::Allocation {
                requested_slots,
                reason,
            }
        })?;
        Ok(Self {
            buffer,
            size: 0,
            state: ArrayState::Initialized,
            config,
            alloc,
        })
    }

    /// Append `item` after the last live element.
    ///
    /// Grows the buffer first when `size + 1 >= capacity`, one slot before
    /// it is actually full. Growth doubles the capacity (a zero capacity
    /// becomes one), clamped to `max_capacity`. If growth fails the array is
    /// left unmodified.
    pub fn append(&mut self, item: Element) -> Result<(), ArrayError> {
        self.ensure_live()?;
        let capacity = self.capacity();
        if self.size + 1 >= capacity {
            if let Some(target) = self.grown_capacity(capacity) {
                debug!(
                    size = self.size,
                    from = capacity,
                    to = target,
                    "capacity reached, growing"
                );
                self.reallocate(target)?;
            }
        }
        // Only reachable once growth is pinned at `max_capacity`.
        if self.size == self.capacity() {
            let limit = self.config.max_capacity;
            warn!(size = self.size, limit, "append blocked by capacity limit");
            return Err(ArrayError::Allocation {
                requested_slots: self.size + 1,
                reason: AllocFailure::CapacityLimit { limit },
            });
        }
        self.buffer[self.size] = item;
        self.size += 1;
        Ok(())
    }

    /// Remove the element at `position`, shifting later elements left.
    ///
    /// Valid positions are `0..size`; anything else returns
    /// [`ArrayError::OutOfBounds`] with no side effects. After the removal
    /// the shrink policy runs; its outcome is reported in
    /// [`Removal::shrink`] and never undoes the removal.
    pub fn remove(&mut self, position: isize) -> Result<Removal, ArrayError> {
        self.ensure_live()?;
        let index = usize::try_from(position)
            .ok()
            .filter(|&i| i < self.size)
            .ok_or(ArrayError::OutOfBounds {
                position,
                size: self.size,
            })?;

        let value = self.buffer[index];
        self.buffer.copy_within(index + 1..self.size, index);
        self.size -= 1;

        let shrink = self.shrink();
        Ok(Removal { value, shrink })
    }

    /// Free the backing buffer.
    ///
    /// Afterwards `append` and `remove` return [`ArrayError::Released`].
    /// Calling `release` again is a no-op.
    pub fn release(&mut self) {
        if self.state == ArrayState::Released {
            return;
        }
        debug!(capacity = self.capacity(), "releasing buffer");
        self.buffer = Vec::new();
        self.size = 0;
        self.state = ArrayState::Released;
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias for [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes held by the backing buffer.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.len() * std::mem::size_of::<Element>()
    }

    /// The live elements, `[0, size)`.
    pub fn as_slice(&self) -> &[Element] {
        &self.buffer[..self.size]
    }

    /// The whole backing buffer, `capacity` slots.
    ///
    /// Slots at or beyond `size` hold unspecified values.
    pub fn raw_buffer(&self) -> &[Element] {
        &self.buffer
    }

    /// The live element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Element> {
        self.as_slice().get(index).copied()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ArrayState {
        self.state
    }

    /// Whether [`release`](Self::release) has been called.
    pub fn is_released(&self) -> bool {
        self.state == ArrayState::Released
    }

    /// The configuration this array was created with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// The allocator backing this array.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Mutable access to the allocator, e.g. to reconfigure a test double.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.alloc
    }

    fn ensure_live(&self) -> Result<(), ArrayError> {
        match self.state {
            ArrayState::Initialized => Ok(()),
            ArrayState::Released => Err(ArrayError::Released),
        }
    }

    /// Doubled capacity clamped to `max_capacity`, or `None` when already
    /// at the limit.
    fn grown_capacity(&self, capacity: usize) -> Option<usize> {
        let target = capacity
            .saturating_mul(2)
            .max(1)
            .min(self.config.max_capacity);
        (target > capacity).then_some(target)
    }

    /// Apply the shrink policy after a removal.
    fn shrink(&mut self) -> ShrinkOutcome {
        let from = self.capacity();
        let Some(to) = self.config.shrink.target(self.size, from) else {
            return ShrinkOutcome::Unchanged;
        };
        debug!(size = self.size, from, to, "shrinking");
        match self.reallocate(to) {
            Ok(()) => ShrinkOutcome::Shrunk { from, to },
            Err(e) => ShrinkOutcome::Failed(e),
        }
    }

    /// Replace the buffer with a fresh one of `new_capacity` slots, keeping
    /// the live prefix. On failure nothing changes.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(new_capacity >= self.size);
        let mut fresh = self.alloc.allocate(new_capacity).map_err(|reason| {
            warn!(
                requested_slots = new_capacity,
                capacity = self.buffer.len(),
                %reason,
                "reallocation failed, keeping existing buffer"
            );
            ArrayError::Allocation {
                requested_slots: new_capacity,
                reason,
            }
        })?;
        fresh[..self.size].copy_from_slice(&self.buffer[..self.size]);
        self.buffer = fresh;
        debug!(
            capacity = self.buffer.len(),
            bytes = self.memory_bytes(),
            "reallocated"
        );
        Ok(())
    }
}
