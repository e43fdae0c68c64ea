//! Test utilities for growarr development.
//!
//! Provides [`SlotAllocator`] doubles for driving reallocation failures
//! deterministically, and fixtures for building pre-filled arrays.
//!
//! - [`FailingAllocator`] — succeeds N times, then fails every request.
//! - [`CountingAllocator`] — records every requested slot count.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use growarr::{
    AllocFailure, ArrayConfig, ArrayError, Element, GrowableArray, SlotAllocator, SystemAllocator,
};

/// Allocator that succeeds `succeed_count` times, then fails.
///
/// Every request is counted, including failed ones. Use
/// [`arm`](FailingAllocator::arm) to reset the budget mid-test.
#[derive(Debug)]
pub struct FailingAllocator {
    pub succeed_count: usize,
    pub failure: AllocFailure,
    call_count: usize,
}

impl FailingAllocator {
    /// Create an allocator that succeeds `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            failure: AllocFailure::OutOfMemory,
            call_count: 0,
        }
    }

    /// Allow `succeed_count` more successful allocations from now on.
    pub fn arm(&mut self, succeed_count: usize) {
        self.succeed_count = self.call_count + succeed_count;
    }

    /// Number of `allocate` calls so far.
    pub fn call_count(&self) -> usize {
        self.call_count
    }
}

impl SlotAllocator for FailingAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Element>, AllocFailure> {
        let n = self.call_count;
        self.call_count += 1;
        if n >= self.succeed_count {
            return Err(self.failure);
        }
        SystemAllocator.allocate(slots)
    }
}

/// Allocator that records every requested slot count.
#[derive(Debug, Default)]
pub struct CountingAllocator {
    pub requests: Vec<usize>,
}

impl SlotAllocator for CountingAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Element>, AllocFailure> {
        self.requests.push(slots);
        SystemAllocator.allocate(slots)
    }
}

/// Build an array with `start_capacity` slots holding `0..len` in order.
pub fn sequential_array(start_capacity: usize, len: Element) -> Result<GrowableArray, ArrayError> {
    let mut arr = GrowableArray::initialize(start_capacity)?;
    for i in 0..len {
        arr.append(i)?;
    }
    Ok(arr)
}

/// Like [`sequential_array`], but every buffer comes from `alloc`.
pub fn sequential_array_with<A: SlotAllocator>(
    config: ArrayConfig,
    alloc: A,
    len: Element,
) -> Result<GrowableArray<A>, ArrayError> {
    let mut arr = GrowableArray::with_allocator(config, alloc)?;
    for i in 0..len {
        arr.append(i)?;
    }
    Ok(arr)
}
