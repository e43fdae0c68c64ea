//! Fallible buffer allocation.
//!
//! Every reallocation in [`GrowableArray`](crate::GrowableArray) goes through
//! a [`SlotAllocator`]: the array asks for a fresh, fully initialised buffer,
//! copies its live elements across, and only then drops the old buffer. A
//! failed request therefore never disturbs existing storage.

use crate::error::AllocFailure;
use crate::Element;

/// Source of backing buffers for a [`GrowableArray`](crate::GrowableArray).
///
/// Implementations return a `Vec` whose `len()` equals `slots` exactly.
/// The contents of the returned slots are unspecified; the array overwrites
/// every slot it later exposes.
pub trait SlotAllocator {
    /// Allocate a buffer of exactly `slots` elements.
    fn allocate(&mut self, slots: usize) -> Result<Vec<Element>, AllocFailure>;
}

/// Allocator backed by the global heap via `Vec::try_reserve_exact`.
///
/// Out-of-memory is reported as [`AllocFailure::OutOfMemory`] instead of
/// aborting the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl SlotAllocator for SystemAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Element>, AllocFailure> {
        slots
            .checked_mul(std::mem::size_of::<Element>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(AllocFailure::Overflow)?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(slots).map_err(|_| AllocFailure::OutOfMemory)?;
        buf.resize(slots, 0);
        Ok(buf)
    }
}

impl<A: SlotAllocator + ?Sized> SlotAllocator for &mut A {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Element>, AllocFailure> {
        (**self).allocate(slots)
    }
}
