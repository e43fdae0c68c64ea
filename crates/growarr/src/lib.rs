//! A growable array of `i32` with explicit, fallible capacity management.
//!
//! [`GrowableArray`] owns one contiguous buffer plus a logical size. The
//! buffer's length is the physical capacity; only the first `size` slots
//! hold live elements.
//!
//! # Capacity policy
//!
//! ```text
//! append:  size + 1 >= capacity  → capacity = max(2 × capacity, 1)
//! remove:  after every removal   → capacity = capacity - 1
//! ```
//!
//! The shrink rule is configurable through [`ArrayConfig`]: [`ShrinkPolicy::Halve`]
//! trades the per-removal reallocation for amortized halving.
//!
//! # Failure model
//!
//! Every reallocation draws a fresh buffer from a [`SlotAllocator`] and
//! copies the live prefix into it before the old buffer is dropped.
//!
//! - A failed growth aborts the append and leaves the array untouched.
//! - A failed shrink is reported in [`Removal::shrink`]; the removal stands.
//! - An out-of-range `remove` has no side effects.
//!
//! Growth and shrink events are emitted as `tracing` events at `debug`,
//! allocation failures at `warn`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod array;
pub mod config;
pub mod error;

/// The element type stored by [`GrowableArray`].
pub type Element = i32;

// Public re-exports for the primary API surface.
pub use alloc::{SlotAllocator, SystemAllocator};
pub use array::{ArrayState, GrowableArray, Removal, ShrinkOutcome};
pub use config::{ArrayConfig, ShrinkPolicy};
pub use error::{AllocFailure, ArrayError};
