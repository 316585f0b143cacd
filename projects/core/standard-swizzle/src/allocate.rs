//! Aligned scratch allocations.
//!
//! [`allocate_align_64`] returns uninitialized memory aligned to 64 bytes, which is
//! the cache line size on the platforms this crate targets. Callers that expose the
//! memory as a slice must initialize it first; [`allocate_zeroed_align_64`] does that.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::allocator_api::*;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated, uninitialized data
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new(layout)?)
}

/// Allocates zero-filled data with an alignment of 64 bytes.
pub fn allocate_zeroed_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let mut alloc = allocate_align_64(num_bytes)?;
    // SAFETY: the allocation is exactly `num_bytes` long.
    unsafe { core::ptr::write_bytes(alloc.as_mut_ptr(), 0, num_bytes) };
    Ok(alloc)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}
