//! Aligned memory allocation for staging regions.

use core::alloc::Layout;
use safe_allocator_api::prelude::*;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Errors that can occur while allocating a staging region.
#[derive(Debug, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` exceeding isize::MAX. {0}")]
    Layout(#[from] core::alloc::LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}

/// Allocates a staging region aligned to the device's base placement
/// alignment, so offset 0 of the region satisfies
/// [`LayoutConstraints::base_placement_alignment`].
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
/// - `base_placement_alignment`: Alignment of the start of the region
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
///
/// [`LayoutConstraints::base_placement_alignment`]: crate::layout::LayoutConstraints::base_placement_alignment
pub fn allocate_staging(
    num_bytes: usize,
    base_placement_alignment: usize,
) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, base_placement_alignment)?;
    Ok(RawAlloc::new(layout)?)
}
