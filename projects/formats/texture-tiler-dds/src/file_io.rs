//! Memory-mapped file loading.
//!
//! Maps the source file read-only with `lightweight-mmap`, allocates a
//! placement-aligned staging region sized from the planned layout, and
//! runs the in-memory pipeline over the mapping.

use crate::loader::{load_from_slice, prepare_upload, LoadError, LoadedTexture};
use core::fmt::Debug;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;
use texture_tiler_core::{allocate_staging, AllocateError, UploadDevice};
use thiserror::Error;

/// Errors that can occur while loading a texture from a file.
#[derive(Debug, Error)]
pub enum FileLoadError<E: Debug> {
    /// Error opening the file handle.
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] HandleOpenError),

    /// Error creating the memory mapping.
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] MmapError),

    /// Error allocating the staging region.
    #[error("Failed to allocate staging memory: {0}")]
    Staging(#[from] AllocateError),

    /// Error in the in-memory load pipeline.
    #[error(transparent)]
    Load(#[from] LoadError<E>),
}

/// Loads a DDS file at `path` onto `device`.
///
/// The staging region is allocated internally and freed on return; the
/// recorded copies read from it, so devices that defer command execution
/// past this call must copy out of their staging view first.
pub fn load_file<D: UploadDevice>(
    device: &mut D,
    path: &Path,
) -> Result<LoadedTexture<D::Resource>, FileLoadError<D::Error>> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    let data = mapping.as_slice();

    let constraints = device.layout_constraints();
    let plan = prepare_upload(data, &constraints).map_err(LoadError::Prepare)?;
    let mut staging = allocate_staging(
        plan.layout.total_size as usize,
        constraints.base_placement_alignment as usize,
    )?;

    Ok(load_from_slice(device, data, staging.as_mut_slice())?)
}
