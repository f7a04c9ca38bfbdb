//! End-to-end DDS upload pipeline.
//!
//! Ties the container parser to the layout planner and staging packer
//! from the core crate, then drives a device through the allocate →
//! record-copies → transition sequence. Everything up to the device calls
//! is pure computation over byte slices, so [`prepare_upload`] can be
//! used on its own to size a staging buffer before touching the device.

use crate::dds::parse_header::{parse_header, HeaderError};
use texture_tiler_core::{
    pack_staging, pack_staging_rgb24, plan_subresource_layout, LayoutConstraints, LayoutError,
    PixelFormat, ResourceState, SubresourceLayout, TextureDescriptor, UploadDevice, UploadError,
};
use thiserror::Error;

/// Errors from the device-free preparation phase.
#[derive(Debug, Error)]
pub enum PrepareError {
    /// The container headers could not be parsed.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// The headers parsed but describe a pixel encoding outside the
    /// supported set.
    #[error("Unsupported pixel format in container header")]
    UnknownPixelFormat,

    /// The described texture cannot be laid out.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors from a full [`load_from_slice`] run.
#[derive(Debug, Error)]
pub enum LoadError<E: core::fmt::Debug> {
    #[error(transparent)]
    Prepare(#[from] PrepareError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    /// A device callback failed.
    #[error("Device operation failed: {0:?}")]
    Device(E),
}

/// Everything needed to stage and record an upload, computed without a
/// device resource.
///
/// `descriptor.mip_levels` holds the emitted mip count after degenerate
/// tail levels collapsed, which may be smaller than the count stated in
/// the container header. Size staging buffers from `layout.total_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    pub descriptor: TextureDescriptor,
    pub layout: SubresourceLayout,
    /// Byte offset of the first payload texel within the source data.
    pub payload_offset: usize,
    /// The payload stores 3-byte pixels requiring expansion on upload.
    pub expand_rgb24: bool,
}

/// A texture the device has allocated and recorded uploads for.
#[derive(Debug)]
pub struct LoadedTexture<R> {
    pub descriptor: TextureDescriptor,
    pub resource: R,
    pub layout: SubresourceLayout,
}

/// Parses `data` and plans its staging layout under `constraints`.
pub fn prepare_upload(
    data: &[u8],
    constraints: &LayoutConstraints,
) -> Result<UploadPlan, PrepareError> {
    let header = parse_header(data)?;
    let mut descriptor = *header.descriptor();
    if descriptor.format == PixelFormat::Unknown {
        return Err(PrepareError::UnknownPixelFormat);
    }

    let layout = plan_subresource_layout(&descriptor, constraints)?;
    // The resource must be created with the emitted mip count, not the
    // count the header stated.
    descriptor.mip_levels = layout.mips_per_slice;

    Ok(UploadPlan {
        descriptor,
        layout,
        payload_offset: header.payload_offset(),
        expand_rgb24: header.expands_rgb24(),
    })
}

/// Loads a DDS container from memory onto `device`.
///
/// Packs the tightly-packed payload into `staging` (which must hold at
/// least `layout.total_size` bytes), allocates the destination resource,
/// records one copy per subresource, and records the final transition to
/// shader-resource state. Command submission and staging lifetime remain
/// the caller's responsibility.
pub fn load_from_slice<D: UploadDevice>(
    device: &mut D,
    data: &[u8],
    staging: &mut [u8],
) -> Result<LoadedTexture<D::Resource>, LoadError<D::Error>> {
    let constraints = device.layout_constraints();
    let plan = prepare_upload(data, &constraints)?;
    let payload = &data[plan.payload_offset..];

    if plan.expand_rgb24 {
        pack_staging_rgb24(&plan.layout, payload, staging)?;
    } else {
        pack_staging(plan.descriptor.format, &plan.layout, payload, staging)?;
    }

    let resource = device
        .allocate_resource(&plan.descriptor)
        .map_err(LoadError::Device)?;
    for footprint in &plan.layout.footprints {
        device
            .record_copy(&resource, footprint)
            .map_err(LoadError::Device)?;
    }
    device
        .record_transition(
            &resource,
            ResourceState::CopyDest,
            ResourceState::ShaderResource,
        )
        .map_err(LoadError::Device)?;

    log::debug!(
        "uploaded {:?} {}x{}{} ({} subresources, {} staging bytes)",
        plan.descriptor.format,
        plan.descriptor.width,
        plan.descriptor.height,
        if plan.descriptor.is_cubemap() {
            " cubemap"
        } else {
            ""
        },
        plan.layout.footprints.len(),
        plan.layout.total_size,
    );

    Ok(LoadedTexture {
        descriptor: plan.descriptor,
        resource,
        layout: plan.layout,
    })
}
