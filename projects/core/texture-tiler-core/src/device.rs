//! The device-facing contract of the upload pipeline.
//!
//! The core never talks to a native graphics API; it requires exactly the
//! capabilities below and nothing more. Copy commands must be recorded
//! after every staging byte for the subresource is written, and the state
//! transition after all copies; the loader preserves that ordering.

use crate::descriptor::TextureDescriptor;
use crate::layout::{LayoutConstraints, SubresourceFootprint};
use core::fmt::Debug;

/// Resource states a loaded texture moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// The resource is a copy destination.
    CopyDest,
    /// The resource is readable from shaders.
    ShaderResource,
}

/// A device that can receive a staged texture upload.
///
/// Implementations are mechanical wrappers around a native device: they
/// report alignment rules, allocate an image resource, and record
/// linear-to-tiled copies plus a state transition. They perform no layout
/// arithmetic themselves.
pub trait UploadDevice {
    /// Opaque handle to an allocated image resource.
    type Resource;
    /// Device-side failure (allocation refusal, lost device, ...).
    type Error: Debug;

    /// Alignment rules staging layouts for this device must obey.
    fn layout_constraints(&self) -> LayoutConstraints;

    /// Allocates an image resource for `descriptor`.
    fn allocate_resource(
        &mut self,
        descriptor: &TextureDescriptor,
    ) -> Result<Self::Resource, Self::Error>;

    /// Records one linear-to-tiled copy from the staging region described
    /// by `footprint` into the matching subresource of `resource`.
    fn record_copy(
        &mut self,
        resource: &Self::Resource,
        footprint: &SubresourceFootprint,
    ) -> Result<(), Self::Error>;

    /// Records a whole-resource state transition.
    fn record_transition(
        &mut self,
        resource: &Self::Resource,
        before: ResourceState,
        after: ResourceState,
    ) -> Result<(), Self::Error>;
}
