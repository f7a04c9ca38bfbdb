//! Device-independent texture upload core.
//!
//! This crate turns a normalized [`TextureDescriptor`] into an
//! alignment-correct staging layout and packs tightly-packed source texels
//! into that layout, so a caller can feed the result to a tiled GPU image
//! resource through the [`UploadDevice`] contract.
//!
//! # Pipeline
//!
//! 1. Classify the pixel encoding ([`PixelFormat`]).
//! 2. Plan per-(slice, mip) footprints under the device's alignment rules
//!    ([`plan_subresource_layout`]).
//! 3. Write source rows into a caller-owned staging buffer
//!    ([`pack_staging`], [`pack_staging_rgb24`]).
//! 4. Hand the ordered plan back so the caller records one copy per
//!    subresource followed by a single resource state transition.
//!
//! The whole pipeline is synchronous and shares nothing between loads;
//! concurrent loads of different assets need no locking.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod allocate;
pub mod descriptor;
pub mod device;
pub mod format;
pub mod layout;
pub mod upload;

#[cfg(test)]
pub mod test_prelude;

pub use allocate::{allocate_staging, AllocateError};
pub use descriptor::TextureDescriptor;
pub use device::{ResourceState, UploadDevice};
pub use format::PixelFormat;
pub use layout::{
    plan_subresource_layout, LayoutConstraints, LayoutError, SubresourceFootprint,
    SubresourceLayout,
};
pub use upload::{expand_rgb24_row, pack_staging, pack_staging_rgb24, UploadError};
