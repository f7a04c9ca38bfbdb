//! DDS container support for the texture-tiler upload core.
//!
//! Parses legacy and DX10-extended DDS headers into a normalized
//! [`TextureDescriptor`], maps legacy pixel-format descriptions to the
//! canonical [`PixelFormat`] identifiers, and drives the full
//! parse → plan → stage → record pipeline against an
//! [`UploadDevice`](texture_tiler_core::UploadDevice).
//!
//! # Example
//!
//! ```no_run
//! use texture_tiler_dds::loader::{load_from_slice, prepare_upload};
//! use texture_tiler_core::UploadDevice;
//!
//! # fn example<D: UploadDevice>(device: &mut D, file_bytes: &[u8]) {
//! let constraints = device.layout_constraints();
//! let plan = prepare_upload(file_bytes, &constraints).unwrap();
//! let mut staging = vec![0u8; plan.layout.total_size as usize];
//! let texture = load_from_slice(device, file_bytes, &mut staging).unwrap();
//! # }
//! ```
//!
//! [`TextureDescriptor`]: texture_tiler_core::TextureDescriptor
//! [`PixelFormat`]: texture_tiler_core::PixelFormat

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod dds;
pub mod loader;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub mod test_prelude;

pub use dds::parse_header::{parse_header, DdsHeader, HeaderError};
pub use dds::pixel_format::PixelFormatDescriptor;
pub use loader::{load_from_slice, prepare_upload, LoadError, LoadedTexture, PrepareError};

#[cfg(feature = "file-io")]
pub use file_io::{load_file, FileLoadError};
