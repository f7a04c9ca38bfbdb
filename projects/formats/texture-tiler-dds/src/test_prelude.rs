//! Common test imports and DDS header builders for tests.
//!
//! This module re-exports commonly used items to avoid repetitive imports
//! in test modules, and provides builders that assemble well-formed legacy
//! and DX10-extended headers byte by byte.

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;

use crate::dds::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Builds a minimal legacy DDS header (magic plus 124-byte header).
///
/// The pixel format block is left zeroed; combine with [`set_fourcc`] or
/// [`set_bit_masks`] to describe the encoding.
pub fn legacy_header(width: u32, height: u32, mip_count: u32, depth: u32) -> Vec<u8> {
    let mut data = vec![0u8; DDS_HEADER_SIZE];

    // SAFETY: the buffer is DDS_HEADER_SIZE (128) bytes, covering every
    // offset written below.
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDS_MAGIC, 0);
        writer.write_u32_at(124, 4);
        writer.write_u32_at(
            DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT,
            DDS_FLAGS_OFFSET as isize,
        );
        writer.write_u32_at(height, DDS_HEIGHT_OFFSET as isize);
        writer.write_u32_at(width, DDS_WIDTH_OFFSET as isize);
        writer.write_u32_at(depth, DDS_DEPTH_OFFSET as isize);
        writer.write_u32_at(mip_count, DDS_MIPMAP_COUNT_OFFSET as isize);
        writer.write_u32_at(32, DDS_PIXELFORMAT_OFFSET as isize);
    }
    data
}

/// Marks the pixel format as fourCC-selected and stores `fourcc`.
pub fn set_fourcc(data: &mut [u8], fourcc: u32) {
    assert!(data.len() >= DDS_HEADER_SIZE);

    // SAFETY: length asserted above.
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(fourcc, FOURCC_OFFSET as isize);
    }
}

/// Describes the pixel format through per-channel bit masks.
pub fn set_bit_masks(data: &mut [u8], bit_count: u32, r: u32, g: u32, b: u32, a: u32) {
    assert!(data.len() >= DDS_HEADER_SIZE);

    // SAFETY: length asserted above.
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDPF_RGB, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
        writer.write_u32_at(bit_count, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
        writer.write_u32_at(r, DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
        writer.write_u32_at(g, DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
        writer.write_u32_at(b, DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
        writer.write_u32_at(a, DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);
    }
}

/// Sets the caps2 cubemap bit plus all six face-present bits.
pub fn set_cubemap_caps(data: &mut [u8]) {
    assert!(data.len() >= DDS_HEADER_SIZE);

    // SAFETY: length asserted above.
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(DDSCAPS2_CUBEMAP_ALLFACES, DDS_CAPS2_OFFSET as isize);
    }
}

/// Rewrites the header's fourCC to the `DX10` sentinel and appends the
/// 20-byte extended header.
pub fn extend_dx10(mut data: Vec<u8>, dxgi_format: u32, array_size: u32) -> Vec<u8> {
    assert!(data.len() >= DDS_HEADER_SIZE);
    set_fourcc(&mut data, FOURCC_DX10);
    data.resize(DDS_HEADER_SIZE + DX10_HEADER_SIZE, 0);

    // SAFETY: the buffer now spans the extended header, covering
    // DX10_RESERVED_OFFSET (0x90) + 4.
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(dxgi_format, DX10_FORMAT_OFFSET as isize);
        writer.write_u32_at(3, DX10_RESOURCE_DIMENSION_OFFSET as isize); // TEXTURE2D
        writer.write_u32_at(array_size, DX10_ARRAY_SIZE_OFFSET as isize);
    }
    data
}

/// Appends `payload_len` bytes of a counting pattern to a header buffer.
pub fn with_payload(mut data: Vec<u8>, payload_len: usize) -> Vec<u8> {
    let start = data.len();
    data.resize(start + payload_len, 0);
    for (i, byte) in data[start..].iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }
    data
}
