//! DDS container header parsing.
//!
//! A DDS file opens with a 4-byte magic and a fixed 124-byte legacy
//! header. When the embedded pixel format carries the `DX10` sentinel
//! fourCC, a 20-byte extended header follows with an explicit DXGI format
//! and array size. Both variants normalize into a [`TextureDescriptor`];
//! the variant itself is kept as an explicit sum type because the two
//! carry different extra payload.

use super::constants::*;
use super::pixel_format::{map_dxgi_format, PixelFormatDescriptor};
use endian_writer::{EndianReader, LittleEndianReader};
use texture_tiler_core::TextureDescriptor;
use thiserror::Error;

/// Errors produced while parsing the container headers.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The 4-byte magic does not identify a DDS container.
    #[error("Unrecognized container magic, expected 'DDS '")]
    UnknownMagic,

    /// The buffer ends before the detected header variant does.
    #[error("Header truncated: required at least {required} bytes, got {actual} bytes")]
    Truncated { required: usize, actual: usize },
}

/// A parsed DDS header, one variant per recognized container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdsHeader {
    /// The original header layout: the pixel encoding is described by the
    /// embedded legacy pixel format.
    Legacy {
        descriptor: TextureDescriptor,
        pixel_format: PixelFormatDescriptor,
    },
    /// The extended layout selected by the `DX10` sentinel: an explicit
    /// DXGI format id and array size follow the legacy header.
    Extended {
        descriptor: TextureDescriptor,
        resource_dimension: u32,
        misc_flags: u32,
    },
}

impl DdsHeader {
    /// The normalized texture shape this header describes.
    #[inline]
    pub fn descriptor(&self) -> &TextureDescriptor {
        match self {
            DdsHeader::Legacy { descriptor, .. } => descriptor,
            DdsHeader::Extended { descriptor, .. } => descriptor,
        }
    }

    /// Byte offset of the first payload texel within the container.
    #[inline]
    pub fn payload_offset(&self) -> usize {
        match self {
            DdsHeader::Legacy { .. } => DDS_HEADER_SIZE,
            DdsHeader::Extended { .. } => DDS_HEADER_SIZE + DX10_HEADER_SIZE,
        }
    }

    /// Whether the payload stores 3-byte pixels that must be expanded to
    /// the descriptor's 4-byte format with an opaque alpha fill.
    ///
    /// Only holds when the mapped format actually is 4 bytes per pixel; a
    /// 24-bit count next to a narrower mask is a contradictory header and
    /// its payload is read as the mapped format describes.
    #[inline]
    pub fn expands_rgb24(&self) -> bool {
        matches!(
            self,
            DdsHeader::Legacy {
                descriptor,
                pixel_format,
            } if !pixel_format.uses_fourcc()
                && pixel_format.bit_count == 24
                && descriptor.format.bytes_per_unit() == 4
        )
    }
}

/// Parses the container magic and headers from `data`.
///
/// Field normalization: a zero depth or mip count reads as 1; the array
/// size is 6 when the legacy cubemap caps bits are set, 1 otherwise, and
/// for the extended variant the explicit array size wins over the cubemap
/// bits. The pixel encoding may come out as [`PixelFormat::Unknown`];
/// that is not a parse error, but callers must fail the load before
/// planning with it.
///
/// [`PixelFormat::Unknown`]: texture_tiler_core::PixelFormat::Unknown
pub fn parse_header(data: &[u8]) -> Result<DdsHeader, HeaderError> {
    if data.len() < 4 {
        return Err(HeaderError::Truncated {
            required: DDS_HEADER_SIZE,
            actual: data.len(),
        });
    }
    if u32::from_le_bytes([data[0], data[1], data[2], data[3]]) != DDS_MAGIC {
        return Err(HeaderError::UnknownMagic);
    }
    if data.len() < DDS_HEADER_SIZE {
        return Err(HeaderError::Truncated {
            required: DDS_HEADER_SIZE,
            actual: data.len(),
        });
    }

    // SAFETY: data.len() >= DDS_HEADER_SIZE (128), so every legacy-header
    // offset up to DDS_PIXELFORMAT_ABITMASK_OFFSET (0x68) + 4 is in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) };
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) };
    let depth = unsafe { reader.read_u32_at(DDS_DEPTH_OFFSET as isize) };
    let mip_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) };
    let caps2 = unsafe { reader.read_u32_at(DDS_CAPS2_OFFSET as isize) };

    let pixel_format = PixelFormatDescriptor {
        flags: unsafe { reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize) },
        fourcc: unsafe { reader.read_u32_at(FOURCC_OFFSET as isize) },
        bit_count: unsafe { reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize) },
        r_mask: unsafe { reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize) },
        g_mask: unsafe { reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize) },
        b_mask: unsafe { reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize) },
        a_mask: unsafe { reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize) },
    };

    let depth = depth.max(1);
    let mip_levels = mip_count.max(1);
    let is_cubemap = (caps2 & DDSCAPS2_CUBEMAP_ALLFACES) == DDSCAPS2_CUBEMAP_ALLFACES;

    if pixel_format.uses_fourcc() && pixel_format.fourcc == FOURCC_DX10 {
        // Extended header present; ensure the data is long enough.
        if data.len() < DDS_HEADER_SIZE + DX10_HEADER_SIZE {
            return Err(HeaderError::Truncated {
                required: DDS_HEADER_SIZE + DX10_HEADER_SIZE,
                actual: data.len(),
            });
        }

        // SAFETY: data.len() >= DDS_HEADER_SIZE + DX10_HEADER_SIZE (148),
        // so DX10_RESERVED_OFFSET (0x90) + 4 is in bounds.
        let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
        let resource_dimension =
            unsafe { reader.read_u32_at(DX10_RESOURCE_DIMENSION_OFFSET as isize) };
        let misc_flags = unsafe { reader.read_u32_at(DX10_MISC_FLAG_OFFSET as isize) };
        let array_size = unsafe { reader.read_u32_at(DX10_ARRAY_SIZE_OFFSET as isize) };

        return Ok(DdsHeader::Extended {
            descriptor: TextureDescriptor {
                width,
                height,
                depth,
                // The explicit array size wins over the legacy cubemap bits.
                array_size: array_size.max(1),
                mip_levels,
                format: map_dxgi_format(dxgi_format),
            },
            resource_dimension,
            misc_flags,
        });
    }

    Ok(DdsHeader::Legacy {
        descriptor: TextureDescriptor {
            width,
            height,
            depth,
            array_size: if is_cubemap {
                TextureDescriptor::CUBEMAP_SLICES
            } else {
                1
            },
            mip_levels,
            format: pixel_format.to_pixel_format(),
        },
        pixel_format,
    })
}
