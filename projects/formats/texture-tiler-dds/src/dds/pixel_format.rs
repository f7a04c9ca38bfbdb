//! Mapping of legacy pixel-format descriptions to canonical formats.
//!
//! Legacy DDS writers describe the pixel encoding either through a fourCC
//! code (block-compressed families and a handful of numeric D3DFMT ids) or
//! through per-channel bit masks. The extended (DX10) header instead
//! carries an explicit DXGI format id. All three roads lead to
//! [`PixelFormat`]; anything unrecognized maps to [`PixelFormat::Unknown`],
//! which is not an error here but terminal for the load downstream.

use super::constants::*;
use texture_tiler_core::PixelFormat;

/// The legacy pixel-format description embedded in a DDS header.
///
/// Consumed once by the mapping functions below; callers normally discard
/// it after obtaining a [`PixelFormat`], except for the bit count, which
/// selects the 24-bit expansion path on upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormatDescriptor {
    pub flags: u32,
    pub fourcc: u32,
    pub bit_count: u32,
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
}

impl PixelFormatDescriptor {
    /// Whether the fourCC field (rather than the bit masks) selects the format.
    #[inline]
    pub fn uses_fourcc(&self) -> bool {
        (self.flags & DDPF_FOURCC) != 0
    }

    /// Maps this description to a canonical format.
    pub fn to_pixel_format(&self) -> PixelFormat {
        if self.uses_fourcc() {
            map_fourcc(self.fourcc)
        } else {
            map_red_mask(self.r_mask)
        }
    }
}

/// Maps a legacy fourCC (or numeric D3DFMT code stored in the fourCC
/// field) to a canonical format.
pub fn map_fourcc(fourcc: u32) -> PixelFormat {
    match fourcc {
        FOURCC_DXT1 => PixelFormat::BC1,
        FOURCC_DXT2 | FOURCC_DXT3 => PixelFormat::BC2,
        FOURCC_DXT4 | FOURCC_DXT5 => PixelFormat::BC3,
        FOURCC_BC4U => PixelFormat::BC4,
        FOURCC_BC4S => PixelFormat::BC4Signed,
        FOURCC_ATI2 => PixelFormat::BC5,
        FOURCC_BC5S => PixelFormat::BC5Signed,
        // Old writers store raw D3DFMT ids in the fourCC field.
        D3DFMT_A16B16G16R16 => PixelFormat::RGBA16,
        D3DFMT_Q16W16V16U16 => PixelFormat::RGBA16Signed,
        D3DFMT_R16F => PixelFormat::R16Float,
        D3DFMT_G16R16F => PixelFormat::RG16Float,
        D3DFMT_A16B16G16R16F => PixelFormat::RGBA16Float,
        D3DFMT_R32F => PixelFormat::R32Float,
        D3DFMT_G32R32F => PixelFormat::RG32Float,
        D3DFMT_A32B32G32R32F => PixelFormat::RGBA32Float,
        _ => PixelFormat::Unknown,
    }
}

/// Maps a legacy uncompressed layout to a canonical format.
///
/// The red-channel mask alone distinguishes every supported legacy
/// layout, so the table is keyed on it; a zero red mask is the alpha-only
/// layout. Masks outside the table map to [`PixelFormat::Unknown`].
pub fn map_red_mask(r_mask: u32) -> PixelFormat {
    match r_mask {
        RMASK_RGBA8888 => PixelFormat::RGBA8888,
        RMASK_BGRA8888 => PixelFormat::BGRA8888,
        RMASK_RG16 => PixelFormat::RG16,
        RMASK_RGB10A2 => PixelFormat::RGB10A2,
        RMASK_BGR5A1 => PixelFormat::BGR5A1,
        RMASK_B5G6R5 => PixelFormat::B5G6R5,
        RMASK_ALPHA_ONLY => PixelFormat::A8,
        _ => PixelFormat::Unknown,
    }
}

/// Maps a DXGI format id from the extended header to a canonical format.
pub fn map_dxgi_format(dxgi_format: u32) -> PixelFormat {
    match dxgi_format {
        DXGI_FORMAT_BC1_TYPELESS | DXGI_FORMAT_BC1_UNORM | DXGI_FORMAT_BC1_UNORM_SRGB => {
            PixelFormat::BC1
        }
        DXGI_FORMAT_BC2_TYPELESS | DXGI_FORMAT_BC2_UNORM | DXGI_FORMAT_BC2_UNORM_SRGB => {
            PixelFormat::BC2
        }
        DXGI_FORMAT_BC3_TYPELESS | DXGI_FORMAT_BC3_UNORM | DXGI_FORMAT_BC3_UNORM_SRGB => {
            PixelFormat::BC3
        }
        DXGI_FORMAT_BC4_TYPELESS | DXGI_FORMAT_BC4_UNORM => PixelFormat::BC4,
        DXGI_FORMAT_BC4_SNORM => PixelFormat::BC4Signed,
        DXGI_FORMAT_BC5_TYPELESS | DXGI_FORMAT_BC5_UNORM => PixelFormat::BC5,
        DXGI_FORMAT_BC5_SNORM => PixelFormat::BC5Signed,
        DXGI_FORMAT_BC6H_TYPELESS | DXGI_FORMAT_BC6H_UF16 | DXGI_FORMAT_BC6H_SF16 => {
            PixelFormat::BC6H
        }
        DXGI_FORMAT_BC7_TYPELESS | DXGI_FORMAT_BC7_UNORM | DXGI_FORMAT_BC7_UNORM_SRGB => {
            PixelFormat::BC7
        }
        DXGI_FORMAT_R8G8B8A8_TYPELESS
        | DXGI_FORMAT_R8G8B8A8_UNORM
        | DXGI_FORMAT_R8G8B8A8_UNORM_SRGB
        | DXGI_FORMAT_R8G8B8A8_UINT
        | DXGI_FORMAT_R8G8B8A8_SNORM
        | DXGI_FORMAT_R8G8B8A8_SINT => PixelFormat::RGBA8888,
        DXGI_FORMAT_B8G8R8A8_UNORM
        | DXGI_FORMAT_B8G8R8A8_TYPELESS
        | DXGI_FORMAT_B8G8R8A8_UNORM_SRGB => PixelFormat::BGRA8888,
        DXGI_FORMAT_R16G16_UNORM => PixelFormat::RG16,
        DXGI_FORMAT_R10G10B10A2_UNORM => PixelFormat::RGB10A2,
        DXGI_FORMAT_B5G5R5A1_UNORM => PixelFormat::BGR5A1,
        DXGI_FORMAT_B5G6R5_UNORM => PixelFormat::B5G6R5,
        DXGI_FORMAT_A8_UNORM => PixelFormat::A8,
        DXGI_FORMAT_R16G16B16A16_UNORM => PixelFormat::RGBA16,
        DXGI_FORMAT_R16G16B16A16_SNORM => PixelFormat::RGBA16Signed,
        DXGI_FORMAT_R16G16B16A16_FLOAT => PixelFormat::RGBA16Float,
        DXGI_FORMAT_R16_FLOAT => PixelFormat::R16Float,
        DXGI_FORMAT_R16G16_FLOAT => PixelFormat::RG16Float,
        DXGI_FORMAT_R32_FLOAT => PixelFormat::R32Float,
        DXGI_FORMAT_R32G32_FLOAT => PixelFormat::RG32Float,
        DXGI_FORMAT_R32G32B32A32_FLOAT => PixelFormat::RGBA32Float,
        _ => PixelFormat::Unknown,
    }
}
